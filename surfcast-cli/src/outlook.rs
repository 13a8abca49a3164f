//! Outlook command implementation for the Surfcast CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use surfcast_core::{DaySummary, MAX_SCORE, ScoringOptions, SkillLevel, SurfWindow};
use surfcast_planner::{Planner, WindowConfig};

use crate::forecast::load_forecast;
use crate::{
    ARG_BEGINNER_FRIENDLY, ARG_DATE, ARG_FORECAST, ARG_LOCATION, ARG_MIN_SURFABLE,
    ARG_PREFER_CLEAN, ARG_SKILL, ARG_WINDOW_THRESHOLD, CliError, ENV_OUTLOOK_FORECAST,
    ENV_OUTLOOK_LOCATION, parse_date, scoring_options, write_json,
};

/// CLI arguments for the `outlook` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Summarise every forecast day for one location and list \
                 its surf windows: runs of consecutive hours scoring at or \
                 above the window threshold.",
    about = "Show the outlook for one location"
)]
#[ortho_config(prefix = "SURFCAST")]
pub(crate) struct OutlookArgs {
    /// Path to a JSON forecast file.
    #[arg(long = ARG_FORECAST, value_name = "path")]
    #[serde(default)]
    pub(crate) forecast: Option<Utf8PathBuf>,
    /// Identifier of the location to describe.
    #[arg(long = ARG_LOCATION, value_name = "id")]
    #[serde(default)]
    pub(crate) location: Option<String>,
    /// Restrict output to one local date, as YYYY-MM-DD.
    #[arg(long = ARG_DATE, value_name = "date")]
    #[serde(default)]
    pub(crate) date: Option<String>,
    /// Minimum slot score for a surf window.
    #[arg(long = ARG_WINDOW_THRESHOLD, value_name = "score")]
    #[serde(default)]
    pub(crate) window_threshold: Option<f64>,
    /// Leave out slots that are too small or too short-period to ride.
    #[arg(long = ARG_MIN_SURFABLE, value_name = "bool", num_args = 0..=1, default_missing_value = "true")]
    #[serde(default)]
    pub(crate) min_surfable: Option<bool>,
    /// Leave out challenging slots.
    #[arg(long = ARG_BEGINNER_FRIENDLY, value_name = "bool", num_args = 0..=1, default_missing_value = "true")]
    #[serde(default)]
    pub(crate) beginner_friendly: Option<bool>,
    /// Favour clean conditions and penalise choppy ones.
    #[arg(long = ARG_PREFER_CLEAN, value_name = "bool", num_args = 0..=1, default_missing_value = "true")]
    #[serde(default)]
    pub(crate) prefer_clean: Option<bool>,
    /// Skill level whose preferences adjust the scores.
    #[arg(long = ARG_SKILL, value_name = "level")]
    #[serde(default)]
    pub(crate) skill: Option<SkillLevel>,
}

impl OutlookArgs {
    pub(crate) fn into_config(self) -> Result<OutlookConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        OutlookConfig::try_from(merged)
    }
}

/// Resolved `outlook` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct OutlookConfig {
    pub(crate) forecast: Utf8PathBuf,
    pub(crate) location: String,
    pub(crate) date: Option<String>,
    pub(crate) window: WindowConfig,
    pub(crate) options: ScoringOptions,
}

impl OutlookConfig {
    fn includes(&self, date_key: &str) -> bool {
        self.date.as_deref().is_none_or(|date| date == date_key)
    }
}

impl TryFrom<OutlookArgs> for OutlookConfig {
    type Error = CliError;

    fn try_from(args: OutlookArgs) -> Result<Self, Self::Error> {
        let forecast = args.forecast.ok_or(CliError::MissingArgument {
            field: ARG_FORECAST,
            env: ENV_OUTLOOK_FORECAST,
        })?;
        let location = args.location.ok_or(CliError::MissingArgument {
            field: ARG_LOCATION,
            env: ENV_OUTLOOK_LOCATION,
        })?;
        let date = args
            .date
            .map(|value| parse_date(ARG_DATE, value))
            .transpose()?;
        let mut window = WindowConfig::default();
        if let Some(threshold) = args.window_threshold {
            if !(0.0..=MAX_SCORE).contains(&threshold) {
                return Err(CliError::InvalidThreshold { value: threshold });
            }
            window.threshold = threshold;
        }
        Ok(Self {
            forecast,
            location,
            date,
            window,
            options: scoring_options(
                args.min_surfable,
                args.beginner_friendly,
                args.prefer_clean,
                args.skill,
            ),
        })
    }
}

#[derive(Debug, Serialize)]
struct Outlook<'a> {
    location_id: &'a str,
    region: Option<&'a str>,
    days: Vec<DaySummary>,
    windows: Vec<SurfWindow>,
}

pub(crate) fn run_outlook(args: OutlookArgs) -> Result<(), CliError> {
    let config = args.into_config()?;
    let mut stdout = std::io::stdout().lock();
    run_outlook_with(&config, &mut stdout)
}

pub(crate) fn run_outlook_with(
    config: &OutlookConfig,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let locations = load_forecast(&config.forecast)?.into_locations();
    let Some(location) = locations
        .iter()
        .find(|candidate| candidate.location_id == config.location)
    else {
        return Err(CliError::UnknownLocation {
            location: config.location.clone(),
            path: config.forecast.clone(),
        });
    };

    let planner = Planner::new().with_window_config(config.window);
    let days: Vec<DaySummary> = planner
        .summarise_days(location, &config.options)
        .into_iter()
        .filter(|day| config.includes(&day.date_key))
        .collect();
    let windows: Vec<SurfWindow> = planner
        .detect_windows(location, &config.options)
        .into_iter()
        .filter(|window| config.includes(&window.date_key))
        .collect();
    log::info!(
        "{}: {} days, {} windows",
        location.location_id,
        days.len(),
        windows.len()
    );
    write_json(
        writer,
        &Outlook {
            location_id: &location.location_id,
            region: location.region.as_deref(),
            days,
            windows,
        },
    )
}
