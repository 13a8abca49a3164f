//! Rank command implementation for the Surfcast CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use surfcast_core::{RankedEntry, ScoringOptions, SkillLevel};
use surfcast_planner::Planner;

use crate::forecast::load_forecast;
use crate::{
    ARG_BEGINNER_FRIENDLY, ARG_DATE, ARG_FORECAST, ARG_MIN_SURFABLE, ARG_PREFER_CLEAN, ARG_SKILL,
    ARG_TOP, CliError, DEFAULT_TOP, ENV_RANK_DATE, ENV_RANK_FORECAST, parse_date,
    scoring_options, write_json,
};

/// CLI arguments for the `rank` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score every location in a forecast file for one date and \
                 print the best ones, highest day score first. Locations \
                 without qualifying slots on that date are left out.",
    about = "Rank locations for a date"
)]
#[ortho_config(prefix = "SURFCAST")]
pub(crate) struct RankArgs {
    /// Path to a JSON forecast file.
    #[arg(long = ARG_FORECAST, value_name = "path")]
    #[serde(default)]
    pub(crate) forecast: Option<Utf8PathBuf>,
    /// Local date to rank, as YYYY-MM-DD.
    #[arg(long = ARG_DATE, value_name = "date")]
    #[serde(default)]
    pub(crate) date: Option<String>,
    /// Maximum number of locations to print.
    #[arg(long = ARG_TOP, value_name = "count")]
    #[serde(default)]
    pub(crate) top: Option<usize>,
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

impl RankArgs {
    pub(crate) fn into_config(self) -> Result<RankConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RankConfig::try_from(merged)
    }
}

/// Resolved `rank` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RankConfig {
    pub(crate) forecast: Utf8PathBuf,
    pub(crate) date: String,
    pub(crate) top: usize,
    pub(crate) options: ScoringOptions,
}

impl TryFrom<RankArgs> for RankConfig {
    type Error = CliError;

    fn try_from(args: RankArgs) -> Result<Self, Self::Error> {
        let forecast = args.forecast.ok_or(CliError::MissingArgument {
            field: ARG_FORECAST,
            env: ENV_RANK_FORECAST,
        })?;
        let raw_date = args.date.ok_or(CliError::MissingArgument {
            field: ARG_DATE,
            env: ENV_RANK_DATE,
        })?;
        Ok(Self {
            forecast,
            date: parse_date(ARG_DATE, raw_date)?,
            top: args.top.unwrap_or(DEFAULT_TOP),
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
struct Ranking<'a> {
    date: &'a str,
    entries: Vec<RankedEntry>,
}

pub(crate) fn run_rank(args: RankArgs) -> Result<(), CliError> {
    let config = args.into_config()?;
    let mut stdout = std::io::stdout().lock();
    run_rank_with(&config, &mut stdout)
}

pub(crate) fn run_rank_with(config: &RankConfig, writer: &mut dyn Write) -> Result<(), CliError> {
    let locations = load_forecast(&config.forecast)?.into_locations();
    let entries = Planner::new().rank(&config.date, &locations, config.top, &config.options);
    log::info!(
        "ranked {} of {} locations for {}",
        entries.len(),
        locations.len(),
        config.date
    );
    write_json(
        writer,
        &Ranking {
            date: &config.date,
            entries,
        },
    )
}
