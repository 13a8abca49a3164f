//! Command-line interface for ranking surf breaks from a forecast file.
//!
//! Two subcommands sit on top of [`surfcast_planner::Planner`]:
//!
//! - `rank` orders every location in a forecast for one date;
//! - `outlook` prints day summaries and surf windows for a single location.
//!
//! Options are layered with `ortho_config`: command-line flags win over
//! `SURFCAST_CMDS_*` environment variables, which win over configuration
//! files. Results are written to stdout as pretty-printed JSON.
#![forbid(unsafe_code)]

use std::io::Write;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::Serialize;
use surfcast_core::{Filters, ScoringOptions, SkillLevel, UserPreferences};

mod error;
mod forecast;
mod outlook;
mod rank;

pub use error::CliError;

use outlook::OutlookArgs;
use rank::RankArgs;

const ARG_FORECAST: &str = "forecast";
const ARG_DATE: &str = "date";
const ARG_TOP: &str = "top";
const ARG_LOCATION: &str = "location";
const ARG_WINDOW_THRESHOLD: &str = "window-threshold";
const ARG_MIN_SURFABLE: &str = "min-surfable";
const ARG_BEGINNER_FRIENDLY: &str = "beginner-friendly";
const ARG_PREFER_CLEAN: &str = "prefer-clean";
const ARG_SKILL: &str = "skill";
const ENV_RANK_FORECAST: &str = "SURFCAST_CMDS_RANK_FORECAST";
const ENV_RANK_DATE: &str = "SURFCAST_CMDS_RANK_DATE";
const ENV_OUTLOOK_FORECAST: &str = "SURFCAST_CMDS_OUTLOOK_FORECAST";
const ENV_OUTLOOK_LOCATION: &str = "SURFCAST_CMDS_OUTLOOK_LOCATION";

/// Number of ranked locations printed when `--top` is not given.
const DEFAULT_TOP: usize = 5;

/// Run the Surfcast CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Rank(args) => rank::run_rank(args),
        Command::Outlook(args) => outlook::run_outlook(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "surfcast",
    about = "Score, summarise and rank surf breaks from forecast data",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank every location in a forecast for one date.
    Rank(RankArgs),
    /// Show day summaries and surf windows for one location.
    Outlook(OutlookArgs),
}

/// Build scoring options from the filter switches and skill level.
fn scoring_options(
    min_surfable: Option<bool>,
    beginner_friendly: Option<bool>,
    prefer_clean: Option<bool>,
    skill: Option<SkillLevel>,
) -> ScoringOptions {
    let options = ScoringOptions::with_filters(Filters {
        min_surfable: min_surfable.unwrap_or(false),
        beginner_friendly: beginner_friendly.unwrap_or(false),
        prefer_clean: prefer_clean.unwrap_or(false),
    });
    skill.map_or(options, |level| {
        options.with_preferences(UserPreferences::for_skill(level))
    })
}

/// Normalise a `YYYY-MM-DD` date to the slot date-key form.
fn parse_date(field: &'static str, value: String) -> Result<String, CliError> {
    match NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d") {
        Ok(date) => Ok(date.format("%Y-%m-%d").to_string()),
        Err(source) => Err(CliError::InvalidDate {
            field,
            value,
            source,
        }),
    }
}

fn write_json<T: Serialize>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;
