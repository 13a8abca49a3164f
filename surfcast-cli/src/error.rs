//! Error types emitted by the Surfcast CLI.
//!
//! Keep this error type reasonably small, as every command helper returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors emitted by the Surfcast CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Long flag name of the option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// A date option is not a `YYYY-MM-DD` calendar date.
    #[error("{field} {value:?} is not a YYYY-MM-DD date: {source}")]
    InvalidDate {
        /// Long flag name of the option.
        field: &'static str,
        /// The rejected input.
        value: String,
        /// Underlying parse failure.
        #[source]
        source: chrono::ParseError,
    },
    /// The window threshold is outside `0.0..=10.0`.
    #[error("window threshold {value} must lie between 0 and 10")]
    InvalidThreshold {
        /// The rejected threshold.
        value: f64,
    },
    /// The forecast file does not exist.
    #[error("forecast path {path:?} does not exist")]
    MissingForecast {
        /// Path that was looked up.
        path: Utf8PathBuf,
    },
    /// Opening the forecast file failed.
    #[error("failed to open forecast at {path:?}: {source}")]
    OpenForecast {
        /// Path that was opened.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Forecast JSON could not be decoded.
    #[error("failed to parse forecast JSON at {path:?}: {source}")]
    ParseForecast {
        /// Path that was decoded.
        path: Utf8PathBuf,
        /// Underlying decode failure.
        #[source]
        source: serde_json::Error,
    },
    /// The requested location is not part of the forecast.
    #[error("location {location:?} is not in forecast {path:?}")]
    UnknownLocation {
        /// Requested location identifier.
        location: String,
        /// Forecast that was searched.
        path: Utf8PathBuf,
    },
    /// Serialising command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
