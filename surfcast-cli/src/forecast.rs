//! Forecast file loading.
//!
//! A forecast is a JSON document listing locations and their hourly
//! conditions:
//!
//! ```json
//! {
//!   "locations": [
//!     {
//!       "id": "hossegor",
//!       "region": "landes",
//!       "coast_orientation_deg": 270.0,
//!       "hours": [
//!         {
//!           "time": "2024-06-01T07:00",
//!           "offset_hours": 0,
//!           "wave_height_m": 1.5,
//!           "wave_period_s": 10.0,
//!           "wind_speed_knots": 8.0,
//!           "wind_direction_deg": 90.0
//!         }
//!       ]
//!     }
//!   ]
//! }
//! ```

use std::io::{BufReader, ErrorKind};

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};
use serde::Deserialize;
use surfcast_core::{LocationSlots, SlotRecord};

use crate::CliError;

/// Decoded forecast document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct Forecast {
    pub(crate) locations: Vec<ForecastLocation>,
}

/// One surf break and its hourly conditions.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct ForecastLocation {
    pub(crate) id: String,
    #[serde(default)]
    pub(crate) region: Option<String>,
    pub(crate) coast_orientation_deg: f64,
    #[serde(default)]
    pub(crate) hours: Vec<ForecastHour>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct ForecastHour {
    pub(crate) time: String,
    pub(crate) offset_hours: i64,
    pub(crate) wave_height_m: f64,
    pub(crate) wave_period_s: f64,
    pub(crate) wind_speed_knots: f64,
    pub(crate) wind_direction_deg: f64,
}

impl Forecast {
    /// Convert every location into planner input, keeping file order.
    pub(crate) fn into_locations(self) -> Vec<LocationSlots> {
        self.locations.into_iter().map(LocationSlots::from).collect()
    }
}

impl From<ForecastLocation> for LocationSlots {
    fn from(location: ForecastLocation) -> Self {
        let orientation = location.coast_orientation_deg;
        let slots = location
            .hours
            .into_iter()
            .map(|hour| {
                SlotRecord::at(hour.time, hour.offset_hours)
                    .with_waves(hour.wave_height_m, hour.wave_period_s)
                    .with_wind(hour.wind_speed_knots, hour.wind_direction_deg)
                    .facing(orientation)
            })
            .collect();
        let spot = Self::new(location.id, slots);
        match location.region {
            Some(region) => spot.in_region(region),
            None => spot,
        }
    }
}

/// Load and decode a forecast file.
pub(crate) fn load_forecast(path: &Utf8Path) -> Result<Forecast, CliError> {
    let file = fs_utf8::File::open_ambient(path, ambient_authority()).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            CliError::MissingForecast {
                path: path.to_path_buf(),
            }
        } else {
            CliError::OpenForecast {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    let forecast: Forecast =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| {
            CliError::ParseForecast {
                path: path.to_path_buf(),
                source,
            }
        })?;
    log::debug!(
        "loaded {} locations from {path}",
        forecast.locations.len()
    );
    Ok(forecast)
}
