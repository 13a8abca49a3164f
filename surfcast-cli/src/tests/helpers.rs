//! Test helpers for writing forecast fixtures to disk.

use camino::Utf8PathBuf;
use serde_json::{Value, json};
use tempfile::TempDir;

/// A forecast file inside a temporary directory.
pub(super) struct ForecastFile {
    _dir: TempDir,
    path: Utf8PathBuf,
}

impl ForecastFile {
    pub(super) fn with_contents(contents: &str) -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 tempdir");
        let path = root.join("forecast.json");
        std::fs::write(&path, contents).expect("write forecast");
        Self { _dir: dir, path }
    }

    pub(super) fn new(forecast: &Value) -> Self {
        Self::with_contents(&forecast.to_string())
    }

    pub(super) fn path(&self) -> Utf8PathBuf {
        self.path.clone()
    }
}

/// One forecast hour on a north-facing break with a head-high swell.
pub(super) fn hour(time: &str, offset: i64, wind_knots: f64) -> Value {
    json!({
        "time": time,
        "offset_hours": offset,
        "wave_height_m": 1.5,
        "wave_period_s": 10.0,
        "wind_speed_knots": wind_knots,
        "wind_direction_deg": 180.0
    })
}

/// Three breaks: one clean, one blown out and one forecast for the next day.
pub(super) fn sample_forecast() -> Value {
    json!({
        "locations": [
            {
                "id": "windy-point",
                "coast_orientation_deg": 0.0,
                "hours": [
                    hour("2024-06-01T07:00", 0, 20.0),
                    hour("2024-06-01T08:00", 1, 20.0)
                ]
            },
            {
                "id": "glass-reef",
                "region": "nowhere-in-particular",
                "coast_orientation_deg": 0.0,
                "hours": [
                    hour("2024-06-01T07:00", 0, 8.0),
                    hour("2024-06-01T08:00", 1, 8.0),
                    hour("2024-06-02T07:00", 24, 8.0)
                ]
            },
            {
                "id": "tomorrow-bay",
                "coast_orientation_deg": 0.0,
                "hours": [hour("2024-06-02T07:00", 24, 8.0)]
            }
        ]
    })
}

/// Decode what a command wrote.
pub(super) fn output_json(buffer: &[u8]) -> Value {
    serde_json::from_slice(buffer).expect("command output should be JSON")
}
