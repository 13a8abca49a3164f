//! Forecast slots: one observation at one location and one instant.
//!
//! Slots arrive from the data-retrieval collaborator already normalised into
//! metres, seconds, knots and degrees. Nothing in this crate mutates a slot
//! after construction; every derived view is recomputed on demand.

use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDateTime, Timelike};

use crate::classify::normalise_degrees;
use crate::tags::tag_enum;

const TIME_KEY_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
];

tag_enum! {
    /// Coarse part of the local day.
    ///
    /// # Examples
    /// ```
    /// use surfcast_core::DayPart;
    ///
    /// assert_eq!(DayPart::from_hour(5), DayPart::Morning);
    /// assert_eq!(DayPart::from_hour(12), DayPart::Afternoon);
    /// assert_eq!(DayPart::from_hour(18), DayPart::Evening);
    /// assert_eq!(DayPart::from_hour(3), DayPart::Evening);
    /// ```
    pub enum DayPart {
        /// 05:00 to 11:59 local time.
        Morning => "morning",
        /// 12:00 to 17:59 local time.
        Afternoon => "afternoon",
        /// Every other hour, including the small hours.
        Evening => "evening",
    }
}

impl DayPart {
    /// Classify a local hour of the day.
    #[must_use]
    pub const fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => Self::Morning,
            12..=17 => Self::Afternoon,
            _ => Self::Evening,
        }
    }

    /// Classify the local hour encoded in a time key.
    ///
    /// Keys that cannot be parsed land in [`DayPart::Evening`], the same band
    /// that holds every hour outside the two named ones.
    #[must_use]
    pub fn from_time_key(time_key: &str) -> Self {
        parse_time_key(time_key).map_or(Self::Evening, |time| Self::from_hour(time.hour()))
    }
}

/// Parse an ISO-like local timestamp.
///
/// Accepts `YYYY-MM-DDTHH:MM`, an optional seconds component, a space in
/// place of the `T`, and full RFC 3339 strings (whose local wall-clock time is
/// kept and offset discarded).
///
/// # Examples
/// ```
/// use chrono::Timelike;
/// use surfcast_core::slot::parse_time_key;
///
/// let parsed = parse_time_key("2024-06-01T07:00").expect("valid key");
/// assert_eq!(parsed.hour(), 7);
/// assert!(parse_time_key("tomorrow morning").is_none());
/// ```
#[must_use]
pub fn parse_time_key(time_key: &str) -> Option<NaiveDateTime> {
    let trimmed = time_key.trim();
    TIME_KEY_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(trimmed)
                .ok()
                .map(|stamp| stamp.naive_local())
        })
}

/// One observation at one location and one instant.
///
/// # Examples
/// ```
/// use surfcast_core::{DayPart, SlotRecord};
///
/// let slot = SlotRecord::at("2024-06-01T07:00", 3)
///     .with_waves(1.5, 10.0)
///     .with_wind(8.0, 180.0)
///     .facing(0.0);
///
/// assert_eq!(slot.day_part, DayPart::Morning);
/// assert_eq!(slot.date_key(), "2024-06-01");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotRecord {
    /// Local timestamp of the observation.
    pub time_key: String,
    /// Whole hours from the reference "now" of the forecast.
    pub offset_hours: i64,
    /// Significant wave height in metres.
    pub wave_height_m: f64,
    /// Dominant wave period in seconds.
    pub wave_period_s: f64,
    /// Wind speed in knots.
    pub wind_speed_knots: f64,
    /// Direction the wind blows from, in degrees.
    pub wind_direction_deg: f64,
    /// Direction the break faces, in degrees.
    pub coast_orientation_deg: f64,
    /// Part of the local day derived from the time key.
    pub day_part: DayPart,
}

impl SlotRecord {
    /// Start a slot at `time_key`, deriving its [`DayPart`].
    ///
    /// Numeric fields start at zero; use the `with_*` builders to fill them.
    #[must_use]
    pub fn at(time_key: impl Into<String>, offset_hours: i64) -> Self {
        let time_key = time_key.into();
        let day_part = DayPart::from_time_key(&time_key);
        Self {
            time_key,
            offset_hours,
            wave_height_m: 0.0,
            wave_period_s: 0.0,
            wind_speed_knots: 0.0,
            wind_direction_deg: 0.0,
            coast_orientation_deg: 0.0,
            day_part,
        }
    }

    /// Set wave height and period.
    #[must_use]
    pub const fn with_waves(mut self, height_m: f64, period_s: f64) -> Self {
        self.wave_height_m = height_m;
        self.wave_period_s = period_s;
        self
    }

    /// Set wind speed and the (normalised) direction it blows from.
    #[must_use]
    pub fn with_wind(mut self, speed_knots: f64, direction_deg: f64) -> Self {
        self.wind_speed_knots = speed_knots;
        self.wind_direction_deg = normalise_degrees(direction_deg);
        self
    }

    /// Set the (normalised) direction the break faces.
    #[must_use]
    pub fn facing(mut self, coast_orientation_deg: f64) -> Self {
        self.coast_orientation_deg = normalise_degrees(coast_orientation_deg);
        self
    }

    /// Calendar day of the slot as `YYYY-MM-DD`.
    ///
    /// Unparseable keys fall back to the text before the first `T` or space,
    /// so slots sharing a date prefix still group together.
    #[must_use]
    pub fn date_key(&self) -> String {
        parse_time_key(&self.time_key).map_or_else(
            || {
                self.time_key
                    .trim()
                    .split(['T', ' '])
                    .next()
                    .unwrap_or_default()
                    .to_owned()
            },
            |time| time.date().format("%Y-%m-%d").to_string(),
        )
    }
}

/// The slots supplied for one location.
///
/// The optional `region` is the coarse geographic id used as the second step
/// of the tide profile fallback chain.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocationSlots {
    /// Identifier of the break.
    pub location_id: String,
    /// Coarse region id, if known.
    #[cfg_attr(feature = "serde", serde(default))]
    pub region: Option<String>,
    /// Observations for the break, in any order.
    pub slots: Vec<SlotRecord>,
}

impl LocationSlots {
    /// Group `slots` under `location_id` with no region.
    #[must_use]
    pub fn new(location_id: impl Into<String>, slots: Vec<SlotRecord>) -> Self {
        Self {
            location_id: location_id.into(),
            region: None,
            slots,
        }
    }

    /// Attach a coarse region id.
    #[must_use]
    pub fn in_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Distinct calendar days covered by the slots, in ascending order.
    #[must_use]
    pub fn date_keys(&self) -> Vec<String> {
        self.slots
            .iter()
            .map(SlotRecord::date_key)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::str::FromStr;

    #[rstest]
    #[case(4, DayPart::Evening)]
    #[case(5, DayPart::Morning)]
    #[case(11, DayPart::Morning)]
    #[case(12, DayPart::Afternoon)]
    #[case(17, DayPart::Afternoon)]
    #[case(18, DayPart::Evening)]
    #[case(23, DayPart::Evening)]
    fn day_part_boundaries(#[case] hour: u32, #[case] expected: DayPart) {
        assert_eq!(DayPart::from_hour(hour), expected);
    }

    #[rstest]
    #[case("2024-06-01T07:00", DayPart::Morning)]
    #[case("2024-06-01 13:30:00", DayPart::Afternoon)]
    #[case("2024-06-01T19:00:00+02:00", DayPart::Evening)]
    #[case("not a time", DayPart::Evening)]
    fn day_part_from_time_key(#[case] key: &str, #[case] expected: DayPart) {
        assert_eq!(DayPart::from_time_key(key), expected);
    }

    #[rstest]
    #[case("2024-06-01T07:00", "2024-06-01")]
    #[case("2024-06-01T23:00:00+10:00", "2024-06-01")]
    #[case("2024-06-01Tlate", "2024-06-01")]
    #[case("day-3 dawn", "day-3")]
    fn date_key_prefers_parsed_dates(#[case] key: &str, #[case] expected: &str) {
        assert_eq!(SlotRecord::at(key, 0).date_key(), expected);
    }

    #[rstest]
    fn builders_normalise_angles() {
        let slot = SlotRecord::at("2024-06-01T07:00", 0)
            .with_wind(5.0, -90.0)
            .facing(725.0);
        assert!((slot.wind_direction_deg - 270.0).abs() < 1e-9);
        assert!((slot.coast_orientation_deg - 5.0).abs() < 1e-9);
    }

    #[rstest]
    fn date_keys_are_sorted_and_unique() {
        let location = LocationSlots::new(
            "hossegor",
            vec![
                SlotRecord::at("2024-06-02T07:00", 24),
                SlotRecord::at("2024-06-01T07:00", 0),
                SlotRecord::at("2024-06-01T08:00", 1),
            ],
        );
        assert_eq!(location.date_keys(), vec!["2024-06-01", "2024-06-02"]);
    }

    #[rstest]
    fn day_part_parses_case_insensitively() {
        assert_eq!(DayPart::from_str(" Morning "), Ok(DayPart::Morning));
        assert!(DayPart::from_str("dusk").is_err());
    }
}
