//! Day summaries, surf windows and ranking entries.
//!
//! These are plain value objects handed to the presentation layer. They
//! carry no behaviour beyond a few read-only conveniences.

use crate::{ConditionTag, Reason, WindComfort};

/// Wind conditions picked to represent a day.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindSummary {
    /// Wind speed in knots.
    pub speed_knots: f64,
    /// Direction the wind blows from, in degrees.
    pub direction_deg: f64,
    /// Sixteen-point compass label for the direction; `None` when the
    /// direction is not finite.
    #[cfg_attr(feature = "serde", serde(default))]
    pub compass: Option<String>,
    /// Five-way comfort for the break.
    pub comfort: WindComfort,
}

/// A maximal run of consecutive surf-worthy slots within one day.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurfWindow {
    /// Break the window belongs to.
    pub location_id: String,
    /// Calendar day of every slot in the window.
    pub date_key: String,
    /// Offset hours of the first slot.
    pub start_hour: i64,
    /// Offset hours of the last slot.
    pub end_hour: i64,
    /// Time key of the first slot.
    pub start_time_key: String,
    /// Time key of the last slot.
    pub end_time_key: String,
    /// Mean slot score.
    pub average_score: f64,
    /// Highest slot score.
    pub peak_score: f64,
    /// Number of slots in the window.
    pub slot_count: usize,
    /// Majority condition tag.
    pub dominant_condition_tag: ConditionTag,
    /// Mean wave height in metres.
    pub wave_height_m: f64,
}

/// Aggregate view of one location on one calendar day.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DaySummary {
    /// Break the summary belongs to.
    pub location_id: String,
    /// Calendar day as `YYYY-MM-DD`.
    pub date_key: String,
    /// Smallest wave height among qualifying slots.
    pub min_height: f64,
    /// Largest wave height among qualifying slots.
    pub max_height: f64,
    /// Day score: mean of the two best slot scores, rounded to one decimal.
    ///
    /// The result is then clamped into the range spanned by the two scores,
    /// and that bound takes precedence over the rounding: two slots of
    /// 7.0625 give 7.0625, not 7.1.
    pub avg_score: f64,
    /// Majority condition tag.
    pub dominant_condition_tag: ConditionTag,
    /// Time key of the single best slot.
    pub best_slot_key: String,
    /// Reasons recorded for the best slot.
    pub reasons: Vec<Reason>,
    /// Number of qualifying slots.
    pub slot_count: usize,
    /// Wind of the best slot.
    pub representative_wind: WindSummary,
    /// Best surf window of the day, when one was requested and exists.
    #[cfg_attr(feature = "serde", serde(default))]
    pub best_window: Option<SurfWindow>,
}

/// One location's ranking result for a day.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankedEntry {
    /// Break being ranked.
    pub location_id: String,
    /// Day score of the break.
    pub day_score: f64,
    /// Time key of the break's best slot.
    pub best_slot_key: String,
    /// Reasons recorded for the best slot.
    pub reasons: Vec<Reason>,
    /// Majority condition tag of the day.
    pub dominant_condition_tag: ConditionTag,
}

impl From<&DaySummary> for RankedEntry {
    fn from(summary: &DaySummary) -> Self {
        Self {
            location_id: summary.location_id.clone(),
            day_score: summary.avg_score,
            best_slot_key: summary.best_slot_key.clone(),
            reasons: summary.reasons.clone(),
            dominant_condition_tag: summary.dominant_condition_tag,
        }
    }
}
