//! Day-level aggregation.
//!
//! The day score is the mean of the two best slot scores, rounded to one
//! decimal; a lone slot is counted twice.

use surfcast_core::classify::cardinal_direction;
use surfcast_core::{ConditionTag, DaySummary, WindSummary};

use crate::ScoredSlot;
use crate::stats::{dominant_tag, round_to_tenth};

/// Summarise the qualifying slots of one day. `None` when `slots` is empty.
pub(crate) fn summarise(
    location_id: &str,
    date_key: &str,
    mut slots: Vec<&ScoredSlot<'_>>,
) -> Option<DaySummary> {
    slots.sort_by(|lhs, rhs| rhs.score().total_cmp(&lhs.score()));
    let best = *slots.first()?;
    let second = slots.get(1).copied().unwrap_or(best);
    let (min_height, max_height) = height_range(&slots);
    Some(DaySummary {
        location_id: location_id.to_owned(),
        date_key: date_key.to_owned(),
        min_height,
        max_height,
        avg_score: day_score(best.score(), second.score()),
        dominant_condition_tag: dominant_tag(slots.iter().map(|slot| slot.labels.condition_tag))
            .unwrap_or(ConditionTag::Mixed),
        best_slot_key: best.slot.time_key.clone(),
        reasons: best.quality.reasons.clone(),
        slot_count: slots.len(),
        representative_wind: WindSummary {
            speed_knots: best.slot.wind_speed_knots,
            direction_deg: best.slot.wind_direction_deg,
            compass: cardinal_direction(best.slot.wind_direction_deg).map(str::to_owned),
            comfort: best.labels.wind_comfort,
        },
        best_window: None,
    })
}

/// Mean of the two best scores to one decimal.
///
/// Rounding never carries the result outside `second..=best`; when the two
/// conflict the bound wins and the result may keep more decimals.
#[expect(
    clippy::float_arithmetic,
    reason = "the day score is an arithmetic mean"
)]
pub(crate) fn day_score(best: f64, second: f64) -> f64 {
    round_to_tenth((best + second) / 2.0).clamp(second.min(best), best.max(second))
}

/// Smallest and largest finite wave height; zero when none is finite.
fn height_range(slots: &[&ScoredSlot<'_>]) -> (f64, f64) {
    slots
        .iter()
        .map(|slot| slot.slot.wave_height_m)
        .filter(|height| height.is_finite())
        .fold(None, |range: Option<(f64, f64)>, height| {
            Some(range.map_or((height, height), |(low, high)| {
                (low.min(height), high.max(height))
            }))
        })
        .unwrap_or((0.0, 0.0))
}
