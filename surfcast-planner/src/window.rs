//! Surf window detection.
//!
//! A window is a maximal run of slots that share a calendar day, follow one
//! another at exactly the configured step, and all score at or above the
//! surf-worthy threshold.

use surfcast_core::{ConditionTag, SurfWindow};

use crate::ScoredSlot;
use crate::stats::{dominant_tag, finite_mean};

/// Default surf-worthy threshold on the 0 to 10 scale.
pub const DEFAULT_WINDOW_THRESHOLD: f64 = 5.0;
/// Default distance between consecutive slots, in hours.
pub const DEFAULT_STEP_HOURS: u32 = 1;

/// Tuning for window detection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowConfig {
    /// Lowest score a slot may have and still belong to a window.
    pub threshold: f64,
    /// Offset difference that counts as "no gap".
    pub step_hours: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_WINDOW_THRESHOLD,
            step_hours: DEFAULT_STEP_HOURS,
        }
    }
}

/// Emit every window in `slots`, which must already be ordered by
/// `(date_key, offset_hours)`.
pub(crate) fn detect(
    location_id: &str,
    slots: &[&ScoredSlot<'_>],
    config: WindowConfig,
) -> Vec<SurfWindow> {
    let step = i64::from(config.step_hours);
    let mut windows = Vec::new();
    let mut run: Vec<&ScoredSlot<'_>> = Vec::new();
    for &entry in slots {
        let continues = run.last().is_some_and(|previous| {
            previous.date_key == entry.date_key
                && entry.slot.offset_hours.checked_sub(previous.slot.offset_hours) == Some(step)
        });
        if !continues {
            close(location_id, &mut run, &mut windows);
        }
        if entry.score() >= config.threshold {
            run.push(entry);
        } else {
            close(location_id, &mut run, &mut windows);
        }
    }
    close(location_id, &mut run, &mut windows);
    windows
}

fn close(location_id: &str, run: &mut Vec<&ScoredSlot<'_>>, windows: &mut Vec<SurfWindow>) {
    if let Some(window) = build(location_id, run) {
        windows.push(window);
    }
    run.clear();
}

fn build(location_id: &str, run: &[&ScoredSlot<'_>]) -> Option<SurfWindow> {
    let (first, last) = (*run.first()?, *run.last()?);
    let scores = run.iter().map(|entry| entry.score());
    Some(SurfWindow {
        location_id: location_id.to_owned(),
        date_key: first.date_key.clone(),
        start_hour: first.slot.offset_hours,
        end_hour: last.slot.offset_hours,
        start_time_key: first.slot.time_key.clone(),
        end_time_key: last.slot.time_key.clone(),
        average_score: finite_mean(scores.clone()).unwrap_or_default(),
        peak_score: scores.fold(0.0, f64::max),
        slot_count: run.len(),
        dominant_condition_tag: dominant_tag(run.iter().map(|entry| entry.labels.condition_tag))
            .unwrap_or(ConditionTag::Mixed),
        wave_height_m: finite_mean(run.iter().map(|entry| entry.slot.wave_height_m))
            .unwrap_or_default(),
    })
}

/// Pick the window a day view should highlight.
///
/// Highest average score wins, then higher peak, then earlier start.
///
/// # Examples
/// ```
/// use surfcast_core::{ConditionTag, SurfWindow};
/// use surfcast_planner::best_window;
///
/// let window = |start_hour, average_score, peak_score| SurfWindow {
///     location_id: "hossegor".into(),
///     date_key: "2024-06-01".into(),
///     start_hour,
///     end_hour: start_hour + 1,
///     start_time_key: String::new(),
///     end_time_key: String::new(),
///     average_score,
///     peak_score,
///     slot_count: 2,
///     dominant_condition_tag: ConditionTag::Clean,
///     wave_height_m: 1.2,
/// };
/// let windows = [window(2, 6.0, 7.0), window(6, 6.0, 7.5), window(9, 6.0, 7.5)];
///
/// assert_eq!(best_window(&windows).map(|w| w.start_hour), Some(6));
/// assert!(best_window(&[]).is_none());
/// ```
#[must_use]
pub fn best_window(windows: &[SurfWindow]) -> Option<&SurfWindow> {
    windows.iter().min_by(|lhs, rhs| {
        rhs.average_score
            .total_cmp(&lhs.average_score)
            .then_with(|| rhs.peak_score.total_cmp(&lhs.peak_score))
            .then_with(|| lhs.start_hour.cmp(&rhs.start_hour))
    })
}
