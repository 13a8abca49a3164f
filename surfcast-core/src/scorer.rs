//! Score slots for a set of filters and preferences.
//!
//! The [`SlotScorer`] trait turns a slot, its labels and its tide context
//! into a [`SlotQuality`](crate::SlotQuality). Aggregation, window detection
//! and ranking are generic over it.

use crate::{ConditionLabels, ScoringOptions, SlotQuality, SlotRecord, TideContext};

/// Upper bound of every slot score.
pub const MAX_SCORE: f64 = 10.0;

/// Everything a scorer may look at for one slot.
#[derive(Debug, Clone, Copy)]
pub struct ScoreInput<'a> {
    /// The raw observation.
    pub slot: &'a SlotRecord,
    /// Labels derived from `slot`.
    pub labels: &'a ConditionLabels,
    /// Tide context for the slot's location and day part.
    pub tide: &'a TideContext,
    /// Filters and preferences in force.
    pub options: &'a ScoringOptions,
}

/// Calculate a quality score for one slot.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so planners can be
/// shared across threads. Scoring is infallible: missing information
/// contributes nothing rather than failing.
///
/// Implementations must:
/// - Produce finite scores.
/// - Keep scores within `0.0..=MAX_SCORE`.
/// - Return identical output for identical input.
///
/// Use [`SlotScorer::sanitise`] to apply the first two guards.
///
/// # Examples
///
/// ```rust
/// use surfcast_core::{
///     ScoreInput, ScoringOptions, SlotQuality, SlotRecord, SlotScorer, TideContext, classify,
/// };
///
/// struct Flat;
///
/// impl SlotScorer for Flat {
///     fn score(&self, _input: &ScoreInput<'_>) -> SlotQuality {
///         SlotQuality { score: Self::sanitise(12.0), ..SlotQuality::default() }
///     }
/// }
///
/// let slot = SlotRecord::at("2024-06-01T07:00", 0);
/// let labels = classify(&slot);
/// let input = ScoreInput {
///     slot: &slot,
///     labels: &labels,
///     tide: &TideContext::unknown(),
///     options: &ScoringOptions::default(),
/// };
/// assert_eq!(Flat.score(&input).score, 10.0);
/// ```
pub trait SlotScorer: Send + Sync {
    /// Score the slot described by `input`.
    fn score(&self, input: &ScoreInput<'_>) -> SlotQuality;

    /// Clamp and validate a raw score.
    ///
    /// Returns `0.0` for non-finite values and clamps to `0.0..=MAX_SCORE`.
    fn sanitise(score: f64) -> f64
    where
        Self: Sized,
    {
        if !score.is_finite() {
            return 0.0;
        }
        score.clamp(0.0, MAX_SCORE)
    }
}
