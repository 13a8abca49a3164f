//! A slot paired with everything derived from it.

use surfcast_core::{ConditionLabels, SlotQuality, SlotRecord};

/// One slot after classification and scoring.
///
/// Borrowing the record keeps day and window passes over a location free of
/// clones; the derived parts are owned.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredSlot<'a> {
    /// The observation.
    pub slot: &'a SlotRecord,
    /// Calendar day of the slot.
    pub date_key: String,
    /// Labels derived from the slot.
    pub labels: ConditionLabels,
    /// Score and reasons.
    pub quality: SlotQuality,
}

impl ScoredSlot<'_> {
    /// Shorthand for `self.quality.score`.
    #[must_use]
    pub const fn score(&self) -> f64 {
        self.quality.score
    }
}
