//! Rule-based slot scoring for Surfcast.
//!
//! [`RuleScorer`] implements the [`SlotScorer`](surfcast_core::SlotScorer)
//! trait with eight additive rules: condition tag, wave height, wave period,
//! wind relation, difficulty, tide suitability, active filters and optional
//! user preferences. The raw sum is clamped to `0.0..=10.0`; no rounding is
//! applied here. Every rule that fires leaves a stable [`Reason`] tag and a
//! contribution in the [`ScoreBreakdown`](surfcast_core::ScoreBreakdown), so
//! scores can be audited after the fact.
//!
//! # Examples
//!
//! ```
//! use surfcast_core::{ScoringOptions, SlotRecord, TideContext};
//! use surfcast_scorer::score_slot;
//!
//! // Strong offshore wind: choppy and challenging.
//! let slot = SlotRecord::at("2024-06-01T07:00", 0)
//!     .with_waves(1.5, 10.0)
//!     .with_wind(20.0, 180.0)
//!     .facing(0.0);
//! let quality = score_slot(&slot, &TideContext::unknown(), &ScoringOptions::default());
//!
//! assert_eq!(quality.score, 2.0);
//! ```

#![forbid(unsafe_code)]

mod rules;

pub use rules::RuleScorer;

use surfcast_core::{
    ScoreInput, ScoringOptions, SlotQuality, SlotRecord, SlotScorer, TideContext, classify,
};

/// Classify `slot` and score it with [`RuleScorer`].
#[must_use]
pub fn score_slot(slot: &SlotRecord, tide: &TideContext, options: &ScoringOptions) -> SlotQuality {
    let labels = classify(slot);
    RuleScorer.score(&ScoreInput {
        slot,
        labels: &labels,
        tide,
        options,
    })
}

#[cfg(test)]
mod tests;
