//! Core domain types for the Surfcast engine.
//!
//! Slots arrive as immutable [`SlotRecord`] values. The crate derives
//! [`ConditionLabels`] from them, resolves heuristic [`TideContext`] through
//! a [`TideModel`], and defines the [`SlotScorer`] seam that turns all of it
//! into a [`SlotQuality`]. Aggregates ([`DaySummary`], [`SurfWindow`],
//! [`RankedEntry`]) are plain value objects shared with downstream crates.
//!
//! Nothing here performs I/O or keeps mutable shared state, so every
//! function may be called concurrently without coordination.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod classify;
pub mod labels;
pub mod options;
pub mod quality;
pub mod scorer;
pub mod slot;
pub mod summary;
mod tags;
pub mod tide;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use classify::classify;
pub use labels::{
    ConditionLabels, ConditionTag, SizeBand, SurfaceQuality, WindComfort, WindRelation,
};
pub use options::{Filters, ScoringOptions, SkillLevel, UserPreferences};
pub use quality::{Reason, ScoreBreakdown, ScoreCategory, SlotQuality};
pub use scorer::{MAX_SCORE, ScoreInput, SlotScorer};
pub use slot::{DayPart, LocationSlots, SlotRecord};
pub use summary::{DaySummary, RankedEntry, SurfWindow, WindSummary};
pub use tags::UnknownTag;
pub use tide::{RegionTideProfile, TideContext, TideLevel, TideModel, TideSuitability};
