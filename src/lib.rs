//! Facade crate for the Surfcast scoring engine.
//!
//! This crate re-exports the core domain types and the rule-based scorer, and
//! exposes the day planner (aggregation, windows and ranking) behind the
//! `planner` feature.

#![forbid(unsafe_code)]

pub use surfcast_core::{
    ConditionLabels, ConditionTag, DayPart, DaySummary, Filters, LocationSlots, MAX_SCORE,
    RankedEntry, Reason, RegionTideProfile, ScoreBreakdown, ScoreCategory, ScoreInput,
    ScoringOptions, SizeBand, SkillLevel, SlotQuality, SlotRecord, SlotScorer, SurfWindow,
    SurfaceQuality, TideContext, TideLevel, TideModel, TideSuitability, UnknownTag,
    UserPreferences, WindComfort, WindRelation, WindSummary, classify,
};
pub use surfcast_scorer::{RuleScorer, score_slot};

#[cfg(feature = "planner")]
pub use surfcast_planner::{
    DEFAULT_STEP_HOURS, DEFAULT_WINDOW_THRESHOLD, Planner, ScoredSlot, WindowConfig, best_window,
    dominant_tag,
};
