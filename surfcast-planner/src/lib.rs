//! Day aggregation, surf window detection and location ranking for Surfcast.
//!
//! [`Planner`] owns a [`SlotScorer`](surfcast_core::SlotScorer) (by default
//! [`RuleScorer`](surfcast_scorer::RuleScorer)), a
//! [`TideModel`](surfcast_core::TideModel) and a [`WindowConfig`]. From a
//! location's slots it produces:
//!
//! - [`DaySummary`](surfcast_core::DaySummary) values, scored from the two
//!   best slots of a day, with or without the caller's hard filters;
//! - [`SurfWindow`](surfcast_core::SurfWindow) runs of consecutive
//!   surf-worthy slots that never cross a day boundary;
//! - [`RankedEntry`](surfcast_core::RankedEntry) lists ordering several
//!   locations for one day, ties kept in input order.
//!
//! Hard filters are `min_surfable` and `beginner_friendly`: slots failing
//! them are left out of day summaries and rankings but remain scoreable.
//! `prefer_clean` only adjusts scores.

#![forbid(unsafe_code)]

mod day;
mod planner;
mod rank;
mod scored;
mod stats;
mod window;

pub use planner::Planner;
pub use scored::ScoredSlot;
pub use stats::dominant_tag;
pub use window::{DEFAULT_STEP_HOURS, DEFAULT_WINDOW_THRESHOLD, WindowConfig, best_window};
