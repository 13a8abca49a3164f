//! Multi-location ranking.

use surfcast_core::{DaySummary, RankedEntry};

/// Order summaries by day score, best first, keeping input order on ties,
/// and keep at most `top_limit`.
pub(crate) fn rank_summaries(mut summaries: Vec<DaySummary>, top_limit: usize) -> Vec<RankedEntry> {
    summaries.sort_by(|lhs, rhs| rhs.avg_score.total_cmp(&lhs.avg_score));
    summaries.truncate(top_limit);
    summaries.iter().map(RankedEntry::from).collect()
}
