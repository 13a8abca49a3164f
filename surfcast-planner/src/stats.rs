//! Small numeric and voting helpers shared by day and window aggregation.

use surfcast_core::ConditionTag;

/// Majority condition tag; level votes go to the tag with the lower
/// [`ConditionTag::priority`]. `None` when there are no votes.
///
/// # Examples
/// ```
/// use surfcast_core::ConditionTag;
/// use surfcast_planner::dominant_tag;
///
/// let tags = [ConditionTag::Choppy, ConditionTag::Clean, ConditionTag::Choppy];
/// assert_eq!(dominant_tag(tags), Some(ConditionTag::Choppy));
///
/// let level = [ConditionTag::Choppy, ConditionTag::Mixed];
/// assert_eq!(dominant_tag(level), Some(ConditionTag::Mixed));
/// ```
#[must_use]
pub fn dominant_tag<I>(tags: I) -> Option<ConditionTag>
where
    I: IntoIterator<Item = ConditionTag>,
{
    let mut votes = [0_usize; 3];
    let mut any = false;
    for tag in tags {
        any = true;
        if let Some(count) = votes.get_mut(usize::from(tag.priority())) {
            *count = count.saturating_add(1);
        }
    }
    if !any {
        return None;
    }
    ConditionTag::ALL
        .iter()
        .copied()
        .max_by(|lhs, rhs| {
            vote(&votes, *lhs)
                .cmp(&vote(&votes, *rhs))
                .then_with(|| rhs.priority().cmp(&lhs.priority()))
        })
}

fn vote(votes: &[usize; 3], tag: ConditionTag) -> usize {
    votes
        .get(usize::from(tag.priority()))
        .copied()
        .unwrap_or_default()
}

/// Mean of the finite values, or `None` when there are none.
#[expect(
    clippy::float_arithmetic,
    reason = "averaging scores and heights is the point of this helper"
)]
pub(crate) fn finite_mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .filter(|value| value.is_finite())
        .fold((0.0, 0.0), |(sum, count), value| (sum + value, count + 1.0));
    (count > 0.0).then(|| sum / count)
}

/// Round to one decimal place, halves away from zero.
#[expect(
    clippy::float_arithmetic,
    reason = "decimal rounding scales, rounds and scales back"
)]
pub(crate) fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
