//! The eight additive scoring rules.
//!
//! Each rule adds a signed contribution to one [`ScoreCategory`] and records
//! a [`Reason`] when it fires. Rules that depend on a non-finite measurement
//! stay silent.

use surfcast_core::classify::conditions_measured;
use surfcast_core::{
    ConditionLabels, ConditionTag, Filters, Reason, ScoreBreakdown, ScoreCategory, ScoreInput,
    SlotQuality, SlotRecord, SlotScorer, TideContext, TideSuitability, UserPreferences,
    WindRelation,
};

const CLEAN_POINTS: f64 = 3.0;
const MIXED_POINTS: f64 = 1.0;
const GOOD_HEIGHT: (f64, f64) = (0.9, 2.0);
const ACCEPTABLE_HEIGHT: (f64, f64) = (0.7, 2.4);
const HEAVY_HEIGHT_M: f64 = 2.8;
const GOOD_PERIOD_S: f64 = 8.0;
const CHALLENGING_PENALTY: f64 = -2.0;
const NOT_SURFABLE_PENALTY: f64 = -2.0;
const BEGINNER_CHALLENGING_PENALTY: f64 = -3.0;
const PREFER_CLEAN_BONUS: f64 = 1.0;
const AVOID_CHOPPY_PENALTY: f64 = -2.0;
const PREFERENCE_STEP: f64 = 0.5;
const TOO_BIG_MARGIN_M: f64 = 0.6;
const TOO_SMALL_MARGIN_M: f64 = 0.4;

/// Rule-based [`SlotScorer`] covering condition, size, period, wind,
/// difficulty, tide, filters and preferences.
///
/// # Examples
/// ```
/// use surfcast_core::{ScoreInput, ScoringOptions, SlotRecord, SlotScorer, TideContext, classify};
/// use surfcast_scorer::RuleScorer;
///
/// let slot = SlotRecord::at("2024-06-01T07:00", 0)
///     .with_waves(1.5, 10.0)
///     .with_wind(8.0, 180.0)
///     .facing(0.0);
/// let labels = classify(&slot);
/// let quality = RuleScorer.score(&ScoreInput {
///     slot: &slot,
///     labels: &labels,
///     tide: &TideContext::unknown(),
///     options: &ScoringOptions::default(),
/// });
///
/// assert_eq!(quality.score, 7.0);
/// assert_eq!(
///     quality.reason_tags(),
///     ["condition-clean", "good-wave-height", "good-period", "wind-offshore"]
/// );
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RuleScorer;

impl SlotScorer for RuleScorer {
    fn score(&self, input: &ScoreInput<'_>) -> SlotQuality {
        let mut tally = Tally::default();
        let condition = conditions_measured(input.slot).then_some(input.labels.condition_tag);
        tally.condition(condition);
        tally.wave_height(input.slot.wave_height_m);
        tally.period(input.slot.wave_period_s);
        tally.wind(input.labels.wind_relation);
        tally.challenging(input.labels);
        tally.tide(input.tide);
        tally.filters(input.options.filters, input.slot, input.labels, condition);
        if let Some(preferences) = &input.options.preferences {
            tally.preferences(preferences, input.slot, input.labels, condition);
        }
        let quality = tally.finish();
        log::trace!(
            "scored slot {} at {:.1} ({} reasons)",
            input.slot.time_key,
            quality.score,
            quality.reasons.len()
        );
        quality
    }
}

#[derive(Debug, Default)]
struct Tally {
    breakdown: ScoreBreakdown,
    reasons: Vec<Reason>,
}

impl Tally {
    fn record(&mut self, category: ScoreCategory, delta: f64, reason: Reason) {
        self.breakdown.add(category, delta);
        self.reasons.push(reason);
    }

    fn condition(&mut self, tag: Option<ConditionTag>) {
        let (delta, reason) = match tag {
            Some(ConditionTag::Clean) => (CLEAN_POINTS, Reason::ConditionClean),
            Some(ConditionTag::Mixed) => (MIXED_POINTS, Reason::ConditionMixed),
            Some(ConditionTag::Choppy) => (0.0, Reason::ConditionChoppy),
            None => return,
        };
        self.record(ScoreCategory::Condition, delta, reason);
    }

    fn wave_height(&mut self, height_m: f64) {
        if !height_m.is_finite() {
            return;
        }
        if within(height_m, GOOD_HEIGHT) {
            self.record(ScoreCategory::WaveHeight, 2.0, Reason::GoodWaveHeight);
        } else if within(height_m, ACCEPTABLE_HEIGHT) {
            self.record(ScoreCategory::WaveHeight, 1.0, Reason::AcceptableWaveHeight);
        } else if height_m > HEAVY_HEIGHT_M {
            self.record(ScoreCategory::WaveHeight, -1.0, Reason::HeavyWaveHeight);
        }
    }

    fn period(&mut self, period_s: f64) {
        if period_s.is_finite() && period_s >= GOOD_PERIOD_S {
            self.record(ScoreCategory::Period, 1.0, Reason::GoodPeriod);
        }
    }

    fn wind(&mut self, relation: Option<WindRelation>) {
        let (delta, reason) = match relation {
            Some(WindRelation::Offshore) => (1.0, Reason::WindOffshore),
            Some(WindRelation::Onshore) => (-1.0, Reason::WindOnshore),
            Some(WindRelation::Cross) => (0.0, Reason::WindCross),
            None => return,
        };
        self.record(ScoreCategory::Wind, delta, reason);
    }

    fn challenging(&mut self, labels: &ConditionLabels) {
        if labels.challenging {
            self.record(
                ScoreCategory::Challenging,
                CHALLENGING_PENALTY,
                Reason::Challenging,
            );
        }
    }

    fn tide(&mut self, tide: &TideContext) {
        match tide.tide_suitability {
            Some(TideSuitability::Good) => {
                self.record(ScoreCategory::Tide, 1.0, Reason::TideSupportive);
            }
            Some(TideSuitability::LessIdeal) => {
                self.record(ScoreCategory::Tide, -1.0, Reason::TideLessIdeal);
            }
            None => {}
        }
    }

    fn filters(
        &mut self,
        filters: Filters,
        slot: &SlotRecord,
        labels: &ConditionLabels,
        condition: Option<ConditionTag>,
    ) {
        let measured = slot.wave_height_m.is_finite() && slot.wave_period_s.is_finite();
        if filters.min_surfable && measured && !labels.min_surfable {
            self.record(
                ScoreCategory::Filters,
                NOT_SURFABLE_PENALTY,
                Reason::FilterNotSurfable,
            );
        }
        if filters.beginner_friendly && labels.challenging {
            self.record(
                ScoreCategory::Filters,
                BEGINNER_CHALLENGING_PENALTY,
                Reason::FilterBeginnerChallenging,
            );
        }
        if filters.prefer_clean {
            match condition {
                Some(ConditionTag::Clean) => self.record(
                    ScoreCategory::Filters,
                    PREFER_CLEAN_BONUS,
                    Reason::FilterPreferClean,
                ),
                Some(ConditionTag::Choppy) => self.record(
                    ScoreCategory::Filters,
                    AVOID_CHOPPY_PENALTY,
                    Reason::FilterAvoidChoppy,
                ),
                Some(ConditionTag::Mixed) | None => {}
            }
        }
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "range margins are offsets from the preferred bounds"
    )]
    fn preferences(
        &mut self,
        preferences: &UserPreferences,
        slot: &SlotRecord,
        labels: &ConditionLabels,
        condition: Option<ConditionTag>,
    ) {
        let height = slot.wave_height_m;
        let min = preferences.preferred_min_height;
        let max = preferences.preferred_max_height;
        if height.is_finite() {
            if (min..=max).contains(&height) {
                self.record(
                    ScoreCategory::Preferences,
                    PREFERENCE_STEP,
                    Reason::PrefsRangeMatch,
                );
            } else if height > max + TOO_BIG_MARGIN_M {
                self.record(
                    ScoreCategory::Preferences,
                    -PREFERENCE_STEP,
                    Reason::PrefsRangeTooBig,
                );
            } else if height < min - TOO_SMALL_MARGIN_M {
                self.record(
                    ScoreCategory::Preferences,
                    -PREFERENCE_STEP,
                    Reason::PrefsRangeTooSmall,
                );
            }
        }
        if preferences.likes_clean {
            match condition {
                Some(ConditionTag::Clean) => self.record(
                    ScoreCategory::Preferences,
                    PREFERENCE_STEP,
                    Reason::PrefsLikesClean,
                ),
                Some(ConditionTag::Choppy) => self.record(
                    ScoreCategory::Preferences,
                    -PREFERENCE_STEP,
                    Reason::PrefsDislikesChoppy,
                ),
                Some(ConditionTag::Mixed) | None => {}
            }
        }
        if !preferences.can_handle_challenging && labels.challenging {
            self.record(
                ScoreCategory::Preferences,
                -PREFERENCE_STEP,
                Reason::PrefsAvoidChallenging,
            );
        }
    }

    fn finish(self) -> SlotQuality {
        SlotQuality {
            score: RuleScorer::sanitise(self.breakdown.total()),
            reasons: self.reasons,
            breakdown: self.breakdown,
        }
    }
}

fn within(value: f64, (low, high): (f64, f64)) -> bool {
    (low..=high).contains(&value)
}
