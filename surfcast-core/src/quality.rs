//! Slot scores together with the audit trail that explains them.

use crate::tags::tag_enum;

tag_enum! {
    /// Stable, low-cardinality tag recorded whenever a scoring rule fires.
    ///
    /// Tags are meant as localisation keys for the presentation layer, not
    /// as free text.
    pub enum Reason {
        /// Clean conditions.
        ConditionClean => "condition-clean",
        /// Mixed conditions.
        ConditionMixed => "condition-mixed",
        /// Choppy conditions.
        ConditionChoppy => "condition-choppy",
        /// Height in the sweet spot.
        GoodWaveHeight => "good-wave-height",
        /// Height a little outside the sweet spot.
        AcceptableWaveHeight => "acceptable-wave-height",
        /// Heavy, oversized surf.
        HeavyWaveHeight => "heavy-wave-height",
        /// Long enough period for organised lines.
        GoodPeriod => "good-period",
        /// Offshore wind.
        WindOffshore => "wind-offshore",
        /// Onshore wind.
        WindOnshore => "wind-onshore",
        /// Cross-shore wind.
        WindCross => "wind-cross",
        /// Beyond average comfort.
        Challenging => "challenging",
        /// Tide level preferred by the break.
        TideSupportive => "tide-supportive",
        /// Tide level the break tolerates.
        TideLessIdeal => "tide-less-ideal",
        /// Minimum-surfable filter active and the slot falls short.
        FilterNotSurfable => "filter-not-surfable",
        /// Beginner filter active and the slot is challenging.
        FilterBeginnerChallenging => "filter-beginner-challenging",
        /// Prefer-clean filter rewards a clean slot.
        FilterPreferClean => "filter-prefer-clean",
        /// Prefer-clean filter penalises a choppy slot.
        FilterAvoidChoppy => "filter-avoid-choppy",
        /// Height inside the preferred range.
        PrefsRangeMatch => "prefs-range-match",
        /// Height well above the preferred range.
        PrefsRangeTooBig => "prefs-range-too-big",
        /// Height well below the preferred range.
        PrefsRangeTooSmall => "prefs-range-too-small",
        /// Preference for clean conditions satisfied.
        PrefsLikesClean => "prefs-likes-clean",
        /// Preference for clean conditions disappointed.
        PrefsDislikesChoppy => "prefs-dislikes-choppy",
        /// Challenging slot for someone who prefers to avoid them.
        PrefsAvoidChallenging => "prefs-avoid-challenging",
    }
}

tag_enum! {
    /// Rule group a contribution belongs to.
    pub enum ScoreCategory {
        /// Condition tag.
        Condition => "condition",
        /// Wave height bands.
        WaveHeight => "wave-height",
        /// Wave period.
        Period => "period",
        /// Wind relation.
        Wind => "wind",
        /// Challenging penalty.
        Challenging => "challenging",
        /// Tide suitability.
        Tide => "tide",
        /// Active filters.
        Filters => "filters",
        /// User preferences.
        Preferences => "preferences",
    }
}

/// Net contribution of each rule group to a raw score.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreBreakdown {
    /// Condition tag contribution.
    pub condition: f64,
    /// Wave height contribution.
    pub wave_height: f64,
    /// Wave period contribution.
    pub period: f64,
    /// Wind relation contribution.
    pub wind: f64,
    /// Challenging penalty.
    pub challenging: f64,
    /// Tide contribution.
    pub tide: f64,
    /// Filter contributions.
    pub filters: f64,
    /// Preference contributions.
    pub preferences: f64,
}

impl ScoreBreakdown {
    /// Add `delta` to the bucket for `category`.
    #[expect(
        clippy::float_arithmetic,
        reason = "accumulating rule contributions is inherently additive"
    )]
    pub fn add(&mut self, category: ScoreCategory, delta: f64) {
        *self.slot_mut(category) += delta;
    }

    /// Contribution recorded for `category`.
    #[must_use]
    pub const fn get(&self, category: ScoreCategory) -> f64 {
        match category {
            ScoreCategory::Condition => self.condition,
            ScoreCategory::WaveHeight => self.wave_height,
            ScoreCategory::Period => self.period,
            ScoreCategory::Wind => self.wind,
            ScoreCategory::Challenging => self.challenging,
            ScoreCategory::Tide => self.tide,
            ScoreCategory::Filters => self.filters,
            ScoreCategory::Preferences => self.preferences,
        }
    }

    /// Unclamped sum of every bucket.
    #[must_use]
    pub fn total(&self) -> f64 {
        ScoreCategory::ALL
            .iter()
            .map(|category| self.get(*category))
            .sum()
    }

    const fn slot_mut(&mut self, category: ScoreCategory) -> &mut f64 {
        match category {
            ScoreCategory::Condition => &mut self.condition,
            ScoreCategory::WaveHeight => &mut self.wave_height,
            ScoreCategory::Period => &mut self.period,
            ScoreCategory::Wind => &mut self.wind,
            ScoreCategory::Challenging => &mut self.challenging,
            ScoreCategory::Tide => &mut self.tide,
            ScoreCategory::Filters => &mut self.filters,
            ScoreCategory::Preferences => &mut self.preferences,
        }
    }
}

/// Score for one slot with its reasons and per-group breakdown.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotQuality {
    /// Clamped score in `0.0..=10.0`.
    pub score: f64,
    /// Tags of the rules that fired, in rule order.
    pub reasons: Vec<Reason>,
    /// Unclamped contribution per rule group.
    pub breakdown: ScoreBreakdown,
}

impl SlotQuality {
    /// Whether `reason` was recorded.
    #[must_use]
    pub fn has_reason(&self, reason: Reason) -> bool {
        self.reasons.contains(&reason)
    }

    /// Reasons as their stable string tags.
    #[must_use]
    pub fn reason_tags(&self) -> Vec<&'static str> {
        self.reasons.iter().map(|reason| reason.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn breakdown_totals_every_bucket() {
        let mut breakdown = ScoreBreakdown::default();
        breakdown.add(ScoreCategory::Condition, 3.0);
        breakdown.add(ScoreCategory::Challenging, -2.0);
        breakdown.add(ScoreCategory::Preferences, 0.5);
        breakdown.add(ScoreCategory::Preferences, -0.5);
        assert_eq!(breakdown.get(ScoreCategory::Condition), 3.0);
        assert_eq!(breakdown.get(ScoreCategory::Preferences), 0.0);
        assert_eq!(breakdown.total(), 1.0);
    }

    #[rstest]
    fn reason_tags_keep_order() {
        let quality = SlotQuality {
            score: 4.0,
            reasons: vec![Reason::ConditionMixed, Reason::GoodPeriod],
            breakdown: ScoreBreakdown::default(),
        };
        assert_eq!(quality.reason_tags(), vec!["condition-mixed", "good-period"]);
        assert!(quality.has_reason(Reason::GoodPeriod));
        assert!(!quality.has_reason(Reason::Challenging));
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn reasons_serialise_as_tags() {
        let json = serde_json::to_string(&vec![Reason::TideLessIdeal, Reason::PrefsRangeTooBig])
            .expect("serialise reasons");
        assert_eq!(json, r#"["tide-less-ideal","prefs-range-too-big"]"#);
    }
}
