//! Unit coverage for the scoring rules.

use rstest::{fixture, rstest};
use surfcast_core::test_support::offshore_slot;
use surfcast_core::{
    Filters, Reason, ScoreCategory, ScoringOptions, SkillLevel, SlotRecord, TideContext,
    TideLevel, TideSuitability, UserPreferences,
};

use crate::score_slot;

#[fixture]
fn clean_slot() -> SlotRecord {
    offshore_slot("2024-06-01T07:00", 0)
}

fn cross_slot(height: f64) -> SlotRecord {
    SlotRecord::at("2024-06-01T07:00", 0)
        .with_waves(height, 5.0)
        .with_wind(8.0, 90.0)
        .facing(0.0)
}

fn tide(suitability: TideSuitability) -> TideContext {
    TideContext {
        tide_level: Some(TideLevel::Mid),
        tide_suitability: Some(suitability),
        profile_id: Some("test".to_owned()),
    }
}

fn score(slot: &SlotRecord, options: &ScoringOptions) -> surfcast_core::SlotQuality {
    score_slot(slot, &TideContext::unknown(), options)
}

#[rstest]
fn offshore_head_high_scores_seven(clean_slot: SlotRecord) {
    let quality = score(&clean_slot, &ScoringOptions::default());
    assert_eq!(quality.score, 7.0);
    assert_eq!(
        quality.reasons,
        vec![
            Reason::ConditionClean,
            Reason::GoodWaveHeight,
            Reason::GoodPeriod,
            Reason::WindOffshore,
        ]
    );
}

#[rstest]
fn strong_wind_scores_two(clean_slot: SlotRecord) {
    let slot = clean_slot.with_wind(20.0, 180.0);
    let quality = score(&slot, &ScoringOptions::default());
    assert_eq!(quality.score, 2.0);
    assert!(quality.has_reason(Reason::ConditionChoppy));
    assert!(quality.has_reason(Reason::Challenging));
    assert_eq!(quality.breakdown.get(ScoreCategory::Challenging), -2.0);
}

#[rstest]
#[case(0.5, 0.0)]
#[case(0.7, 1.0)]
#[case(0.9, 2.0)]
#[case(2.0, 2.0)]
#[case(2.4, 1.0)]
#[case(2.6, 0.0)]
#[case(3.0, -1.0)]
fn wave_height_bands(#[case] height: f64, #[case] expected: f64) {
    let quality = score(&cross_slot(height), &ScoringOptions::default());
    assert_eq!(quality.breakdown.get(ScoreCategory::WaveHeight), expected);
}

#[rstest]
fn cross_wind_is_reasoned_without_points() {
    let quality = score(&cross_slot(1.0), &ScoringOptions::default());
    assert!(quality.has_reason(Reason::WindCross));
    assert_eq!(quality.breakdown.get(ScoreCategory::Wind), 0.0);
    assert!(quality.has_reason(Reason::ConditionMixed));
}

#[rstest]
fn non_finite_inputs_contribute_nothing(clean_slot: SlotRecord) {
    let slot = clean_slot
        .with_waves(f64::NAN, f64::INFINITY)
        .with_wind(8.0, f64::NAN);
    let options = ScoringOptions::with_filters(Filters {
        min_surfable: true,
        ..Filters::default()
    })
    .with_preferences(UserPreferences::default());
    let quality = score(&slot, &options);
    assert!(quality.score.is_finite());
    assert!(!quality.has_reason(Reason::GoodWaveHeight));
    assert!(!quality.has_reason(Reason::GoodPeriod));
    assert!(!quality.has_reason(Reason::WindOffshore));
    assert!(!quality.has_reason(Reason::FilterNotSurfable));
    assert!(!quality.has_reason(Reason::PrefsRangeMatch));
    assert_eq!(quality.breakdown.get(ScoreCategory::Wind), 0.0);
    assert!(quality.reasons.is_empty());
    assert_eq!(quality.score, 0.0);
}

#[rstest]
#[case::period(f64::INFINITY, 1.5, 8.0)]
#[case::height(10.0, f64::INFINITY, 8.0)]
#[case::wind(10.0, 1.5, f64::INFINITY)]
fn non_finite_measurements_never_make_a_slot_challenging(
    clean_slot: SlotRecord,
    #[case] period: f64,
    #[case] height: f64,
    #[case] wind: f64,
) {
    let slot = clean_slot.with_waves(height, period).with_wind(wind, 180.0);
    let options = ScoringOptions::with_filters(Filters {
        beginner_friendly: true,
        ..Filters::default()
    })
    .with_preferences(UserPreferences::default());
    let quality = score(&slot, &options);
    assert!(!quality.has_reason(Reason::Challenging));
    assert!(!quality.has_reason(Reason::FilterBeginnerChallenging));
    assert!(!quality.has_reason(Reason::PrefsAvoidChallenging));
    assert_eq!(quality.breakdown.get(ScoreCategory::Challenging), 0.0);
    assert_eq!(quality.breakdown.get(ScoreCategory::Filters), 0.0);
}

#[rstest]
fn infinite_period_leaves_the_rest_of_the_slot_scored(clean_slot: SlotRecord) {
    let slot = clean_slot.with_waves(1.5, f64::INFINITY);
    let options = ScoringOptions::with_filters(Filters {
        beginner_friendly: true,
        ..Filters::default()
    })
    .with_preferences(UserPreferences::default());
    let quality = score(&slot, &options);
    assert_eq!(
        quality.reasons,
        vec![
            Reason::ConditionClean,
            Reason::GoodWaveHeight,
            Reason::WindOffshore,
            Reason::PrefsRangeMatch,
            Reason::PrefsLikesClean,
        ]
    );
    assert_eq!(quality.score, 7.0);
}

#[rstest]
#[case::speed(f64::NAN, 180.0)]
#[case::direction(8.0, f64::NAN)]
fn unmeasured_wind_leaves_condition_rules_silent(
    clean_slot: SlotRecord,
    #[case] speed: f64,
    #[case] direction: f64,
) {
    let slot = clean_slot.with_wind(speed, direction);
    let options = ScoringOptions::with_filters(Filters {
        prefer_clean: true,
        ..Filters::default()
    })
    .with_preferences(UserPreferences::default());
    let quality = score(&slot, &options);
    assert_eq!(quality.breakdown.get(ScoreCategory::Condition), 0.0);
    assert_eq!(quality.breakdown.get(ScoreCategory::Filters), 0.0);
    for reason in [
        Reason::ConditionClean,
        Reason::ConditionMixed,
        Reason::ConditionChoppy,
        Reason::FilterPreferClean,
        Reason::FilterAvoidChoppy,
        Reason::PrefsLikesClean,
        Reason::PrefsDislikesChoppy,
    ] {
        assert!(!quality.has_reason(reason), "{reason} fired");
    }
}

#[rstest]
#[case(TideSuitability::Good, 8.0, Reason::TideSupportive)]
#[case(TideSuitability::LessIdeal, 6.0, Reason::TideLessIdeal)]
fn tide_suitability_shifts_score(
    clean_slot: SlotRecord,
    #[case] suitability: TideSuitability,
    #[case] expected: f64,
    #[case] reason: Reason,
) {
    let quality = score_slot(&clean_slot, &tide(suitability), &ScoringOptions::default());
    assert_eq!(quality.score, expected);
    assert_eq!(quality.reasons.last(), Some(&reason));
}

#[rstest]
fn min_surfable_filter_penalises_small_swell() {
    let slot = offshore_slot("2024-06-01T07:00", 0).with_waves(0.5, 10.0);
    let options = ScoringOptions::with_filters(Filters {
        min_surfable: true,
        ..Filters::default()
    });
    let quality = score(&slot, &options);
    assert!(quality.has_reason(Reason::FilterNotSurfable));
    assert_eq!(quality.breakdown.get(ScoreCategory::Filters), -2.0);
}

#[rstest]
fn beginner_filter_penalises_challenging(clean_slot: SlotRecord) {
    let slot = clean_slot.with_waves(1.5, 13.0);
    let options = ScoringOptions::with_filters(Filters {
        beginner_friendly: true,
        ..Filters::default()
    });
    let quality = score(&slot, &options);
    assert!(quality.has_reason(Reason::FilterBeginnerChallenging));
    assert_eq!(quality.breakdown.get(ScoreCategory::Filters), -3.0);
}

#[rstest]
#[case(8.0, 0.0, 1.0, Reason::FilterPreferClean)]
#[case(8.0, 180.0, -2.0, Reason::FilterAvoidChoppy)]
fn prefer_clean_filter(
    clean_slot: SlotRecord,
    #[case] speed: f64,
    #[case] direction: f64,
    #[case] expected: f64,
    #[case] reason: Reason,
) {
    // Facing south: wind from 0 degrees is offshore, from 180 onshore.
    let slot = clean_slot.facing(180.0).with_wind(speed, direction);
    let options = ScoringOptions::with_filters(Filters {
        prefer_clean: true,
        ..Filters::default()
    });
    let quality = score(&slot, &options);
    assert!(quality.has_reason(reason));
    assert_eq!(quality.breakdown.get(ScoreCategory::Filters), expected);
}

#[rstest]
#[case(1.2, 0.5, Reason::PrefsRangeMatch)]
#[case(2.0, -0.5, Reason::PrefsRangeTooBig)]
#[case(0.4, -0.5, Reason::PrefsRangeTooSmall)]
fn preferred_range(#[case] height: f64, #[case] expected: f64, #[case] reason: Reason) {
    let preferences = UserPreferences {
        preferred_min_height: 0.9,
        preferred_max_height: 1.3,
        likes_clean: false,
        can_handle_challenging: true,
        ..UserPreferences::for_skill(SkillLevel::Intermediate)
    };
    let options = ScoringOptions::default().with_preferences(preferences);
    let quality = score(&cross_slot(height), &options);
    assert!(quality.has_reason(reason));
    assert_eq!(quality.breakdown.get(ScoreCategory::Preferences), expected);
}

#[rstest]
fn just_outside_range_is_neutral() {
    let preferences = UserPreferences {
        preferred_min_height: 0.9,
        preferred_max_height: 1.3,
        likes_clean: false,
        ..UserPreferences::default()
    };
    let options = ScoringOptions::default().with_preferences(preferences);
    let quality = score(&cross_slot(1.6), &options);
    assert_eq!(quality.breakdown.get(ScoreCategory::Preferences), 0.0);
}

#[rstest]
fn beginner_preferences_on_challenging_slot(clean_slot: SlotRecord) {
    let slot = clean_slot.with_waves(1.5, 13.0);
    let options =
        ScoringOptions::default().with_preferences(UserPreferences::for_skill(SkillLevel::Beginner));
    let quality = score(&slot, &options);
    assert!(quality.has_reason(Reason::PrefsAvoidChallenging));
    assert!(!quality.has_reason(Reason::PrefsRangeMatch));
}

#[rstest]
fn likes_clean_rewards_clean_slot(clean_slot: SlotRecord) {
    let options = ScoringOptions::default().with_preferences(UserPreferences::default());
    let quality = score(&clean_slot, &options);
    assert!(quality.has_reason(Reason::PrefsLikesClean));
    assert!(quality.has_reason(Reason::PrefsRangeMatch));
    assert_eq!(quality.score, 8.0);
}

#[rstest]
fn score_is_clamped_at_zero() {
    let slot = SlotRecord::at("2024-06-01T14:00", 7)
        .with_waves(3.0, 14.0)
        .with_wind(25.0, 0.0)
        .facing(0.0);
    let options = ScoringOptions::with_filters(Filters {
        beginner_friendly: true,
        prefer_clean: true,
        min_surfable: false,
    });
    let quality = score_slot(&slot, &tide(TideSuitability::LessIdeal), &options);
    assert_eq!(quality.score, 0.0);
    assert!(quality.breakdown.total() < 0.0);
}
