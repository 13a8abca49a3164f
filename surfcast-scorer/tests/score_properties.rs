//! Property-based tests for the rule scorer.
//!
//! # Invariants tested
//!
//! - **Score bounds:** every score is finite and within `0.0..=10.0`, for
//!   any filters, preferences and tide.
//! - **Determinism:** scoring twice yields the same score and reason order.

use proptest::prelude::*;
use surfcast_core::{
    Filters, ScoringOptions, SkillLevel, SlotRecord, TideContext, TideLevel, TideSuitability,
    UserPreferences,
};
use surfcast_scorer::score_slot;

fn slot_strategy() -> impl Strategy<Value = SlotRecord> {
    (
        prop_oneof![Just(f64::NAN), 0.0_f64..6.0],
        prop_oneof![Just(f64::INFINITY), 0.0_f64..20.0],
        0.0_f64..45.0,
        0.0_f64..360.0,
        0.0_f64..360.0,
        0_i64..72,
    )
        .prop_map(|(height, period, speed, direction, coast, offset)| {
            SlotRecord::at("2024-06-01T10:00", offset)
                .with_waves(height, period)
                .with_wind(speed, direction)
                .facing(coast)
        })
}

fn options_strategy() -> impl Strategy<Value = ScoringOptions> {
    (
        any::<(bool, bool, bool)>(),
        proptest::option::of(prop_oneof![
            Just(SkillLevel::Beginner),
            Just(SkillLevel::Intermediate),
            Just(SkillLevel::Advanced),
        ]),
    )
        .prop_map(|((min_surfable, beginner_friendly, prefer_clean), skill)| {
            let options = ScoringOptions::with_filters(Filters {
                min_surfable,
                beginner_friendly,
                prefer_clean,
            });
            match skill {
                Some(level) => options.with_preferences(UserPreferences::for_skill(level)),
                None => options,
            }
        })
}

fn tide_strategy() -> impl Strategy<Value = TideContext> {
    prop_oneof![
        Just(TideContext::unknown()),
        Just(TideContext {
            tide_level: Some(TideLevel::Mid),
            tide_suitability: Some(TideSuitability::Good),
            profile_id: None,
        }),
        Just(TideContext {
            tide_level: Some(TideLevel::Low),
            tide_suitability: Some(TideSuitability::LessIdeal),
            profile_id: None,
        }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: scores never leave the 0 to 10 scale.
    #[test]
    fn score_stays_in_bounds(
        slot in slot_strategy(),
        tide in tide_strategy(),
        options in options_strategy(),
    ) {
        let quality = score_slot(&slot, &tide, &options);
        prop_assert!(quality.score.is_finite());
        prop_assert!((0.0..=10.0).contains(&quality.score), "score {}", quality.score);
    }

    /// Property: identical input yields identical output.
    #[test]
    fn scoring_is_deterministic(
        slot in slot_strategy(),
        tide in tide_strategy(),
        options in options_strategy(),
    ) {
        let first = score_slot(&slot, &tide, &options);
        let second = score_slot(&slot, &tide, &options);
        prop_assert_eq!(first.score, second.score);
        prop_assert_eq!(first.reasons, second.reasons);
    }
}
