//! Behavioural coverage for the heuristic tide fallback chain.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use surfcast_core::{DayPart, TideContext, TideModel, TideSuitability};

/// Aggregate fixtures shared across the BDD scenarios.
pub struct TestContext {
    model: RefCell<TideModel>,
    tide: RefCell<Option<TideContext>>,
}

#[fixture]
/// Build a fresh `TestContext` for each scenario run.
pub fn context() -> TestContext {
    TestContext {
        model: RefCell::new(TideModel::builtin()),
        tide: RefCell::new(None),
    }
}

fn resolve(context: &TestContext, location_id: &str, region: Option<&str>, part: DayPart) {
    let tide = context.model.borrow().resolve(location_id, region, part);
    context.tide.replace(Some(tide));
}

fn resolved(context: &TestContext) -> TideContext {
    let Some(tide) = context.tide.borrow().clone() else {
        panic!("tide should be resolved before assertions");
    };
    tide
}

#[given("the built-in tide model")]
fn builtin_model(context: &TestContext) {
    context.model.replace(TideModel::builtin());
}

#[given("a tide model with no profiles")]
fn empty_model(context: &TestContext) {
    context.model.replace(TideModel::empty());
}

#[when("I resolve the morning tide at hossegor")]
fn morning_at_hossegor(context: &TestContext) {
    resolve(context, "hossegor", None, DayPart::Morning);
}

#[when("I resolve the afternoon tide at an unlisted Portuguese break")]
fn afternoon_in_portugal(context: &TestContext) {
    resolve(context, "praia-do-norte", Some("Portugal"), DayPart::Afternoon);
}

#[when("I resolve the evening tide at a break nobody has mapped")]
fn evening_unmapped(context: &TestContext) {
    resolve(context, "secret-reef", None, DayPart::Evening);
}

#[then("the tide profile is \"biscay\"")]
fn profile_is_biscay(context: &TestContext) {
    assert_eq!(resolved(context).profile_id.as_deref(), Some("biscay"));
}

#[then("the tide profile is \"portugal-west\"")]
fn profile_is_portugal_west(context: &TestContext) {
    assert_eq!(resolved(context).profile_id.as_deref(), Some("portugal-west"));
}

#[then("the tide profile is \"default\"")]
fn profile_is_default(context: &TestContext) {
    assert_eq!(resolved(context).profile_id.as_deref(), Some("default"));
}

#[then("the tide is less than ideal")]
fn tide_less_ideal(context: &TestContext) {
    assert_eq!(
        resolved(context).tide_suitability,
        Some(TideSuitability::LessIdeal)
    );
}

#[then("the tide is supportive")]
fn tide_supportive(context: &TestContext) {
    assert_eq!(resolved(context).tide_suitability, Some(TideSuitability::Good));
}

#[then("no tide context is available")]
fn tide_unknown(context: &TestContext) {
    assert_eq!(resolved(context), TideContext::unknown());
}

#[scenario(path = "tests/features/tide.feature", index = 0)]
fn known_break_uses_own_profile(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/tide.feature", index = 1)]
fn unknown_break_uses_region(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/tide.feature", index = 2)]
fn unmapped_break_uses_default(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/tide.feature", index = 3)]
fn empty_model_has_no_context(context: TestContext) {
    let _ = context;
}
