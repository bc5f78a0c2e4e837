//! BDD step definitions for property selection feature

use cucumber::{given, then, when};

use property_dashboard_app::loader::{ListSource, LoadOutcome};
use property_dashboard_app::selection::{LoadPhase, SelectorView};

use crate::world::DashboardWorld;

fn parse_phase(s: &str) -> LoadPhase {
    match s {
        "loading" => LoadPhase::Loading,
        "loaded-with-data" => LoadPhase::LoadedWithData,
        "loaded-empty" => LoadPhase::LoadedEmpty,
        other => panic!("Unknown phase: {}", other),
    }
}

#[given("a freshly mounted selector")]
fn fresh_selector(world: &mut DashboardWorld) {
    world.selector = Default::default();
}

#[given("a load outcome with no properties")]
fn empty_outcome(world: &mut DashboardWorld) {
    world.outcome = Some(LoadOutcome {
        properties: vec![],
        source: ListSource::Live,
    });
}

#[when("the load outcome is applied to the selector")]
fn apply_outcome(world: &mut DashboardWorld) {
    let outcome = world.outcome.clone().expect("no load outcome");
    world.selector.apply(outcome);
}

#[when(expr = "the user selects {string}")]
fn user_selects(world: &mut DashboardWorld, id: String) {
    world.last_select_accepted = Some(world.selector.select(&id));
}

#[then(expr = "the selector should be {string}")]
fn selector_phase_is(world: &mut DashboardWorld, phase: String) {
    assert_eq!(world.selector.phase(), parse_phase(&phase));
}

#[then(expr = "the selected property should be {string}")]
fn selected_is(world: &mut DashboardWorld, expected: String) {
    assert_eq!(world.selector.selected(), Some(expected.as_str()));
}

#[then("the selection should be rejected")]
fn selection_rejected(world: &mut DashboardWorld) {
    assert_eq!(world.last_select_accepted, Some(false));
}

#[then(expr = "the selector should offer {string}")]
fn selector_offers(world: &mut DashboardWorld, label: String) {
    match world.selector.view() {
        SelectorView::Ready { options, .. } => {
            assert!(
                options.iter().any(|o| o.label == label),
                "no option labelled '{}' in {:?}",
                label,
                options
            );
        }
        other => panic!("expected ready view, got {:?}", other),
    }
}

#[then("the selector should show the empty state")]
fn selector_empty(world: &mut DashboardWorld) {
    assert_eq!(world.selector.view(), SelectorView::Empty);
}
