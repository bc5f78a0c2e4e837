//! BDD step definitions for property loading feature

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use cucumber::{gherkin::Step, given, then, when};
use tokio_util::sync::CancellationToken;

use property_dashboard_app::api::DashboardApi;
use property_dashboard_app::loader::{ListSource, PropertyLoader};
use property_dashboard_app::tenant::KeyValueStore;

use crate::steps::doubles::{CannedHttpClient, FaultyStore};
use crate::steps::tenant_steps::parse_tenant;
use crate::world::{CannedResponse, DashboardWorld};

fn build_loader(world: &DashboardWorld, requests: Arc<AtomicUsize>) -> PropertyLoader {
    let response = world
        .response
        .clone()
        .expect("backend response not configured");
    let http = CannedHttpClient { response, requests };
    let store: Box<dyn KeyValueStore> = if world.store_faulty {
        Box::new(FaultyStore)
    } else {
        Box::new(world.store.clone())
    };
    PropertyLoader::new(DashboardApi::new("http://dashboard.test", Arc::new(http)), store)
}

#[given(expr = "the backend returns status {int} with body:")]
fn backend_returns(world: &mut DashboardWorld, status: u16, step: &Step) {
    let body = step.docstring.as_ref().expect("missing body docstring").trim().to_string();
    world.response = Some(CannedResponse::Respond { status, body });
}

#[given("the backend is unreachable")]
fn backend_unreachable(world: &mut DashboardWorld) {
    world.response = Some(CannedResponse::Fail("connection refused".to_string()));
}

#[when("the properties are loaded")]
async fn load_properties(world: &mut DashboardWorld) {
    let requests = Arc::new(AtomicUsize::new(0));
    let loader = build_loader(world, Arc::clone(&requests));
    let outcome = loader.load(&CancellationToken::new()).await;
    world.requests = requests.load(Ordering::SeqCst);
    world.outcome = outcome;
}

#[when("the properties are loaded after the selector was torn down")]
async fn load_cancelled(world: &mut DashboardWorld) {
    let requests = Arc::new(AtomicUsize::new(0));
    let loader = build_loader(world, Arc::clone(&requests));
    let cancel = CancellationToken::new();
    cancel.cancel();
    world.outcome = loader.load(&cancel).await;
    world.requests = requests.load(Ordering::SeqCst);
}

#[then("the active list should be:")]
fn active_list_is(world: &mut DashboardWorld, step: &Step) {
    let outcome = world.outcome.as_ref().expect("no load outcome");
    let table = step.table.as_ref().expect("missing table");
    let expected: Vec<(String, String)> = table
        .rows
        .iter()
        .skip(1)
        .map(|row| (row[0].clone(), row[1].clone()))
        .collect();
    let actual: Vec<(String, String)> = outcome
        .properties
        .iter()
        .map(|p| (p.id.clone(), p.name.clone()))
        .collect();
    assert_eq!(actual, expected);
}

#[then("the active list should be empty")]
fn active_list_empty(world: &mut DashboardWorld) {
    let outcome = world.outcome.as_ref().expect("no load outcome");
    assert!(outcome.properties.is_empty(), "{:?}", outcome.properties);
}

#[then(expr = "the default selection should be {string}")]
fn default_selection_is(world: &mut DashboardWorld, expected: String) {
    let outcome = world.outcome.as_ref().expect("no load outcome");
    assert_eq!(outcome.default_selection(), Some(expected.as_str()));
}

#[then("the list should come from the backend")]
fn list_is_live(world: &mut DashboardWorld) {
    let outcome = world.outcome.as_ref().expect("no load outcome");
    assert_eq!(outcome.source, ListSource::Live);
}

#[then(expr = "the list should come from the fallback table for {string}")]
fn list_is_fallback(world: &mut DashboardWorld, tenant: String) {
    let outcome = world.outcome.as_ref().expect("no load outcome");
    assert_eq!(outcome.source, ListSource::Fallback(parse_tenant(&tenant)));
}

#[then(expr = "the backend should have been asked {int} time(s)")]
fn requests_made(world: &mut DashboardWorld, expected: usize) {
    assert_eq!(
        world.requests, expected,
        "expected {} requests, got {}",
        expected, world.requests
    );
}

#[then("no load outcome should be applied")]
fn no_outcome(world: &mut DashboardWorld) {
    assert!(world.outcome.is_none(), "{:?}", world.outcome);
}
