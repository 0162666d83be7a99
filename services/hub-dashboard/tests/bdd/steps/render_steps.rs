//! BDD step definitions for dashboard rendering

use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use cucumber::{given, then, when};
use tower::ServiceExt;

use hub_dashboard::config::HubConfig;
use hub_dashboard::hub::HubClient;
use hub_dashboard::io::HttpClient;
use hub_dashboard::web::build_router;

use crate::world::DashboardWorld;

pub fn dashboard_router(world: &DashboardWorld) -> axum::Router {
    let http: Arc<dyn HttpClient> = world.hub.clone();
    build_router(Arc::new(HubClient::new(&HubConfig::default(), http)))
}

#[given(expr = "the hub reports sensor {string} at {string} in mode {int}")]
fn hub_reports_sensor(world: &mut DashboardWorld, name: String, ip: String, mode: i64) {
    world.hub.insert(&name, &ip, mode);
}

#[given("the hub reports no sensors")]
fn hub_reports_no_sensors(_world: &mut DashboardWorld) {}

#[when("the dashboard index page is requested")]
async fn request_index(world: &mut DashboardWorld) {
    let app = dashboard_router(world);
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    world.last_status = Some(response.status().as_u16());
    world.last_location = None;
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    world.last_body = Some(String::from_utf8(body.to_vec()).unwrap());
}

#[then(expr = "the response should contain {string}")]
fn response_contains(world: &mut DashboardWorld, expected: String) {
    let body = world.last_body.as_ref().expect("no response body");
    assert!(
        body.contains(&expected),
        "Expected response to contain '{}', but it didn't.\nResponse body:\n{}",
        expected,
        body
    );
}

#[then("the response should contain no sensor fragments")]
fn response_has_no_fragments(world: &mut DashboardWorld) {
    let body = world.last_body.as_ref().expect("no response body");
    assert!(
        !body.contains("ui stacked segment"),
        "Expected no sensor fragments.\nResponse body:\n{}",
        body
    );
}
