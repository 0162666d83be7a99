//! BDD step definitions for mode commands

use axum::body::Body;
use axum::http::{header, Request};
use cucumber::{then, when};
use tower::ServiceExt;

use crate::steps::render_steps::dashboard_router;
use crate::world::DashboardWorld;

async fn post_command(world: &mut DashboardWorld, target: &str, mode: i64) {
    let app = dashboard_router(world);
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(format!("/api/sensor/{}?mode={}", target, mode))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    world.last_status = Some(response.status().as_u16());
    world.last_location = response
        .headers()
        .get(header::LOCATION)
        .map(|value| value.to_str().unwrap().to_string());
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    world.last_body = Some(String::from_utf8(body.to_vec()).unwrap());
}

#[when(expr = "a standby command is posted for sensor {string}")]
async fn standby_command(world: &mut DashboardWorld, sensor: String) {
    post_command(world, &sensor, 0).await;
}

#[when(expr = "a command is posted for sensor {string} with mode {int}")]
async fn command_with_mode(world: &mut DashboardWorld, sensor: String, mode: i64) {
    post_command(world, &sensor, mode).await;
}

#[when(expr = "a fleet-wide command is posted with mode {int}")]
async fn fleet_command(world: &mut DashboardWorld, mode: i64) {
    post_command(world, "all", mode).await;
}

#[then(expr = "the hub should have received {string}")]
fn hub_received(world: &mut DashboardWorld, expected: String) {
    let requests = world.hub.requests();
    assert!(
        requests.iter().any(|request| request == &expected),
        "Expected hub to have received '{}', got {:?}",
        expected,
        requests
    );
}

#[then("the hub should have received no commands")]
fn hub_received_no_commands(world: &mut DashboardWorld) {
    let requests = world.hub.requests();
    assert!(
        !requests.iter().any(|request| request.starts_with("POST")),
        "Expected no commands, got {:?}",
        requests
    );
}

#[then("the response should redirect to the dashboard")]
fn response_redirects(world: &mut DashboardWorld) {
    assert_eq!(world.last_status, Some(303), "expected a 303 redirect");
    assert_eq!(world.last_location.as_deref(), Some("/"));
}

#[then(expr = "the response status should be {int}")]
fn response_status(world: &mut DashboardWorld, status: u16) {
    assert_eq!(world.last_status, Some(status));
}

#[then(expr = "every sensor on the hub should be in mode {int}")]
fn every_sensor_in_mode(world: &mut DashboardWorld, mode: i64) {
    let modes = world.hub.modes();
    assert!(!modes.is_empty(), "no sensors on the hub");
    assert!(
        modes.iter().all(|m| *m == mode),
        "Expected every sensor in mode {}, got {:?}",
        mode,
        modes
    );
}
