//! Dashboard web front end
//!
//! Serves the rendered fleet dashboard and forwards mode commands to the
//! hub. A command handler awaits the hub round trip before redirecting
//! back to the index, so the refreshed page always reflects a completed
//! command.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::Router;
use serde::Deserialize;
use tower_http::cors::CorsLayer;

use crate::hub::HubClient;
use crate::render;
use crate::sensor::SensorMode;

/// Dashboard application state
#[derive(Clone)]
pub struct DashboardState {
    pub hub: Arc<HubClient>,
}

/// Build the dashboard axum router
pub fn build_router(hub: Arc<HubClient>) -> Router {
    let state = DashboardState { hub };

    Router::new()
        .route("/", get(index_handler))
        .route("/api/sensor/all", post(set_all_handler))
        .route("/api/sensor/{sensor}", post(set_one_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[derive(Debug, Deserialize)]
struct ModeQuery {
    mode: i64,
}

async fn index_handler(State(dashboard): State<DashboardState>) -> Response {
    match dashboard.hub.list_sensors().await {
        Ok(inventory) => Html(render::dashboard_page(&inventory)).into_response(),
        Err(e) => {
            tracing::error!("Failed to fetch sensor inventory: {}", e);
            (
                StatusCode::BAD_GATEWAY,
                format!("Failed to fetch sensor inventory: {}", e),
            )
                .into_response()
        }
    }
}

async fn set_one_handler(
    State(dashboard): State<DashboardState>,
    Path(sensor): Path<String>,
    Query(query): Query<ModeQuery>,
) -> Response {
    let Some(mode) = SensorMode::from_raw(query.mode) else {
        return (
            StatusCode::BAD_REQUEST,
            format!("Unknown mode {}", query.mode),
        )
            .into_response();
    };

    match dashboard.hub.set_sensor_mode(&sensor, mode).await {
        Ok(receipt) => {
            tracing::info!(
                "Hub response for '{}' -> {} ({}): {}",
                sensor,
                mode,
                receipt.status,
                receipt.body
            );
            Redirect::to("/").into_response()
        }
        Err(e) => {
            tracing::error!("Failed to set mode for '{}': {}", sensor, e);
            (
                StatusCode::BAD_GATEWAY,
                format!("Failed to set mode for '{}': {}", sensor, e),
            )
                .into_response()
        }
    }
}

async fn set_all_handler(
    State(dashboard): State<DashboardState>,
    Query(query): Query<ModeQuery>,
) -> Response {
    let Some(mode) = SensorMode::from_raw(query.mode) else {
        return (
            StatusCode::BAD_REQUEST,
            format!("Unknown mode {}", query.mode),
        )
            .into_response();
    };

    match dashboard.hub.set_all_sensors_mode(mode).await {
        Ok(receipt) => {
            tracing::info!(
                "Hub response for fleet -> {} ({}): {}",
                mode,
                receipt.status,
                receipt.body
            );
            Redirect::to("/").into_response()
        }
        Err(e) => {
            tracing::error!("Failed to set fleet mode: {}", e);
            (
                StatusCode::BAD_GATEWAY,
                format!("Failed to set fleet mode: {}", e),
            )
                .into_response()
        }
    }
}

async fn health_handler() -> impl IntoResponse {
    "OK"
}
