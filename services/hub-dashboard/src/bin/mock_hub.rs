//! Mock sensor hub for development and integration testing
//!
//! Serves the three hub endpoints over an in-memory fleet:
//!   GET  /api/sensor/all
//!   POST /api/sensor/all?mode=N
//!   POST /api/sensor/{sensor}?mode=N
//!
//! Usage:
//!   mock_hub [--port PORT]
//!
//! The port can also be set via the MOCK_HUB_PORT environment variable.
//! Command line argument takes precedence over environment variable.
//! Default port is 5000 (same as the hub).

use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;

use hub_dashboard::sensor::{SensorInventory, SensorMode, SensorRecord};

#[derive(Clone, Default)]
struct Fleet {
    sensors: Arc<Mutex<BTreeMap<String, SensorRecord>>>,
}

#[derive(Deserialize)]
struct ModeQuery {
    mode: i64,
}

#[tokio::main]
async fn main() {
    // Port priority: command line arg > environment variable > default (5000)
    let port = std::env::args()
        .nth(2)
        .and_then(|s| s.parse().ok())
        .or_else(|| {
            std::env::var("MOCK_HUB_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
        })
        .unwrap_or(5000u16);

    let fleet = Fleet::default();
    {
        let mut sensors = fleet.sensors.lock().unwrap();
        sensors.insert(
            "cam1".to_string(),
            SensorRecord {
                ip: "10.0.0.5".to_string(),
                mode: 1,
            },
        );
        sensors.insert(
            "cam2".to_string(),
            SensorRecord {
                ip: "10.0.0.6".to_string(),
                mode: 0,
            },
        );
        sensors.insert(
            "porch".to_string(),
            SensorRecord {
                ip: "10.0.0.7".to_string(),
                mode: 2,
            },
        );
    }

    let router = Router::new()
        .route("/api/sensor/all", get(list_sensors).post(set_all))
        .route("/api/sensor/{sensor}", post(set_one))
        .with_state(fleet);

    let addr = SocketAddr::from(([127, 0, 0, 1], port));

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Failed to bind to port {}: {}", port, e);
            std::process::exit(1);
        }
    };

    eprintln!("Mock hub listening on {}", addr);
    axum::serve(listener, router).await.unwrap();
}

fn mode_word(mode: SensorMode) -> String {
    mode.label().to_ascii_lowercase()
}

async fn list_sensors(State(fleet): State<Fleet>) -> Json<SensorInventory> {
    let sensors = fleet.sensors.lock().unwrap().clone();
    eprintln!("GET /api/sensor/all -> {} sensors", sensors.len());
    Json(SensorInventory { sensors })
}

async fn set_all(State(fleet): State<Fleet>, Query(query): Query<ModeQuery>) -> impl IntoResponse {
    let Some(mode) = SensorMode::from_raw(query.mode) else {
        return (
            StatusCode::BAD_REQUEST,
            format!("invalid mode {}", query.mode),
        );
    };

    let mut sensors = fleet.sensors.lock().unwrap();
    for record in sensors.values_mut() {
        record.mode = i64::from(mode.as_wire());
    }
    eprintln!(
        "POST /api/sensor/all?mode={} -> {} sensors",
        query.mode,
        sensors.len()
    );
    (StatusCode::OK, format!(r#"{{"mode":"{}"}}"#, mode_word(mode)))
}

async fn set_one(
    State(fleet): State<Fleet>,
    Path(sensor): Path<String>,
    Query(query): Query<ModeQuery>,
) -> impl IntoResponse {
    let Some(mode) = SensorMode::from_raw(query.mode) else {
        return (
            StatusCode::BAD_REQUEST,
            format!("invalid mode {}", query.mode),
        );
    };

    let mut sensors = fleet.sensors.lock().unwrap();
    match sensors.get_mut(&sensor) {
        Some(record) => {
            record.mode = i64::from(mode.as_wire());
            eprintln!("POST /api/sensor/{}?mode={}", sensor, query.mode);
            (StatusCode::OK, format!(r#"{{"mode":"{}"}}"#, mode_word(mode)))
        }
        None => (
            StatusCode::NOT_FOUND,
            format!("no sensor named {}", sensor),
        ),
    }
}
