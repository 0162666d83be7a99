//! Hub dashboard service
//!
//! Fetches the sensor inventory from a remote hub, renders the fleet
//! dashboard, and forwards per-sensor and fleet-wide mode commands. A
//! command always completes against the hub before the view refreshes.

pub mod config;
pub mod error;
pub mod hub;
pub mod io;
pub mod render;
pub mod sensor;
pub mod web;

pub use config::{load_config, Config};
pub use error::{DashboardError, Result};

use std::net::SocketAddr;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::hub::HubClient;
use crate::io::ReqwestHttpClient;

/// Run the dashboard service with the given configuration
pub async fn run(config: Config) -> Result<()> {
    let http: Arc<dyn io::HttpClient> = Arc::new(ReqwestHttpClient::default());
    let hub = Arc::new(HubClient::new(&config.hub, http));
    let cancel = CancellationToken::new();

    let cancel_for_signal = cancel.clone();
    tokio::spawn(async move {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to listen for ctrl-c");
        tracing::info!("Shutdown signal received");
        cancel_for_signal.cancel();
    });

    let router = web::build_router(hub);
    let addr = SocketAddr::from(([0, 0, 0, 0], config.dashboard.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Dashboard listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(async move {
            cancel.cancelled().await;
        })
        .await?;

    tracing::info!("Dashboard stopped");
    Ok(())
}
