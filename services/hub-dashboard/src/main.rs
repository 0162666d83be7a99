//! Hub dashboard CLI
//!
//! Command-line interface for the sensor hub dashboard service.

use std::path::PathBuf;

use clap::Parser;
use hub_dashboard::{load_config, Config};
use tracing::Level;

#[derive(Parser)]
#[command(name = "hub-dashboard")]
#[command(about = "Sensor hub dashboard and fleet mode control service")]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Hub host (overrides config file)
    #[arg(long)]
    hub_host: Option<String>,

    /// Hub port (overrides config file)
    #[arg(long)]
    hub_port: Option<u16>,

    /// Dashboard port (overrides config file)
    #[arg(long)]
    dashboard_port: Option<u16>,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: Level,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .init();

    let mut config = if let Some(config_path) = &args.config {
        tracing::debug!("Loading configuration from {:?}", config_path);
        load_config(config_path)?
    } else {
        tracing::debug!("Using default configuration");
        Config::default()
    };

    if let Some(hub_host) = args.hub_host {
        config.hub.host = hub_host;
    }
    if let Some(hub_port) = args.hub_port {
        config.hub.port = hub_port;
    }
    if let Some(dashboard_port) = args.dashboard_port {
        config.dashboard.port = dashboard_port;
    }

    tracing::info!(
        "Starting hub dashboard against http://{}:{}",
        config.hub.host,
        config.hub.port
    );

    hub_dashboard::run(config).await?;

    Ok(())
}
