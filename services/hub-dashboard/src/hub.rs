//! Typed client for the sensor hub HTTP API

use std::sync::Arc;

use crate::config::HubConfig;
use crate::io::HttpClient;
use crate::sensor::{SensorInventory, SensorMode};

/// Raw outcome of a mode command, exactly as the hub reported it
#[derive(Debug, Clone)]
pub struct CommandReceipt {
    pub status: u16,
    pub body: String,
}

/// Client for the hub's sensor inventory and mode command endpoints
pub struct HubClient {
    base_url: String,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for HubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HubClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl HubClient {
    pub fn new(config: &HubConfig, http: Arc<dyn HttpClient>) -> Self {
        let base_url = format!("http://{}:{}", config.host, config.port);
        tracing::debug!("Created HubClient for {}", base_url);
        Self { base_url, http }
    }

    /// Fetch a fresh snapshot of every sensor the hub manages.
    ///
    /// The body is parsed whatever the HTTP status was; a body that does
    /// not hold the inventory shape is an error.
    pub async fn list_sensors(&self) -> crate::Result<SensorInventory> {
        let url = format!("{}/api/sensor/all", self.base_url);
        let response = self.http.get(&url).await?;
        let inventory: SensorInventory = serde_json::from_str(&response.body)?;
        tracing::debug!("Fetched {} sensors from the hub", inventory.sensors.len());
        Ok(inventory)
    }

    /// Request a mode change for one sensor.
    ///
    /// Sensor names are interpolated into the path as-is; callers pass
    /// URL-safe names. The receipt carries the raw response regardless of
    /// the status code.
    pub async fn set_sensor_mode(
        &self,
        sensor: &str,
        mode: SensorMode,
    ) -> crate::Result<CommandReceipt> {
        let url = format!(
            "{}/api/sensor/{}?mode={}",
            self.base_url,
            sensor,
            mode.as_wire()
        );
        let response = self.http.post(&url).await?;
        Ok(CommandReceipt {
            status: response.status,
            body: response.body,
        })
    }

    /// Request a mode change for every sensor the hub manages
    pub async fn set_all_sensors_mode(&self, mode: SensorMode) -> crate::Result<CommandReceipt> {
        let url = format!("{}/api/sensor/all?mode={}", self.base_url, mode.as_wire());
        let response = self.http.post(&url).await?;
        Ok(CommandReceipt {
            status: response.status,
            body: response.body,
        })
    }
}
