//! Sensor data model shared by the hub client and the renderer

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Operating mode of a sensor, as the hub encodes it on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensorMode {
    Standby,
    Sensing,
    Streaming,
}

impl SensorMode {
    /// Decode a raw wire value. Values outside 0..=2 have no mode.
    pub fn from_raw(raw: i64) -> Option<Self> {
        match raw {
            0 => Some(SensorMode::Standby),
            1 => Some(SensorMode::Sensing),
            2 => Some(SensorMode::Streaming),
            _ => None,
        }
    }

    /// Wire encoding used in command query strings
    pub fn as_wire(self) -> u8 {
        match self {
            SensorMode::Standby => 0,
            SensorMode::Sensing => 1,
            SensorMode::Streaming => 2,
        }
    }

    /// Status label shown on the dashboard
    pub fn label(self) -> &'static str {
        match self {
            SensorMode::Standby => "Standby",
            SensorMode::Sensing => "Sensing",
            SensorMode::Streaming => "Streaming",
        }
    }
}

impl fmt::Display for SensorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Status label for a raw wire value, with a fallback for unknown modes
pub fn status_label(raw: i64) -> &'static str {
    match SensorMode::from_raw(raw) {
        Some(mode) => mode.label(),
        None => "Not available",
    }
}

/// A single sensor as reported by the hub
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorRecord {
    pub ip: String,
    /// Raw mode value, kept as reported so unknown values survive the parse
    pub mode: i64,
}

/// Snapshot of every sensor the hub manages, keyed by sensor name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorInventory {
    pub sensors: BTreeMap<String, SensorRecord>,
}
