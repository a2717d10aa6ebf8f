use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::clock::now_iso;
use super::event::TelemetryEvent;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemInfo {
    pub os: String,
    pub arch: String,
    pub cores: u32,
}

/// The single JSON document posted to `/telemetry`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryEnvelope {
    pub server_id: String,
    pub plugin_version: String,
    pub minecraft_version: String,
    pub java_version: String,
    pub system_info: SystemInfo,
    pub sent_at: String,
    pub events: Vec<TelemetryEvent>,
}

impl TelemetryEnvelope {
    /// Stamps a fresh v4 server id and `sent_at = now`.
    pub fn new(
        plugin_version: &str,
        minecraft_version: &str,
        java_version: &str,
        system_info: SystemInfo,
        events: Vec<TelemetryEvent>,
    ) -> Self {
        Self {
            server_id: Uuid::new_v4().to_string(),
            plugin_version: plugin_version.to_string(),
            minecraft_version: minecraft_version.to_string(),
            java_version: java_version.to_string(),
            system_info,
            sent_at: now_iso(),
            events,
        }
    }
}
