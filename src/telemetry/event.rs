use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::clock::now_iso;

/// Every kind of event the plugin can emit. The probe sends a subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    Error,
    Performance,
    Usage,
    Startup,
    Shutdown,
    Filter,
    Punishment,
    Cache,
    SystemHealth,
    Config,
    Feature,
    CategoryStats,
    HourlyStats,
    ViolationLog,
}

impl EventType {
    pub const ALL: [EventType; 14] = [
        EventType::Error,
        EventType::Performance,
        EventType::Usage,
        EventType::Startup,
        EventType::Shutdown,
        EventType::Filter,
        EventType::Punishment,
        EventType::Cache,
        EventType::SystemHealth,
        EventType::Config,
        EventType::Feature,
        EventType::CategoryStats,
        EventType::HourlyStats,
        EventType::ViolationLog,
    ];

    /// Wire name, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Error => "ERROR",
            EventType::Performance => "PERFORMANCE",
            EventType::Usage => "USAGE",
            EventType::Startup => "STARTUP",
            EventType::Shutdown => "SHUTDOWN",
            EventType::Filter => "FILTER",
            EventType::Punishment => "PUNISHMENT",
            EventType::Cache => "CACHE",
            EventType::SystemHealth => "SYSTEM_HEALTH",
            EventType::Config => "CONFIG",
            EventType::Feature => "FEATURE",
            EventType::CategoryStats => "CATEGORY_STATS",
            EventType::HourlyStats => "HOURLY_STATS",
            EventType::ViolationLog => "VIOLATION_LOG",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One occurrence inside an envelope. `data` shape depends on `kind` by
/// convention only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryEvent {
    #[serde(rename = "type")]
    pub kind: EventType,
    pub timestamp: String,
    pub data: Map<String, Value>,
}

impl TelemetryEvent {
    pub fn new(kind: EventType) -> Self {
        Self {
            kind,
            timestamp: now_iso(),
            data: Map::new(),
        }
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.data.insert(key.to_string(), value.into());
        self
    }
}
