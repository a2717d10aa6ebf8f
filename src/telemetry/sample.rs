//! The fixed envelope the probe submits. Values are representative, not real.

use serde_json::json;

use super::event::{EventType, TelemetryEvent};
use super::payload::{SystemInfo, TelemetryEnvelope};

pub const PLUGIN_VERSION: &str = "1.0.0-TEST";
pub const MINECRAFT_VERSION: &str = "1.21.4";
pub const JAVA_VERSION: &str = "21";

pub fn sample_envelope() -> TelemetryEnvelope {
    let system_info = SystemInfo {
        os: "Windows 11".to_string(),
        arch: "amd64".to_string(),
        cores: 8,
    };

    TelemetryEnvelope::new(
        PLUGIN_VERSION,
        MINECRAFT_VERSION,
        JAVA_VERSION,
        system_info,
        sample_events(),
    )
}

pub fn sample_events() -> Vec<TelemetryEvent> {
    vec![
        TelemetryEvent::new(EventType::Startup)
            .with("java_version", JAVA_VERSION)
            .with("os_name", "Windows 11")
            .with("os_arch", "amd64"),
        TelemetryEvent::new(EventType::SystemHealth)
            .with("tps", 19.8)
            .with("avg_tps", 19.5)
            .with("min_tps", 18.0)
            .with("used_memory_mb", 2048)
            .with("max_memory_mb", 4096)
            .with("online_players", 15)
            .with("max_players", 100)
            .with("active_mutes", 2)
            .with("loaded_chunks", 500)
            .with("total_entities", 1200)
            .with("plugin_load_time_ms", 150)
            .with("uptime_minutes", 120),
        TelemetryEvent::new(EventType::Usage)
            .with("action", "moderation")
            .with("category", "toxicity")
            .with("feature", "chat_filter")
            .with("violations_count", 25)
            .with("messages_processed", 1500)
            .with("api_calls", 1400)
            .with("api_failures", 5)
            .with("api_success_rate", 99.6)
            .with("uptime_minutes", 120),
        TelemetryEvent::new(EventType::Filter)
            .with("total_checks", 1500)
            .with("total_blocks", 45)
            .with("block_rate_percent", 3.0)
            .with("triggers_by_type", json!({"SPAM": 20, "FLOOD": 15, "LINK": 10}))
            .with("bypasses_by_type", json!({"SPAM": 2, "LINK": 1})),
        TelemetryEvent::new(EventType::Cache)
            .with("cache_hits", 800)
            .with("cache_misses", 200)
            .with("hit_rate_percent", 80.0)
            .with("cache_size", 500)
            .with("cache_max_size", 1000),
        TelemetryEvent::new(EventType::Error)
            .with("error_type", "APITimeoutException")
            .with("message", "API request timed out after 5000ms")
            .with("context", "ChatListener.moderate")
            .with(
                "stack_trace",
                "at dev.loratech.guard.api.LoraApiClient.moderate(LoraApiClient.java:55)",
            ),
    ]
}
