use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Telemetry sink settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TelemetryConfig {
    /// Capacity of the in-memory recent-query ring.
    #[serde(default = "default_recent_cap")]
    pub recent_cap: usize,

    /// Append-only JSON Lines query log.
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            recent_cap: default_recent_cap(),
            log_file: default_log_file(),
        }
    }
}

fn default_recent_cap() -> usize {
    500
}

fn default_log_file() -> PathBuf {
    PathBuf::from("blocklist/logs.jsonl")
}
