use serde::{Deserialize, Serialize};

/// Upstream recursive resolver settings.
///
/// Every non-blocked query is forwarded here over UDP; there is no response
/// caching, so the timeout bounds the whole exchange.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    #[serde(default = "default_upstream")]
    pub address: String,

    /// Forwarding timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            address: default_upstream(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_upstream() -> String {
    "1.1.1.1:53".to_string()
}

fn default_timeout_secs() -> u64 {
    5
}
