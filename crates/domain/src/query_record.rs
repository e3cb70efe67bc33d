use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::Arc;

/// One resolved query, as appended to the recent ring and the JSONL log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRecord {
    pub time: DateTime<Utc>,
    pub domain: Arc<str>,
    pub client: IpAddr,
    pub blocked: bool,
}

impl QueryRecord {
    pub fn new(domain: Arc<str>, client: IpAddr, blocked: bool) -> Self {
        Self {
            time: Utc::now(),
            domain,
            client,
            blocked,
        }
    }
}

/// Point-in-time copy of the monotonic query counters.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CountersSnapshot {
    pub queries_total: u64,
    pub blocked_total: u64,
    pub per_domain_hits: HashMap<String, u64>,
    pub per_client_hits: HashMap<String, u64>,
    pub per_allowed_domain_hits: HashMap<String, u64>,
}
