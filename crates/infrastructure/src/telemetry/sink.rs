use super::log_writer::{LogCommand, LogWriter};
use compact_str::CompactString;
use dashmap::DashMap;
use rustc_hash::FxBuildHasher;
use std::collections::VecDeque;
use std::net::IpAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};
use warden_dns_domain::config::TelemetryConfig;
use warden_dns_domain::{CountersSnapshot, QueryRecord};

/// Query counters, the bounded recent-query ring, and the durable log.
///
/// `record` runs on the packet path: counter bumps are atomics or sharded
/// map entries, the ring push is one short mutex, and the durable append is
/// handed to the writer task. Counters are monotonic; `clear_log` empties
/// only the ring and the file.
pub struct TelemetrySink {
    queries_total: AtomicU64,
    blocked_total: AtomicU64,
    per_domain: DashMap<CompactString, u64, FxBuildHasher>,
    per_client: DashMap<IpAddr, u64, FxBuildHasher>,
    per_allowed: DashMap<CompactString, u64, FxBuildHasher>,
    recent: Mutex<VecDeque<QueryRecord>>,
    recent_cap: usize,
    log_tx: mpsc::UnboundedSender<LogCommand>,
}

impl TelemetrySink {
    /// Create the sink and spawn its log-writer task.
    pub fn new(config: &TelemetryConfig) -> Arc<Self> {
        let (log_tx, log_rx) = mpsc::unbounded_channel();
        LogWriter::new(config.log_file.clone()).start(log_rx);

        Arc::new(Self {
            queries_total: AtomicU64::new(0),
            blocked_total: AtomicU64::new(0),
            per_domain: DashMap::with_hasher(FxBuildHasher),
            per_client: DashMap::with_hasher(FxBuildHasher),
            per_allowed: DashMap::with_hasher(FxBuildHasher),
            recent: Mutex::new(VecDeque::with_capacity(config.recent_cap)),
            recent_cap: config.recent_cap,
            log_tx,
        })
    }

    pub fn record(&self, record: QueryRecord) {
        self.queries_total.fetch_add(1, Ordering::Relaxed);

        let domain_key = CompactString::new(&*record.domain);
        if record.blocked {
            self.blocked_total.fetch_add(1, Ordering::Relaxed);
            *self.per_domain.entry(domain_key).or_insert(0) += 1;
        } else {
            *self.per_allowed.entry(domain_key).or_insert(0) += 1;
        }
        *self.per_client.entry(record.client).or_insert(0) += 1;

        if let Ok(mut ring) = self.recent.lock() {
            if ring.len() == self.recent_cap {
                ring.pop_front();
            }
            ring.push_back(record.clone());
        }

        let _ = self.log_tx.send(LogCommand::Append(record));
    }

    pub fn snapshot(&self) -> CountersSnapshot {
        CountersSnapshot {
            queries_total: self.queries_total.load(Ordering::Relaxed),
            blocked_total: self.blocked_total.load(Ordering::Relaxed),
            per_domain_hits: self
                .per_domain
                .iter()
                .map(|e| (e.key().to_string(), *e.value()))
                .collect(),
            per_client_hits: self
                .per_client
                .iter()
                .map(|e| (e.key().to_string(), *e.value()))
                .collect(),
            per_allowed_domain_hits: self
                .per_allowed
                .iter()
                .map(|e| (e.key().to_string(), *e.value()))
                .collect(),
        }
    }

    /// Most recent entries, newest first.
    pub fn recent(&self, limit: usize) -> Vec<QueryRecord> {
        match self.recent.lock() {
            Ok(ring) => ring.iter().rev().take(limit).cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Truncate the durable log and empty the ring. Counters are unaffected.
    pub fn clear_log(&self) {
        if let Ok(mut ring) = self.recent.lock() {
            ring.clear();
        }
        let _ = self.log_tx.send(LogCommand::Truncate);
    }

    /// Wait until every append sent so far has hit the file. Used by tests
    /// and shutdown.
    pub async fn flush(&self) {
        let (tx, rx) = oneshot::channel();
        if self.log_tx.send(LogCommand::Flush(tx)).is_ok() {
            let _ = rx.await;
        }
    }
}
