use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};
use warden_dns_application::services::ClientBindingCache;

const DEFAULT_INTERVAL_SECS: u64 = 3600;

/// Hourly sweep of expired client bindings.
///
/// Bindings expire passively on read; the sweep keeps the map from
/// accumulating entries for devices that never come back.
pub struct BindingSweepJob {
    bindings: Arc<ClientBindingCache>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl BindingSweepJob {
    pub fn new(bindings: Arc<ClientBindingCache>) -> Self {
        Self {
            bindings,
            interval_secs: DEFAULT_INTERVAL_SECS,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval_secs: u64) -> Self {
        self.interval_secs = interval_secs;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(interval_secs = self.interval_secs, "Starting binding sweep job");

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
            interval.tick().await; // first tick fires immediately
            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("BindingSweepJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        let swept = self.bindings.sweep_expired();
                        if swept > 0 {
                            debug!(swept, "Expired client bindings removed");
                        }
                    }
                }
            }
        });
    }
}
