use crate::BindingSweepJob;
use std::sync::Arc;
use tracing::info;

/// Central orchestrator for background jobs.
///
/// Register jobs with the builder, then call `.start()` once.
pub struct JobRunner {
    binding_sweep: Option<BindingSweepJob>,
}

impl JobRunner {
    pub fn new() -> Self {
        Self {
            binding_sweep: None,
        }
    }

    pub fn with_binding_sweep(mut self, job: BindingSweepJob) -> Self {
        self.binding_sweep = Some(job);
        self
    }

    pub async fn start(self) {
        info!("Starting background job runner");

        if let Some(job) = self.binding_sweep {
            Arc::new(job).start().await;
        }

        info!("All background jobs started");
    }
}

impl Default for JobRunner {
    fn default() -> Self {
        Self::new()
    }
}
