use std::path::PathBuf;
use tokio::io::AsyncWriteExt;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};
use warden_dns_domain::QueryRecord;

pub enum LogCommand {
    Append(QueryRecord),
    Truncate,
    Flush(oneshot::Sender<()>),
}

/// Background consumer for the durable query log.
///
/// Appends are best-effort: each batch opens the file in append mode,
/// writes one JSON line per record, and closes it. Failures are logged and
/// never propagated to the query path. When the sender side is dropped the
/// task drains remaining commands and exits.
pub struct LogWriter {
    path: PathBuf,
}

impl LogWriter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn start(self, mut rx: mpsc::UnboundedReceiver<LogCommand>) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move {
            debug!(path = %self.path.display(), "Query log writer started");
            let mut batch: Vec<QueryRecord> = Vec::with_capacity(64);

            while let Some(command) = rx.recv().await {
                let mut flushes: Vec<oneshot::Sender<()>> = Vec::new();
                self.apply(command, &mut batch, &mut flushes).await;

                // Drain whatever else is queued; larger batches under load.
                while let Ok(command) = rx.try_recv() {
                    self.apply(command, &mut batch, &mut flushes).await;
                    if batch.len() >= 128 {
                        break;
                    }
                }

                self.append_batch(&mut batch).await;
                for ack in flushes {
                    let _ = ack.send(());
                }
            }

            debug!("Query log writer stopped");
        })
    }

    async fn apply(
        &self,
        command: LogCommand,
        batch: &mut Vec<QueryRecord>,
        flushes: &mut Vec<oneshot::Sender<()>>,
    ) {
        match command {
            LogCommand::Append(record) => batch.push(record),
            LogCommand::Truncate => {
                // Records queued before the truncate must not survive it.
                batch.clear();
                if let Err(e) = tokio::fs::write(&self.path, b"").await {
                    warn!(path = %self.path.display(), error = %e, "Failed to truncate query log");
                }
            }
            LogCommand::Flush(ack) => flushes.push(ack),
        }
    }

    async fn append_batch(&self, batch: &mut Vec<QueryRecord>) {
        if batch.is_empty() {
            return;
        }

        let mut lines = String::with_capacity(batch.len() * 96);
        for record in batch.drain(..) {
            match serde_json::to_string(&record) {
                Ok(line) => {
                    lines.push_str(&line);
                    lines.push('\n');
                }
                Err(e) => warn!(error = %e, "Failed to serialize query record"),
            }
        }

        let result = async {
            let mut file = tokio::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)
                .await?;
            file.write_all(lines.as_bytes()).await?;
            file.flush().await
        }
        .await;

        if let Err(e) = result {
            warn!(path = %self.path.display(), error = %e, "Failed to append query log");
        }
    }
}
