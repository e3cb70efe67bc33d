use async_trait::async_trait;
use sqlx::{Row, SqlitePool};
use warden_dns_application::ports::DevicePolicyRepository;
use warden_dns_domain::CoreError;

/// Device → enabled-lists mapping read from the auth store's SQLite
/// database. The table is owned and written by the web UI collaborator;
/// this adapter only ever selects from it.
pub struct SqliteDevicePolicyRepository {
    pool: SqlitePool,
}

impl SqliteDevicePolicyRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DevicePolicyRepository for SqliteDevicePolicyRepository {
    async fn enabled_lists(&self, device_id: &str) -> Result<Vec<String>, CoreError> {
        let rows = sqlx::query(
            "SELECT list_name FROM device_lists WHERE device_id = ? ORDER BY list_name",
        )
        .bind(device_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CoreError::Database(e.to_string()))?;

        Ok(rows
            .iter()
            .map(|row| row.get::<String, _>("list_name"))
            .collect())
    }
}
