use async_trait::async_trait;
use sqlx::{Row, SqlitePool};
use std::sync::Arc;
use warden_dns_application::ports::{SessionDirectory, SessionIdentity};
use warden_dns_domain::CoreError;

/// Session lookups against the credential store's SQLite database.
///
/// Issuance and expiry belong to the collaborator; expired rows are simply
/// invisible here.
pub struct SqliteSessionDirectory {
    pool: SqlitePool,
}

impl SqliteSessionDirectory {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionDirectory for SqliteSessionDirectory {
    async fn resolve(&self, session_id: &str) -> Result<Option<SessionIdentity>, CoreError> {
        let row = sqlx::query(
            "SELECT device_id, is_guest FROM sessions \
             WHERE session_id = ? AND expires_at > datetime('now')",
        )
        .bind(session_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CoreError::Database(e.to_string()))?;

        Ok(row.map(|row| SessionIdentity {
            device_id: Arc::from(row.get::<String, _>("device_id").as_str()),
            is_guest: row.get::<i64, _>("is_guest") != 0,
        }))
    }
}
