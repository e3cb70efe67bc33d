use crate::dto::LogsQuery;
use crate::state::AppState;
use axum::extract::{Query, State};
use axum::Json;
use serde_json::{json, Value};
use tracing::instrument;
use warden_dns_domain::{CountersSnapshot, QueryRecord};

const DEFAULT_LOG_LIMIT: usize = 100;

#[instrument(skip(state), name = "api_analytics")]
pub async fn analytics(State(state): State<AppState>) -> Json<CountersSnapshot> {
    Json(state.telemetry.snapshot())
}

#[instrument(skip(state), name = "api_get_logs")]
pub async fn get_logs(
    State(state): State<AppState>,
    Query(query): Query<LogsQuery>,
) -> Json<Vec<QueryRecord>> {
    Json(
        state
            .telemetry
            .recent(query.limit.unwrap_or(DEFAULT_LOG_LIMIT)),
    )
}

#[instrument(skip(state), name = "api_delete_logs")]
pub async fn delete_logs(State(state): State<AppState>) -> Json<Value> {
    state.telemetry.clear_log();
    Json(json!({ "status": "deleted" }))
}
