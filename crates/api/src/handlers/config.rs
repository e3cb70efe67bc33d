use crate::dto::{BlockingView, UpdateBlockingRequest};
use crate::state::AppState;
use axum::extract::State;
use axum::Json;
use std::sync::Arc;
use tracing::{info, instrument};
use warden_dns_domain::config::BlockingConfig;

#[instrument(skip(state), name = "api_get_config")]
pub async fn get_config(State(state): State<AppState>) -> Json<BlockingView> {
    let current = state.blocking.load_full();
    Json(BlockingView::from(&*current))
}

/// Swap the runtime blocking config. The DNS front-end reads it once per
/// query, so the change applies to every query dispatched afterwards.
#[instrument(skip(state, body), name = "api_update_config")]
pub async fn update_config(
    State(state): State<AppState>,
    Json(body): Json<UpdateBlockingRequest>,
) -> Json<BlockingView> {
    let current = state.blocking.load_full();
    let updated = BlockingConfig {
        mode: body.mode.unwrap_or(current.mode),
        block_page_ip: body.block_page_ip.or(current.block_page_ip),
        unknown_device: body.unknown_device.unwrap_or(current.unknown_device),
    };
    info!(mode = updated.mode.as_str(), "Blocking config swapped");
    let view = BlockingView::from(&updated);
    state.blocking.store(Arc::new(updated));
    Json(view)
}
