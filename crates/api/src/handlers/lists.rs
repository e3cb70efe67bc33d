use crate::dto::{
    AppendRequest, CreateListRequest, ItemsQuery, ItemsResponse, RemoveDomainRequest,
    ReplaceRequest, ValidateRequest, ValidateResponse,
};
use crate::error::ApiError;
use crate::middleware::AuthContext;
use crate::state::AppState;
use axum::extract::{Path, Query, State};
use axum::{Extension, Json};
use serde_json::{json, Value};
use std::collections::BTreeMap;
use tracing::{info, instrument};
use warden_dns_domain::CoreError;

#[instrument(skip(state, body), name = "api_create_list")]
pub async fn create_list(
    State(state): State<AppState>,
    Json(body): Json<CreateListRequest>,
) -> Result<String, ApiError> {
    let (name, added) = state
        .append_list
        .execute(body.name, body.url, body.items, true)
        .await?;
    info!(list = %name, added, "List created");
    Ok(format!("added {added} lines to {name}"))
}

#[instrument(skip(state, body), name = "api_append_list")]
pub async fn append_list(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(body): Json<AppendRequest>,
) -> Result<String, ApiError> {
    let (name, added) = state
        .append_list
        .execute(Some(name), body.url, body.items, false)
        .await?;
    Ok(format!("added {added} lines to {name}"))
}

#[instrument(skip(state, body), name = "api_replace_list")]
pub async fn replace_list(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(body): Json<ReplaceRequest>,
) -> Result<String, ApiError> {
    let written = state.replace_list.execute(&name, &body.url).await?;
    info!(list = %name, written, "List replaced");
    Ok(format!("wrote {written} lines to {name}"))
}

#[instrument(skip(state), name = "api_delete_list")]
pub async fn delete_list(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<&'static str, ApiError> {
    state.delete_list.execute(&name).await?;
    info!(list = %name, "List deleted");
    Ok("deleted")
}

#[instrument(skip(state), name = "api_list_items")]
pub async fn list_items(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<ItemsQuery>,
) -> Result<Json<ItemsResponse>, ApiError> {
    let page = state
        .browse_lists
        .items(&name, query.offset, query.limit, query.q.as_deref())?;
    Ok(Json(ItemsResponse {
        total: page.total,
        items: page.items,
        offset: page.offset,
        limit: page.limit,
    }))
}

#[instrument(skip(state, body), name = "api_remove_item")]
pub async fn remove_item(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(body): Json<RemoveDomainRequest>,
) -> Result<Json<Value>, ApiError> {
    let removed = state.remove_domain.execute(&name, &body.domain).await?;
    if removed {
        Ok(Json(json!({ "status": "removed" })))
    } else {
        Err(ApiError(CoreError::NotFound(format!(
            "{} is not in {name}",
            body.domain
        ))))
    }
}

/// All lists with rule counts; scoped to the device's enabled lists when
/// the request carries a resolved identity.
#[instrument(skip(state, auth), name = "api_list_overview")]
pub async fn list_overview(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> Result<Json<BTreeMap<String, usize>>, ApiError> {
    let scope = match &auth.device_id {
        Some(device) => Some(state.policy.enabled_lists(device).await),
        None => None,
    };
    let overview = state
        .browse_lists
        .overview(scope.as_ref().map(|lists| lists.as_slice()));
    Ok(Json(overview.into_iter().collect()))
}

#[instrument(skip(state), name = "api_reload_lists")]
pub async fn reload_lists(State(state): State<AppState>) -> Result<&'static str, ApiError> {
    state.reload_lists.execute().await?;
    state.policy.invalidate_cache();
    info!("Lists reloaded");
    Ok("reloaded")
}

#[instrument(skip(state, body), name = "api_validate_source")]
pub async fn validate_source(
    State(state): State<AppState>,
    Json(body): Json<ValidateRequest>,
) -> Result<Json<ValidateResponse>, ApiError> {
    let preview = state.validate_source.execute(&body.url).await?;
    Ok(Json(ValidateResponse {
        count: preview.count,
        sample: preview.sample,
    }))
}
