use crate::handlers;
use crate::middleware::session_auth;
use crate::state::AppState;
use axum::{
    middleware::from_fn_with_state,
    routing::{delete, get, post},
    Router,
};

/// Control-plane router. Every route passes through the session middleware.
pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/lists/create", post(handlers::create_list))
        .route("/lists/{name}/append", post(handlers::append_list))
        .route("/lists/{name}/replace", post(handlers::replace_list))
        .route("/lists/{name}/delete", delete(handlers::delete_list))
        .route(
            "/lists/items/{name}",
            get(handlers::list_items).delete(handlers::remove_item),
        )
        .route("/lists/", get(handlers::list_overview))
        .route("/reload", post(handlers::reload_lists))
        .route("/validate", post(handlers::validate_source))
        .route("/analytics", get(handlers::analytics))
        .route("/logs", get(handlers::get_logs).delete(handlers::delete_logs))
        .route("/config", get(handlers::get_config).post(handlers::update_config))
        .layer(from_fn_with_state(state.clone(), session_auth))
        .with_state(state)
}
