use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::{ConnectInfo, Request, State};
use axum::http::{HeaderValue, Method};
use axum::middleware::Next;
use axum::response::Response;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::debug;
use warden_dns_domain::CoreError;

pub const SESSION_HEADER: &str = "x-session-id";
pub const DEVICE_HEADER: &str = "x-user-mac";
pub const GUEST_HEADER: &str = "x-is-guest";

/// Identity attached to every request after the auth middleware ran.
///
/// `device_id: None` means the control plane runs unauthenticated
/// (single-user mode) and every request has full access.
#[derive(Clone, Debug, Default)]
pub struct AuthContext {
    pub device_id: Option<Arc<str>>,
    pub is_guest: bool,
}

pub fn is_read_only_method(method: &Method) -> bool {
    *method == Method::GET || *method == Method::HEAD || *method == Method::OPTIONS
}

/// Resolve `X-Session-ID` into a device identity.
///
/// With no session directory configured the request passes through
/// untouched. Otherwise a missing or unknown session is 401, and a guest
/// attempting a mutating verb is 403. The resolved identity is surfaced to
/// handlers as `X-User-MAC` / `X-Is-Guest` headers and an `AuthContext`
/// extension, and a logged-in device's source IP is bound for the DNS path.
pub async fn session_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let Some(sessions) = state.sessions.as_ref() else {
        request.extensions_mut().insert(AuthContext::default());
        return Ok(next.run(request).await);
    };

    let session_id = request
        .headers()
        .get(SESSION_HEADER)
        .and_then(|value| value.to_str().ok())
        .ok_or(ApiError(CoreError::AuthFailure))?
        .to_string();

    let identity = sessions
        .resolve(&session_id)
        .await?
        .ok_or(ApiError(CoreError::AuthFailure))?;

    if identity.is_guest && !is_read_only_method(request.method()) {
        return Err(ApiError(CoreError::Forbidden));
    }

    if let Ok(value) = HeaderValue::from_str(&identity.device_id) {
        request.headers_mut().insert(DEVICE_HEADER, value);
    }
    request.headers_mut().insert(
        GUEST_HEADER,
        HeaderValue::from_static(if identity.is_guest { "true" } else { "false" }),
    );

    // Seeing a logged-in device at this address binds it for the resolver.
    // ConnectInfo is present when the server was built with connect-info;
    // handler-level tests run without it.
    if !identity.is_guest {
        if let Some(ConnectInfo(addr)) = request
            .extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .copied()
        {
            debug!(ip = %addr.ip(), device = %identity.device_id, "Client binding refreshed");
            state
                .bindings
                .set(addr.ip(), Arc::clone(&identity.device_id));
        }
    }

    request.extensions_mut().insert(AuthContext {
        device_id: Some(identity.device_id),
        is_guest: identity.is_guest,
    });

    Ok(next.run(request).await)
}
