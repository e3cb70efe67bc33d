use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use warden_dns_domain::CoreError;

/// HTTP-facing wrapper for the shared error taxonomy.
///
/// Every per-request failure surfaces to the caller as `(status, text)`.
pub struct ApiError(pub CoreError);

impl From<CoreError> for ApiError {
    fn from(e: CoreError) -> Self {
        ApiError(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            CoreError::MalformedInput(_) => StatusCode::BAD_REQUEST,
            CoreError::NotFound(_) => StatusCode::NOT_FOUND,
            // The caller handed us a URL we could not import from.
            CoreError::UpstreamFetch(_) => StatusCode::BAD_REQUEST,
            CoreError::Filesystem(_) | CoreError::Database(_) | CoreError::UpstreamDns(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            CoreError::AuthFailure => StatusCode::UNAUTHORIZED,
            CoreError::Forbidden => StatusCode::FORBIDDEN,
        };
        (status, self.0.to_string()).into_response()
    }
}
