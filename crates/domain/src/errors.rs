use thiserror::Error;

/// Error taxonomy shared by every layer.
///
/// HTTP handlers map variants to status codes; the DNS path never surfaces
/// these to clients beyond the defined synthesized responses.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("fetch failed: {0}")]
    UpstreamFetch(String),

    #[error("filesystem failure: {0}")]
    Filesystem(String),

    #[error("upstream DNS failure: {0}")]
    UpstreamDns(String),

    #[error("database error: {0}")]
    Database(String),

    #[error("missing or invalid session")]
    AuthFailure,

    #[error("mutation forbidden for guest sessions")]
    Forbidden,
}

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::Filesystem(e.to_string())
    }
}
