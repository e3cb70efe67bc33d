use async_trait::async_trait;
use std::sync::Arc;
use warden_dns_domain::CoreError;

/// Identity resolved from a control-plane session token.
#[derive(Debug, Clone)]
pub struct SessionIdentity {
    /// Stable device identifier (nominally a MAC address).
    pub device_id: Arc<str>,
    pub is_guest: bool,
}

/// Resolves `X-Session-ID` tokens issued by the external credential store.
///
/// The core only consumes the resulting identity; issuance and expiry live
/// with the collaborator.
#[async_trait]
pub trait SessionDirectory: Send + Sync {
    /// `Ok(None)` means the token is unknown or expired.
    async fn resolve(&self, session_id: &str) -> Result<Option<SessionIdentity>, CoreError>;
}
