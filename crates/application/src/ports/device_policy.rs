use async_trait::async_trait;
use warden_dns_domain::CoreError;

/// Read-only view of the external auth store's device → enabled-lists
/// mapping.
///
/// The core never writes this mapping; the web UI collaborator owns it.
#[async_trait]
pub trait DevicePolicyRepository: Send + Sync {
    /// List names the device has enabled. Unknown devices and devices with
    /// no lists both yield an empty vector.
    async fn enabled_lists(&self, device_id: &str) -> Result<Vec<String>, CoreError>;
}

/// Policy repository for single-user deployments: no device ever has lists
/// of its own, so filtering falls through to the unknown-device policy.
pub struct NoopPolicyRepository;

#[async_trait]
impl DevicePolicyRepository for NoopPolicyRepository {
    async fn enabled_lists(&self, _device_id: &str) -> Result<Vec<String>, CoreError> {
        Ok(Vec::new())
    }
}
