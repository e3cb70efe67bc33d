use crate::ports::ListStorePort;
use std::sync::Arc;
use warden_dns_domain::{normalize_domain, CoreError};

pub struct RemoveDomainUseCase {
    store: Arc<dyn ListStorePort>,
}

impl RemoveDomainUseCase {
    pub fn new(store: Arc<dyn ListStorePort>) -> Self {
        Self { store }
    }

    /// Drop one rule from the list. The domain is normalized before the
    /// exact-match removal.
    pub async fn execute(&self, name: &str, domain: &str) -> Result<bool, CoreError> {
        let normalized = normalize_domain(domain);
        if normalized.is_empty() {
            return Err(CoreError::MalformedInput("empty domain".into()));
        }
        self.store.remove_domain(name, &normalized).await
    }
}
