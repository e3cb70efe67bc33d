use crate::ports::ListStorePort;
use std::sync::Arc;
use warden_dns_domain::CoreError;

pub struct ReloadListsUseCase {
    store: Arc<dyn ListStorePort>,
}

impl ReloadListsUseCase {
    pub fn new(store: Arc<dyn ListStorePort>) -> Self {
        Self { store }
    }

    /// Re-scan the list directory and publish a fresh snapshot.
    pub async fn execute(&self) -> Result<(), CoreError> {
        self.store.load_all().await
    }
}
