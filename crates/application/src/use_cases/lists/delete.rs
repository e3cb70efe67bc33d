use crate::ports::ListStorePort;
use std::sync::Arc;
use warden_dns_domain::CoreError;

pub struct DeleteListUseCase {
    store: Arc<dyn ListStorePort>,
}

impl DeleteListUseCase {
    pub fn new(store: Arc<dyn ListStorePort>) -> Self {
        Self { store }
    }

    pub async fn execute(&self, name: &str) -> Result<(), CoreError> {
        self.store.delete_list(name).await
    }
}
