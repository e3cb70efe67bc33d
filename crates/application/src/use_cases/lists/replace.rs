use crate::ports::ListStorePort;
use std::sync::Arc;
use warden_dns_domain::CoreError;

pub struct ReplaceListUseCase {
    store: Arc<dyn ListStorePort>,
}

impl ReplaceListUseCase {
    pub fn new(store: Arc<dyn ListStorePort>) -> Self {
        Self { store }
    }

    /// Overwrite the list with the parsed contents of `url`. Returns the
    /// number of rules written.
    pub async fn execute(&self, name: &str, url: &str) -> Result<usize, CoreError> {
        self.store.replace_from_url(name, url).await
    }
}
