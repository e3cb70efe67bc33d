use crate::ports::{ListStorePort, SourcePreview};
use std::sync::Arc;
use warden_dns_domain::CoreError;

const SAMPLE_SIZE: usize = 10;

pub struct ValidateSourceUseCase {
    store: Arc<dyn ListStorePort>,
}

impl ValidateSourceUseCase {
    pub fn new(store: Arc<dyn ListStorePort>) -> Self {
        Self { store }
    }

    /// Fetch and parse a candidate source, returning the rule count and the
    /// first few rules. Never writes anything.
    pub async fn execute(&self, url: &str) -> Result<SourcePreview, CoreError> {
        let mut preview = self.store.validate_source(url).await?;
        preview.sample.truncate(SAMPLE_SIZE);
        Ok(preview)
    }
}
