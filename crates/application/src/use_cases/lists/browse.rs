use crate::ports::{ListPage, ListStorePort};
use std::sync::Arc;
use warden_dns_domain::CoreError;

const DEFAULT_LIMIT: usize = 100;
const MAX_LIMIT: usize = 1_000;

/// Read-only views over the current snapshot: per-list pages and the
/// all-lists overview.
pub struct BrowseListsUseCase {
    store: Arc<dyn ListStorePort>,
}

impl BrowseListsUseCase {
    pub fn new(store: Arc<dyn ListStorePort>) -> Self {
        Self { store }
    }

    pub fn items(
        &self,
        name: &str,
        offset: Option<usize>,
        limit: Option<usize>,
        query: Option<&str>,
    ) -> Result<ListPage, CoreError> {
        let offset = offset.unwrap_or(0);
        let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);
        self.store.list_domains(name, offset, limit, query)
    }

    /// Every list with its rule count, optionally restricted to the given
    /// names (device-scoped view).
    pub fn overview(&self, scope: Option<&[String]>) -> Vec<(String, usize)> {
        let all = self.store.list_overview();
        match scope {
            Some(names) => all
                .into_iter()
                .filter(|(name, _)| names.iter().any(|n| n == name))
                .collect(),
            None => all,
        }
    }
}
