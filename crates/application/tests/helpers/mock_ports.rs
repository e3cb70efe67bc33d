#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::RwLock;
use warden_dns_application::ports::{
    DevicePolicyRepository, FilterIndexPort, ListPage, ListStorePort, SourcePreview,
};
use warden_dns_domain::CoreError;

// ============================================================================
// Mock DevicePolicyRepository
// ============================================================================

pub struct MockPolicyRepository {
    policies: RwLock<HashMap<String, Vec<String>>>,
    should_fail: RwLock<bool>,
}

impl MockPolicyRepository {
    pub fn new() -> Self {
        Self {
            policies: RwLock::new(HashMap::new()),
            should_fail: RwLock::new(false),
        }
    }

    pub fn with_policies(entries: Vec<(&str, Vec<&str>)>) -> Self {
        let map = entries
            .into_iter()
            .map(|(device, lists)| {
                (
                    device.to_string(),
                    lists.into_iter().map(String::from).collect(),
                )
            })
            .collect();
        Self {
            policies: RwLock::new(map),
            should_fail: RwLock::new(false),
        }
    }

    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }
}

#[async_trait]
impl DevicePolicyRepository for MockPolicyRepository {
    async fn enabled_lists(&self, device_id: &str) -> Result<Vec<String>, CoreError> {
        if *self.should_fail.read().await {
            return Err(CoreError::Database("mock policy store down".into()));
        }
        Ok(self
            .policies
            .read()
            .await
            .get(device_id)
            .cloned()
            .unwrap_or_default())
    }
}

// ============================================================================
// Mock FilterIndexPort (exact matching is enough for composition tests)
// ============================================================================

pub struct MockFilterIndex {
    lists: HashMap<String, Vec<String>>,
}

impl MockFilterIndex {
    pub fn with_lists(entries: Vec<(&str, Vec<&str>)>) -> Arc<Self> {
        let lists = entries
            .into_iter()
            .map(|(name, domains)| {
                (
                    name.to_string(),
                    domains.into_iter().map(String::from).collect(),
                )
            })
            .collect();
        Arc::new(Self { lists })
    }
}

impl FilterIndexPort for MockFilterIndex {
    fn matches_any(&self, domain: &str) -> bool {
        self.lists
            .values()
            .any(|rules| rules.iter().any(|r| r == domain))
    }

    fn matches_in(&self, domain: &str, lists: &[String]) -> bool {
        lists.iter().any(|name| {
            self.lists
                .get(name)
                .is_some_and(|rules| rules.iter().any(|r| r == domain))
        })
    }
}

// ============================================================================
// Mock ListStorePort (in-memory, records rule sets per list)
// ============================================================================

pub struct MockListStore {
    // std Mutex: the sync trait methods must work inside async tests.
    pub lists: Mutex<HashMap<String, Vec<String>>>,
    pub preview: SourcePreview,
}

impl MockListStore {
    pub fn new() -> Self {
        Self {
            lists: Mutex::new(HashMap::new()),
            preview: SourcePreview {
                count: 0,
                sample: Vec::new(),
            },
        }
    }

    pub fn with_preview(count: usize, sample: Vec<&str>) -> Self {
        Self {
            lists: Mutex::new(HashMap::new()),
            preview: SourcePreview {
                count,
                sample: sample.into_iter().map(String::from).collect(),
            },
        }
    }

    pub fn seed(&self, name: &str, rules: Vec<&str>) {
        self.lists
            .lock()
            .unwrap()
            .insert(name.to_string(), rules.into_iter().map(String::from).collect());
    }
}

#[async_trait]
impl ListStorePort for MockListStore {
    async fn load_all(&self) -> Result<(), CoreError> {
        Ok(())
    }

    async fn append_from_url(
        &self,
        name: &str,
        _url: &str,
        create_if_missing: bool,
    ) -> Result<usize, CoreError> {
        let mut lists = self.lists.lock().unwrap();
        if !lists.contains_key(name) && !create_if_missing {
            return Err(CoreError::NotFound(name.to_string()));
        }
        lists
            .entry(name.to_string())
            .or_default()
            .push("fetched.example".to_string());
        Ok(1)
    }

    async fn append_items(
        &self,
        name: &str,
        items: &[String],
        create_if_missing: bool,
    ) -> Result<usize, CoreError> {
        let mut lists = self.lists.lock().unwrap();
        if !lists.contains_key(name) && !create_if_missing {
            return Err(CoreError::NotFound(name.to_string()));
        }
        let list = lists.entry(name.to_string()).or_default();
        let before = list.len();
        list.extend(items.iter().cloned());
        Ok(list.len() - before)
    }

    async fn replace_from_url(&self, name: &str, _url: &str) -> Result<usize, CoreError> {
        self.lists
            .lock()
            .unwrap()
            .insert(name.to_string(), vec!["replaced.example".to_string()]);
        Ok(1)
    }

    async fn remove_domain(&self, name: &str, domain: &str) -> Result<bool, CoreError> {
        let mut lists = self.lists.lock().unwrap();
        let list = lists
            .get_mut(name)
            .ok_or_else(|| CoreError::NotFound(name.to_string()))?;
        let before = list.len();
        list.retain(|r| r != domain);
        Ok(list.len() < before)
    }

    async fn delete_list(&self, name: &str) -> Result<(), CoreError> {
        self.lists
            .lock()
            .unwrap()
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| CoreError::NotFound(name.to_string()))
    }

    fn list_domains(
        &self,
        name: &str,
        offset: usize,
        limit: usize,
        query: Option<&str>,
    ) -> Result<ListPage, CoreError> {
        let lists = self.lists.lock().unwrap();
        let list = lists
            .get(name)
            .ok_or_else(|| CoreError::NotFound(name.to_string()))?;
        let filtered: Vec<String> = list
            .iter()
            .filter(|r| query.map_or(true, |q| r.contains(q)))
            .cloned()
            .collect();
        let total = filtered.len();
        let items = filtered.into_iter().skip(offset).take(limit).collect();
        Ok(ListPage {
            total,
            items,
            offset,
            limit,
        })
    }

    fn list_overview(&self) -> Vec<(String, usize)> {
        self.lists
            .lock()
            .unwrap()
            .iter()
            .map(|(name, rules)| (name.clone(), rules.len()))
            .collect()
    }

    async fn validate_source(&self, _url: &str) -> Result<SourcePreview, CoreError> {
        Ok(self.preview.clone())
    }
}
