#![allow(dead_code)]

use arc_swap::ArcSwap;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tempfile::TempDir;
use warden_dns_api::AppState;
use warden_dns_application::ports::{
    DevicePolicyRepository, ListStorePort, SessionDirectory, SessionIdentity,
};
use warden_dns_application::services::{ClientBindingCache, PolicyResolver};
use warden_dns_application::use_cases::{
    AppendListUseCase, BrowseListsUseCase, DeleteListUseCase, ReloadListsUseCase,
    RemoveDomainUseCase, ReplaceListUseCase, ValidateSourceUseCase,
};
use warden_dns_domain::config::{BlockingConfig, ListsConfig, TelemetryConfig};
use warden_dns_domain::CoreError;
use warden_dns_infrastructure::{FileListStore, TelemetrySink};

/// Fixed device → lists policy for scoped-overview tests.
pub struct StaticPolicies(pub HashMap<String, Vec<String>>);

impl StaticPolicies {
    pub fn empty() -> Arc<Self> {
        Arc::new(Self(HashMap::new()))
    }

    pub fn of(entries: Vec<(&str, Vec<&str>)>) -> Arc<Self> {
        Arc::new(Self(
            entries
                .into_iter()
                .map(|(device, lists)| {
                    (
                        device.to_string(),
                        lists.into_iter().map(String::from).collect(),
                    )
                })
                .collect(),
        ))
    }
}

#[async_trait]
impl DevicePolicyRepository for StaticPolicies {
    async fn enabled_lists(&self, device_id: &str) -> Result<Vec<String>, CoreError> {
        Ok(self.0.get(device_id).cloned().unwrap_or_default())
    }
}

/// Session directory with a fixed token table.
pub struct StaticSessions(pub HashMap<String, SessionIdentity>);

impl StaticSessions {
    pub fn of(entries: Vec<(&str, &str, bool)>) -> Arc<Self> {
        Arc::new(Self(
            entries
                .into_iter()
                .map(|(token, device, is_guest)| {
                    (
                        token.to_string(),
                        SessionIdentity {
                            device_id: Arc::from(device),
                            is_guest,
                        },
                    )
                })
                .collect(),
        ))
    }
}

#[async_trait]
impl SessionDirectory for StaticSessions {
    async fn resolve(&self, session_id: &str) -> Result<Option<SessionIdentity>, CoreError> {
        Ok(self.0.get(session_id).cloned())
    }
}

pub struct TestContext {
    pub state: AppState,
    pub store: Arc<FileListStore>,
    pub dir: TempDir,
}

pub async fn build_state(
    sessions: Option<Arc<dyn SessionDirectory>>,
    policies: Arc<dyn DevicePolicyRepository>,
) -> TestContext {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(
        FileListStore::new(&ListsConfig {
            directory: dir.path().to_path_buf(),
            ..Default::default()
        })
        .unwrap(),
    );
    store.load_all().await.unwrap();

    let store_port: Arc<dyn ListStorePort> = Arc::clone(&store) as Arc<_>;
    let policy = Arc::new(PolicyResolver::new(policies, Arc::clone(&store) as Arc<_>));
    let telemetry = TelemetrySink::new(&TelemetryConfig {
        recent_cap: 16,
        log_file: dir.path().join("logs.jsonl"),
    });

    let state = AppState {
        append_list: Arc::new(AppendListUseCase::new(Arc::clone(&store_port))),
        replace_list: Arc::new(ReplaceListUseCase::new(Arc::clone(&store_port))),
        remove_domain: Arc::new(RemoveDomainUseCase::new(Arc::clone(&store_port))),
        delete_list: Arc::new(DeleteListUseCase::new(Arc::clone(&store_port))),
        browse_lists: Arc::new(BrowseListsUseCase::new(Arc::clone(&store_port))),
        validate_source: Arc::new(ValidateSourceUseCase::new(Arc::clone(&store_port))),
        reload_lists: Arc::new(ReloadListsUseCase::new(Arc::clone(&store_port))),
        policy,
        bindings: Arc::new(ClientBindingCache::new()),
        telemetry,
        blocking: Arc::new(ArcSwap::from_pointee(BlockingConfig::default())),
        sessions,
    };

    TestContext { state, store, dir }
}
