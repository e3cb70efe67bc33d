use anyhow::Context;
use arc_swap::ArcSwap;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use warden_dns_api::AppState;
use warden_dns_application::ports::device_policy::NoopPolicyRepository;
use warden_dns_application::ports::{DevicePolicyRepository, ListStorePort, SessionDirectory};
use warden_dns_application::services::{ClientBindingCache, PolicyResolver};
use warden_dns_application::use_cases::{
    AppendListUseCase, BrowseListsUseCase, DeleteListUseCase, ReloadListsUseCase,
    RemoveDomainUseCase, ReplaceListUseCase, ValidateSourceUseCase,
};
use warden_dns_domain::config::BlockingConfig;
use warden_dns_domain::Config;
use warden_dns_infrastructure::{
    FileListStore, SqliteDevicePolicyRepository, SqliteSessionDirectory, TelemetrySink,
};
use warden_dns_jobs::{BindingSweepJob, JobRunner};

/// Binding lifetime; refreshed on every authenticated control-plane request.
const BINDING_TTL: Duration = Duration::from_secs(24 * 3600);

/// Everything the servers need, wired once at startup.
#[derive(Clone)]
pub struct Services {
    pub store: Arc<FileListStore>,
    pub bindings: Arc<ClientBindingCache>,
    pub policy: Arc<PolicyResolver>,
    pub telemetry: Arc<TelemetrySink>,
    pub blocking: Arc<ArcSwap<BlockingConfig>>,
    pub reload_lists: Arc<ReloadListsUseCase>,
    state: AppState,
}

impl Services {
    pub fn app_state(&self) -> AppState {
        self.state.clone()
    }

    pub async fn start_jobs(&self) {
        JobRunner::new()
            .with_binding_sweep(BindingSweepJob::new(Arc::clone(&self.bindings)))
            .start()
            .await;
    }
}

pub async fn build_services(config: &Config, auth_db: Option<&str>) -> anyhow::Result<Services> {
    let store = Arc::new(FileListStore::new(&config.lists)?);
    let store_port: Arc<dyn ListStorePort> = Arc::clone(&store) as Arc<_>;

    let (policy_repo, sessions): (
        Arc<dyn DevicePolicyRepository>,
        Option<Arc<dyn SessionDirectory>>,
    ) = match auth_db {
        Some(path) => {
            let options = SqliteConnectOptions::new().filename(path).read_only(true);
            let pool = SqlitePoolOptions::new()
                .max_connections(4)
                .connect_with(options)
                .await
                .with_context(|| format!("cannot open auth database {path}"))?;
            info!(path, "Auth database attached");
            (
                Arc::new(SqliteDevicePolicyRepository::new(pool.clone())) as Arc<_>,
                Some(Arc::new(SqliteSessionDirectory::new(pool)) as Arc<_>),
            )
        }
        None => {
            info!("No auth database; control plane runs unauthenticated");
            (Arc::new(NoopPolicyRepository) as Arc<_>, None)
        }
    };

    let policy = Arc::new(PolicyResolver::new(
        policy_repo,
        Arc::clone(&store) as Arc<_>,
    ));
    let bindings = Arc::new(ClientBindingCache::with_ttl(BINDING_TTL));
    let telemetry = TelemetrySink::new(&config.telemetry);
    let blocking = Arc::new(ArcSwap::from_pointee(config.blocking.clone()));
    let reload_lists = Arc::new(ReloadListsUseCase::new(Arc::clone(&store_port)));

    let state = AppState {
        append_list: Arc::new(AppendListUseCase::new(Arc::clone(&store_port))),
        replace_list: Arc::new(ReplaceListUseCase::new(Arc::clone(&store_port))),
        remove_domain: Arc::new(RemoveDomainUseCase::new(Arc::clone(&store_port))),
        delete_list: Arc::new(DeleteListUseCase::new(Arc::clone(&store_port))),
        browse_lists: Arc::new(BrowseListsUseCase::new(Arc::clone(&store_port))),
        validate_source: Arc::new(ValidateSourceUseCase::new(Arc::clone(&store_port))),
        reload_lists: Arc::clone(&reload_lists),
        policy: Arc::clone(&policy),
        bindings: Arc::clone(&bindings),
        telemetry: Arc::clone(&telemetry),
        blocking: Arc::clone(&blocking),
        sessions,
    };

    Ok(Services {
        store,
        bindings,
        policy,
        telemetry,
        blocking,
        reload_lists,
        state,
    })
}
