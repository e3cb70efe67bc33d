use arc_swap::ArcSwap;
use std::sync::Arc;
use warden_dns_application::ports::SessionDirectory;
use warden_dns_application::services::{ClientBindingCache, PolicyResolver};
use warden_dns_application::use_cases::{
    AppendListUseCase, BrowseListsUseCase, DeleteListUseCase, ReloadListsUseCase,
    RemoveDomainUseCase, ReplaceListUseCase, ValidateSourceUseCase,
};
use warden_dns_domain::config::BlockingConfig;
use warden_dns_infrastructure::TelemetrySink;

#[derive(Clone)]
pub struct AppState {
    pub append_list: Arc<AppendListUseCase>,
    pub replace_list: Arc<ReplaceListUseCase>,
    pub remove_domain: Arc<RemoveDomainUseCase>,
    pub delete_list: Arc<DeleteListUseCase>,
    pub browse_lists: Arc<BrowseListsUseCase>,
    pub validate_source: Arc<ValidateSourceUseCase>,
    pub reload_lists: Arc<ReloadListsUseCase>,
    pub policy: Arc<PolicyResolver>,
    pub bindings: Arc<ClientBindingCache>,
    pub telemetry: Arc<TelemetrySink>,
    /// Runtime blocking behavior; swapped atomically on `/config` updates.
    pub blocking: Arc<ArcSwap<BlockingConfig>>,
    /// Session resolution; `None` runs the control plane unauthenticated
    /// (single-user deployments).
    pub sessions: Option<Arc<dyn SessionDirectory>>,
}
