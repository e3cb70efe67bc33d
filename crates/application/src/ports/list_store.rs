use async_trait::async_trait;
use warden_dns_domain::CoreError;

/// One page of a filtered list-contents view.
#[derive(Debug, Clone)]
pub struct ListPage {
    /// Number of rules matching the filter, before pagination.
    pub total: usize,
    pub items: Vec<String>,
    pub offset: usize,
    pub limit: usize,
}

/// Parse-only preview of a remote source (`/validate`).
#[derive(Debug, Clone)]
pub struct SourcePreview {
    pub count: usize,
    pub sample: Vec<String>,
}

/// The list store: exclusive owner of the on-disk rule files.
///
/// Mutators compute the full new file contents, write the file, then reload
/// so readers observe either the pre- or post-edit snapshot, never a torn
/// one. Failed writes leave the in-memory snapshot untouched.
#[async_trait]
pub trait ListStorePort: Send + Sync {
    /// Re-scan the directory, parse every `*.txt`, publish a new snapshot.
    async fn load_all(&self) -> Result<(), CoreError>;

    /// Fetch `url`, union its rules with the existing list, persist, reload.
    /// Returns how many rules the union added.
    async fn append_from_url(
        &self,
        name: &str,
        url: &str,
        create_if_missing: bool,
    ) -> Result<usize, CoreError>;

    /// Union free-form items (split on commas, whitespace, newlines) into
    /// the list. Returns how many rules the union added.
    async fn append_items(
        &self,
        name: &str,
        items: &[String],
        create_if_missing: bool,
    ) -> Result<usize, CoreError>;

    /// Overwrite the list with the parsed contents of `url`. Returns the
    /// number of rules written.
    async fn replace_from_url(&self, name: &str, url: &str) -> Result<usize, CoreError>;

    /// Drop one exact normalized rule. Returns whether anything was removed.
    async fn remove_domain(&self, name: &str, domain: &str) -> Result<bool, CoreError>;

    /// Remove the list file and reload.
    async fn delete_list(&self, name: &str) -> Result<(), CoreError>;

    /// Paginated, substring-filtered view over the current snapshot.
    fn list_domains(
        &self,
        name: &str,
        offset: usize,
        limit: usize,
        query: Option<&str>,
    ) -> Result<ListPage, CoreError>;

    /// Every list in the current snapshot with its rule count.
    fn list_overview(&self) -> Vec<(String, usize)>;

    /// Fetch and parse `url` without touching any list.
    async fn validate_source(&self, url: &str) -> Result<SourcePreview, CoreError>;
}
