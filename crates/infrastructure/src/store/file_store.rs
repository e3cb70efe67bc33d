use super::fetch::fetch_text;
use super::snapshot::ListSnapshot;
use arc_swap::ArcSwap;
use async_trait::async_trait;
use rustc_hash::FxHashSet;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{info, warn};
use warden_dns_application::ports::{
    FilterIndexPort, ListPage, ListStorePort, SourcePreview,
};
use warden_dns_domain::config::ListsConfig;
use warden_dns_domain::{CoreError, Rule};

const VALIDATE_SAMPLE: usize = 10;

/// The list store: exclusive owner of the rule-file directory.
///
/// Readers take the current snapshot through one atomic load and keep using
/// it for the whole operation; writers serialize on `write_lock`, rewrite
/// the file, then rescan the directory and swap in a fresh snapshot. A
/// failed write never advances the snapshot.
pub struct FileListStore {
    dir: PathBuf,
    snapshot: ArcSwap<ListSnapshot>,
    write_lock: Mutex<()>,
    http: reqwest::Client,
    fetch_max_bytes: usize,
}

impl FileListStore {
    pub fn new(config: &ListsConfig) -> Result<Self, CoreError> {
        std::fs::create_dir_all(&config.directory).map_err(|e| {
            CoreError::Filesystem(format!(
                "cannot create list directory {}: {e}",
                config.directory.display()
            ))
        })?;

        let http = reqwest::Client::builder()
            .user_agent(concat!("warden-dns/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.fetch_timeout_secs))
            .build()
            .map_err(|e| CoreError::UpstreamFetch(e.to_string()))?;

        Ok(Self {
            dir: config.directory.clone(),
            snapshot: ArcSwap::from_pointee(ListSnapshot::empty()),
            write_lock: Mutex::new(()),
            http,
            fetch_max_bytes: config.fetch_max_bytes,
        })
    }

    /// The current immutable snapshot.
    pub fn current(&self) -> Arc<ListSnapshot> {
        self.snapshot.load_full()
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.txt"))
    }

    /// List names must be filesystem-safe tokens; anything else is rejected
    /// before it can touch a path.
    fn validate_name(name: &str) -> Result<(), CoreError> {
        let safe = !name.is_empty()
            && !name.starts_with('.')
            && name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
        if safe {
            Ok(())
        } else {
            Err(CoreError::MalformedInput(format!("invalid list name: {name}")))
        }
    }

    /// Rescan the directory and publish a fresh snapshot.
    ///
    /// Caller must hold `write_lock`. An unreadable directory is fatal; an
    /// unreadable single file is skipped with a warning.
    async fn reload_locked(&self) -> Result<(), CoreError> {
        let mut lists: HashMap<String, Vec<Rule>> = HashMap::new();

        let mut entries = tokio::fs::read_dir(&self.dir).await.map_err(|e| {
            CoreError::Filesystem(format!("cannot read {}: {e}", self.dir.display()))
        })?;

        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| CoreError::Filesystem(e.to_string()))?
        {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("txt") {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            match tokio::fs::read_to_string(&path).await {
                Ok(text) => {
                    lists.insert(name.to_string(), dedupe(Rule::parse_text(&text)));
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Skipping unreadable list file");
                }
            }
        }

        let snapshot = ListSnapshot::from_lists(lists);
        info!(
            lists = snapshot.overview().len(),
            "List snapshot published"
        );
        self.snapshot.store(Arc::new(snapshot));
        Ok(())
    }

    /// Persist `rules` as the full contents of list `name`, then reload.
    async fn write_and_reload(&self, name: &str, rules: &[Rule]) -> Result<(), CoreError> {
        let mut contents = String::with_capacity(rules.len() * 24);
        for rule in rules {
            contents.push_str(rule.as_str());
            contents.push('\n');
        }
        tokio::fs::write(self.path_for(name), contents)
            .await
            .map_err(|e| {
                CoreError::Filesystem(format!("cannot write list {name}: {e}"))
            })?;
        self.reload_locked().await
    }

    /// Current rules of `name`, or None if the list is not in the snapshot.
    fn existing_rules(&self, name: &str) -> Option<Vec<Rule>> {
        self.snapshot
            .load()
            .get(name)
            .map(|view| view.rules.clone())
    }

    async fn append_rules(
        &self,
        name: &str,
        incoming: Vec<Rule>,
        create_if_missing: bool,
    ) -> Result<usize, CoreError> {
        Self::validate_name(name)?;
        let _guard = self.write_lock.lock().await;

        let existing = match self.existing_rules(name) {
            Some(rules) => rules,
            None if create_if_missing => Vec::new(),
            None => return Err(CoreError::NotFound(format!("list {name}"))),
        };

        let before = existing.len();
        let merged = dedupe(existing.into_iter().chain(incoming).collect());
        let added = merged.len() - before;

        if added > 0 {
            self.write_and_reload(name, &merged).await?;
        } else if create_if_missing && !self.snapshot.load().contains(name) {
            // Creating an empty list still materializes the file.
            self.write_and_reload(name, &merged).await?;
        }

        Ok(added)
    }
}

/// Collapse duplicates, keeping first-occurrence order.
fn dedupe(rules: Vec<Rule>) -> Vec<Rule> {
    let mut seen: FxHashSet<Rule> = FxHashSet::default();
    rules
        .into_iter()
        .filter(|rule| seen.insert(rule.clone()))
        .collect()
}

#[async_trait]
impl ListStorePort for FileListStore {
    async fn load_all(&self) -> Result<(), CoreError> {
        let _guard = self.write_lock.lock().await;
        self.reload_locked().await
    }

    async fn append_from_url(
        &self,
        name: &str,
        url: &str,
        create_if_missing: bool,
    ) -> Result<usize, CoreError> {
        let text = fetch_text(&self.http, url, self.fetch_max_bytes).await?;
        let incoming = Rule::parse_text(&text);
        info!(list = name, url, fetched = incoming.len(), "Fetched list source");
        self.append_rules(name, incoming, create_if_missing).await
    }

    async fn append_items(
        &self,
        name: &str,
        items: &[String],
        create_if_missing: bool,
    ) -> Result<usize, CoreError> {
        let incoming = Rule::parse_items(items);
        if incoming.is_empty() {
            return Err(CoreError::MalformedInput("no valid domains in items".into()));
        }
        self.append_rules(name, incoming, create_if_missing).await
    }

    async fn replace_from_url(&self, name: &str, url: &str) -> Result<usize, CoreError> {
        Self::validate_name(name)?;
        let text = fetch_text(&self.http, url, self.fetch_max_bytes).await?;
        let rules = dedupe(Rule::parse_text(&text));

        let _guard = self.write_lock.lock().await;
        self.write_and_reload(name, &rules).await?;
        Ok(rules.len())
    }

    async fn remove_domain(&self, name: &str, domain: &str) -> Result<bool, CoreError> {
        Self::validate_name(name)?;
        let _guard = self.write_lock.lock().await;

        let existing = self
            .existing_rules(name)
            .ok_or_else(|| CoreError::NotFound(format!("list {name}")))?;

        let before = existing.len();
        let remaining: Vec<Rule> = existing
            .into_iter()
            .filter(|rule| rule.as_str() != domain)
            .collect();

        if remaining.len() == before {
            return Ok(false);
        }
        self.write_and_reload(name, &remaining).await?;
        Ok(true)
    }

    async fn delete_list(&self, name: &str) -> Result<(), CoreError> {
        Self::validate_name(name)?;
        let _guard = self.write_lock.lock().await;

        match tokio::fs::remove_file(self.path_for(name)).await {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(CoreError::NotFound(format!("list {name}")));
            }
            Err(e) => {
                return Err(CoreError::Filesystem(format!("cannot delete list {name}: {e}")));
            }
        }
        self.reload_locked().await
    }

    fn list_domains(
        &self,
        name: &str,
        offset: usize,
        limit: usize,
        query: Option<&str>,
    ) -> Result<ListPage, CoreError> {
        let snapshot = self.snapshot.load();
        let view = snapshot
            .get(name)
            .ok_or_else(|| CoreError::NotFound(format!("list {name}")))?;

        let needle = query.map(str::to_lowercase);
        let filtered: Vec<&Rule> = view
            .rules
            .iter()
            .filter(|rule| match &needle {
                Some(q) => rule.as_str().contains(q.as_str()),
                None => true,
            })
            .collect();

        let total = filtered.len();
        let items = filtered
            .into_iter()
            .skip(offset)
            .take(limit)
            .map(|rule| rule.as_str().to_string())
            .collect();

        Ok(ListPage {
            total,
            items,
            offset,
            limit,
        })
    }

    fn list_overview(&self) -> Vec<(String, usize)> {
        self.snapshot.load().overview()
    }

    async fn validate_source(&self, url: &str) -> Result<SourcePreview, CoreError> {
        let text = fetch_text(&self.http, url, self.fetch_max_bytes).await?;
        let rules = dedupe(Rule::parse_text(&text));
        let sample = rules
            .iter()
            .take(VALIDATE_SAMPLE)
            .map(|rule| rule.as_str().to_string())
            .collect();
        Ok(SourcePreview {
            count: rules.len(),
            sample,
        })
    }
}

impl FilterIndexPort for FileListStore {
    fn matches_any(&self, domain: &str) -> bool {
        self.snapshot.load().matches_any(domain)
    }

    fn matches_in(&self, domain: &str, lists: &[String]) -> bool {
        self.snapshot.load().matches_in(domain, lists)
    }
}
