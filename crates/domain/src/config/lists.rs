use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// List-store settings: the rule-file directory and import limits.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListsConfig {
    /// Directory holding one `<name>.txt` per list. Owned exclusively by the
    /// list store.
    #[serde(default = "default_directory")]
    pub directory: PathBuf,

    /// Timeout for HTTP fetches during list imports, in seconds.
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,

    /// Upper bound on a fetched list body. Larger responses abort the import.
    #[serde(default = "default_fetch_max_bytes")]
    pub fetch_max_bytes: usize,
}

impl Default for ListsConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
            fetch_max_bytes: default_fetch_max_bytes(),
        }
    }
}

fn default_directory() -> PathBuf {
    PathBuf::from("blocklist")
}

fn default_fetch_timeout_secs() -> u64 {
    15
}

fn default_fetch_max_bytes() -> usize {
    32 * 1024 * 1024
}
