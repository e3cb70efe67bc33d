use crate::ports::ListStorePort;
use std::sync::Arc;
use warden_dns_domain::CoreError;

/// Append rules to a list from a URL or from free-form items, optionally
/// creating the list. Backs both `/lists/create` and `/lists/{name}/append`.
pub struct AppendListUseCase {
    store: Arc<dyn ListStorePort>,
}

impl AppendListUseCase {
    pub fn new(store: Arc<dyn ListStorePort>) -> Self {
        Self { store }
    }

    /// Returns the resolved list name and how many rules were added.
    ///
    /// When `name` is absent it is inferred from the URL's last path segment
    /// (extension stripped) or, failing that, its hostname.
    pub async fn execute(
        &self,
        name: Option<String>,
        url: Option<String>,
        items: Option<Vec<String>>,
        create_if_missing: bool,
    ) -> Result<(String, usize), CoreError> {
        let name = match name {
            Some(n) if !n.trim().is_empty() => n,
            _ => url
                .as_deref()
                .and_then(infer_list_name)
                .ok_or_else(|| CoreError::MalformedInput("missing list name".into()))?,
        };

        let added = match (url, items) {
            (Some(url), _) => {
                self.store
                    .append_from_url(&name, &url, create_if_missing)
                    .await?
            }
            (None, Some(items)) if !items.is_empty() => {
                self.store
                    .append_items(&name, &items, create_if_missing)
                    .await?
            }
            _ => {
                return Err(CoreError::MalformedInput(
                    "either url or items is required".into(),
                ))
            }
        };

        Ok((name, added))
    }
}

/// Derive a filesystem-safe list name from a source URL.
///
/// `https://host/path/easylist.txt` → `easylist`; a URL with no usable path
/// segment falls back to the hostname.
pub fn infer_list_name(url: &str) -> Option<String> {
    let without_scheme = url.split_once("://").map(|(_, rest)| rest).unwrap_or(url);
    let without_query = without_scheme
        .split_once(['?', '#'])
        .map(|(head, _)| head)
        .unwrap_or(without_scheme);

    let (host, path) = match without_query.split_once('/') {
        Some((host, path)) => (host, path),
        None => (without_query, ""),
    };

    let segment = path.rsplit('/').find(|s| !s.is_empty());

    let candidate = match segment {
        Some(segment) => {
            // Strip one trailing extension: "hosts.txt" → "hosts".
            match segment.rsplit_once('.') {
                Some((stem, _)) if !stem.is_empty() => stem,
                _ => segment,
            }
        }
        None => host,
    };

    sanitize_list_name(candidate)
}

/// Reduce a candidate to a filesystem-safe token: `[A-Za-z0-9._-]` only, no
/// leading/trailing separators, non-empty.
pub fn sanitize_list_name(candidate: &str) -> Option<String> {
    let sanitized: String = candidate
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '-'
            }
        })
        .collect();
    let trimmed = sanitized.trim_matches(['-', '.', '_']);
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_from_path_segment() {
        assert_eq!(
            infer_list_name("https://example.org/lists/easylist.txt").as_deref(),
            Some("easylist")
        );
    }

    #[test]
    fn test_infer_strips_query_string() {
        assert_eq!(
            infer_list_name("https://example.org/ads.txt?raw=1").as_deref(),
            Some("ads")
        );
    }

    #[test]
    fn test_infer_falls_back_to_host() {
        assert_eq!(
            infer_list_name("https://blocklists.example.org/").as_deref(),
            Some("blocklists.example.org")
        );
    }

    #[test]
    fn test_infer_keeps_inner_dots() {
        assert_eq!(
            infer_list_name("http://h/x/some.hosts.txt").as_deref(),
            Some("some.hosts")
        );
    }

    #[test]
    fn test_sanitize_replaces_unsafe_chars() {
        assert_eq!(
            sanitize_list_name("my list!v2").as_deref(),
            Some("my-list-v2")
        );
        assert!(sanitize_list_name("///").is_none());
    }
}
