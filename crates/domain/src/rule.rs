use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::IpAddr;

/// Hosts-file labels that never belong in a blocklist.
const RESERVED_LOCAL_NAMES: &[&str] = &[
    "localhost",
    "localhost.localdomain",
    "broadcasthost",
    "local",
    "ip6-localhost",
    "ip6-loopback",
    "ip6-localnet",
    "ip6-mcastprefix",
    "ip6-allnodes",
    "ip6-allrouters",
    "ip6-allhosts",
];

/// Normalize a domain for matching: lowercase, trailing dot stripped.
pub fn normalize_domain(raw: &str) -> String {
    raw.trim().trim_end_matches('.').to_ascii_lowercase()
}

/// A normalized blocklist rule.
///
/// Lowercase, no trailing dot. May contain `*` wildcards, each matching any
/// run of characters including dots. Anchoring is implicit: `*.ads.example`
/// matches `a.ads.example` but not `ads.example`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rule(String);

impl Rule {
    /// Normalize and validate a single candidate pattern.
    ///
    /// Returns `None` for empty strings, comments, bare IP literals, and
    /// reserved local names.
    pub fn new(raw: &str) -> Option<Rule> {
        let normalized = normalize_domain(raw);
        if normalized.is_empty() || normalized.starts_with('#') {
            return None;
        }
        if normalized.parse::<IpAddr>().is_ok() {
            return None;
        }
        if RESERVED_LOCAL_NAMES.contains(&normalized.as_str()) {
            return None;
        }
        Some(Rule(normalized))
    }

    /// Parse one line of list-file text into zero or more rules.
    ///
    /// Accepted shapes:
    /// - `# comment` or blank         → nothing
    /// - `ads.example.com`            → one rule
    /// - `*.ads.example.com`          → one wildcard rule
    /// - `0.0.0.0 ads.com tracker.io` → hosts syntax, one rule per hostname
    ///
    /// Inline `# …` comments are stripped first. Hostnames that are reserved
    /// local names or IP literals are dropped.
    pub fn parse_line(line: &str) -> Vec<Rule> {
        let line = match line.find('#') {
            Some(idx) => &line[..idx],
            None => line,
        };
        let mut tokens = line.split_whitespace();

        let first = match tokens.next() {
            Some(t) => t,
            None => return Vec::new(),
        };

        // Hosts syntax: an address followed by one or more hostnames.
        if first.parse::<IpAddr>().is_ok() {
            return tokens.filter_map(Rule::new).collect();
        }

        // Plain pattern line: a single token.
        Rule::new(first).into_iter().collect()
    }

    /// Parse a whole list text (one pattern or hosts entry per line).
    pub fn parse_text(text: &str) -> Vec<Rule> {
        text.lines().flat_map(Rule::parse_line).collect()
    }

    /// Parse free-form item strings, splitting on commas, whitespace and
    /// newlines before normalization.
    pub fn parse_items<S: AsRef<str>>(items: &[S]) -> Vec<Rule> {
        items
            .iter()
            .flat_map(|item| item.as_ref().split([',', '\n', '\r', '\t', ' ']))
            .filter_map(Rule::new)
            .collect()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_wildcard(&self) -> bool {
        self.0.contains('*')
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Rule {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_domain() {
        assert_eq!(Rule::new("ads.example.com").unwrap().as_str(), "ads.example.com");
    }

    #[test]
    fn test_normalization_lowercases_and_strips_dot() {
        assert_eq!(Rule::new("ADS.Example.COM.").unwrap().as_str(), "ads.example.com");
    }

    #[test]
    fn test_rejects_empty_and_comment() {
        assert!(Rule::new("").is_none());
        assert!(Rule::new("   ").is_none());
        assert!(Rule::new("# a comment").is_none());
    }

    #[test]
    fn test_rejects_bare_ip_literals() {
        assert!(Rule::new("0.0.0.0").is_none());
        assert!(Rule::new("127.0.0.1").is_none());
        assert!(Rule::new("::1").is_none());
    }

    #[test]
    fn test_rejects_reserved_local_names() {
        assert!(Rule::new("localhost").is_none());
        assert!(Rule::new("ip6-allrouters").is_none());
        assert!(Rule::new("Broadcasthost").is_none());
    }

    #[test]
    fn test_wildcard_rule() {
        let rule = Rule::new("*.ads.example").unwrap();
        assert!(rule.is_wildcard());
    }

    #[test]
    fn test_parse_hosts_line() {
        let rules = Rule::parse_line("0.0.0.0 ads.com tracker.io");
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].as_str(), "ads.com");
        assert_eq!(rules[1].as_str(), "tracker.io");
    }

    #[test]
    fn test_parse_hosts_line_skips_localhost() {
        assert!(Rule::parse_line("127.0.0.1 localhost").is_empty());
        assert!(Rule::parse_line(":: ip6-localhost ip6-loopback").is_empty());
    }

    #[test]
    fn test_parse_line_strips_inline_comment() {
        let rules = Rule::parse_line("0.0.0.0 ads.com # blocked 2024-02-11");
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].as_str(), "ads.com");
    }

    #[test]
    fn test_parse_text_filters_noise() {
        let text = "# header\n\nads.com\n127.0.0.1 tracker.io\n0.0.0.0\n";
        let rules = Rule::parse_text(text);
        assert_eq!(rules.len(), 2);
    }

    #[test]
    fn test_parse_items_splits_on_separators() {
        let items = vec!["a.com, b.com".to_string(), "c.com\nd.com e.com".to_string()];
        let rules = Rule::parse_items(&items);
        assert_eq!(rules.len(), 5);
    }

    #[test]
    fn test_normalize_query_name() {
        assert_eq!(normalize_domain("Ads.Example.COM."), "ads.example.com");
    }
}
