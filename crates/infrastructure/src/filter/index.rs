use super::suffix_trie::SuffixTrie;
use compact_str::CompactString;
use fancy_regex::Regex;
use rustc_hash::FxBuildHasher;
use std::collections::HashSet;
use tracing::warn;
use warden_dns_domain::Rule;

/// Compiled form of a rule set.
///
/// Rules are split into three tiers at build time:
///   - literals            → hash set, O(1)
///   - `*.suffix` patterns → reversed-label trie
///   - other wildcards     → anchored regexes, checked last
///
/// Matching is first-hit; rule order is irrelevant. Immutable once built,
/// so snapshots share indexes freely across threads.
pub struct PatternIndex {
    exact: HashSet<CompactString, FxBuildHasher>,
    suffixes: SuffixTrie,
    wildcards: Vec<Regex>,
    rule_count: usize,
    dropped: usize,
}

impl PatternIndex {
    pub fn build<'a, I>(rules: I) -> Self
    where
        I: IntoIterator<Item = &'a Rule>,
    {
        let mut exact = HashSet::with_hasher(FxBuildHasher);
        let mut suffixes = SuffixTrie::new();
        let mut wildcards = Vec::new();
        let mut rule_count = 0usize;
        let mut dropped = 0usize;

        for rule in rules {
            rule_count += 1;
            let pattern = rule.as_str();

            if !rule.is_wildcard() {
                exact.insert(CompactString::new(pattern));
                continue;
            }

            // Single leading `*.` and nothing else → trie tier.
            if let Some(suffix) = pattern.strip_prefix("*.") {
                if !suffix.contains('*') && !suffix.is_empty() {
                    suffixes.insert(pattern);
                    continue;
                }
            }

            match compile_wildcard(pattern) {
                Some(regex) => wildcards.push(regex),
                None => {
                    dropped += 1;
                    warn!(pattern, "Dropping uncompilable wildcard rule");
                }
            }
        }

        Self {
            exact,
            suffixes,
            wildcards,
            rule_count,
            dropped,
        }
    }

    pub fn empty() -> Self {
        Self::build(std::iter::empty())
    }

    /// Whole-string match of `domain` (already normalized) against the set.
    #[inline]
    pub fn matches(&self, domain: &str) -> bool {
        if self.exact.contains(domain) {
            return true;
        }
        if self.suffixes.matches(domain) {
            return true;
        }
        self.wildcards
            .iter()
            .any(|regex| regex.is_match(domain).unwrap_or(false))
    }

    pub fn rule_count(&self) -> usize {
        self.rule_count
    }

    /// Rules that failed to compile (test hook).
    pub fn dropped(&self) -> usize {
        self.dropped
    }
}

/// Translate a wildcard pattern into an anchored regex: `*` becomes `.*`
/// (matching any characters, dots included), everything else is literal.
fn compile_wildcard(pattern: &str) -> Option<Regex> {
    let mut body = String::with_capacity(pattern.len() + 8);
    body.push('^');
    for c in pattern.chars() {
        match c {
            '*' => body.push_str(".*"),
            '.' | '+' | '?' | '(' | ')' | '[' | ']' | '{' | '}' | '^' | '$' | '|' | '\\' => {
                body.push('\\');
                body.push(c);
            }
            c => body.push(c),
        }
    }
    body.push('$');
    Regex::new(&body).ok()
}
