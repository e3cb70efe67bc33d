use compact_str::CompactString;
use rustc_hash::FxBuildHasher;
use smallvec::SmallVec;
use std::collections::HashMap;

#[derive(Default)]
struct TrieNode {
    children: HashMap<CompactString, TrieNode, FxBuildHasher>,
    /// A `*.suffix` pattern terminates at this node.
    terminal: bool,
}

impl TrieNode {
    fn new() -> Self {
        Self {
            children: HashMap::with_hasher(FxBuildHasher),
            terminal: false,
        }
    }
}

/// Reversed-label trie for `*.suffix` patterns.
///
/// `*.ads.com` is stored as the path ["com", "ads"] with a terminal mark at
/// "ads". Lookup walks the query's labels in reverse; a terminal node
/// matches only when at least one label remains past it, so `*.ads.com`
/// matches `sub.ads.com` but never the apex `ads.com`.
///
/// Built once per snapshot and never mutated afterwards.
#[derive(Default)]
pub struct SuffixTrie {
    root: TrieNode,
}

impl SuffixTrie {
    pub fn new() -> Self {
        Self {
            root: TrieNode::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }

    /// Insert a `*.suffix` pattern; the leading `*.` is stripped here.
    pub fn insert(&mut self, pattern: &str) {
        let suffix = pattern.strip_prefix("*.").unwrap_or(pattern);
        let mut node = &mut self.root;
        for label in suffix.split('.').rev() {
            node = node.children.entry(CompactString::new(label)).or_default();
        }
        node.terminal = true;
    }

    /// Does any stored pattern match `domain`?
    #[inline]
    pub fn matches(&self, domain: &str) -> bool {
        let labels: SmallVec<[&str; 8]> = domain.split('.').rev().collect();
        let n = labels.len();
        let mut node = &self.root;

        for (i, label) in labels.iter().enumerate() {
            match node.children.get(*label) {
                Some(child) => {
                    // Requires at least one more label beyond the suffix.
                    if child.terminal && i + 1 < n {
                        return true;
                    }
                    node = child;
                }
                None => return false,
            }
        }
        false
    }
}
