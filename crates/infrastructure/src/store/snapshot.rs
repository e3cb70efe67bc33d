use crate::filter::PatternIndex;
use std::collections::HashMap;
use warden_dns_domain::Rule;

/// One list inside a snapshot: its rules in file order plus the compiled
/// per-list matcher.
pub struct ListView {
    pub rules: Vec<Rule>,
    pub index: PatternIndex,
}

/// Immutable view of the whole list store.
///
/// Published by a single atomic swap after every successful edit or reload;
/// readers hold an `Arc` to it and never observe intermediate states. The
/// union index backs global (unknown-device) matching without walking every
/// per-list matcher.
pub struct ListSnapshot {
    lists: HashMap<String, ListView>,
    union: PatternIndex,
}

impl ListSnapshot {
    pub fn empty() -> Self {
        Self {
            lists: HashMap::new(),
            union: PatternIndex::empty(),
        }
    }

    pub fn from_lists(lists: HashMap<String, Vec<Rule>>) -> Self {
        let union = PatternIndex::build(lists.values().flatten());
        let lists = lists
            .into_iter()
            .map(|(name, rules)| {
                let index = PatternIndex::build(rules.iter());
                (name, ListView { rules, index })
            })
            .collect();
        Self { lists, union }
    }

    pub fn get(&self, name: &str) -> Option<&ListView> {
        self.lists.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lists.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.lists.keys().map(String::as_str)
    }

    /// `(name, rule count)` for every list.
    pub fn overview(&self) -> Vec<(String, usize)> {
        let mut out: Vec<(String, usize)> = self
            .lists
            .iter()
            .map(|(name, view)| (name.clone(), view.rules.len()))
            .collect();
        out.sort();
        out
    }

    /// Match against the union of all lists.
    #[inline]
    pub fn matches_any(&self, domain: &str) -> bool {
        self.union.matches(domain)
    }

    /// Match against the named lists only. Names absent from the snapshot
    /// are skipped.
    #[inline]
    pub fn matches_in(&self, domain: &str, names: &[String]) -> bool {
        names
            .iter()
            .any(|name| self.lists.get(name).is_some_and(|view| view.index.matches(domain)))
    }
}
