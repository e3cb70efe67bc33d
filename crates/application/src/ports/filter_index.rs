/// Synchronous matching against the current list snapshot.
///
/// Both methods are hot-path: the implementation reads an atomically swapped
/// immutable snapshot, so calls never block on writers.
pub trait FilterIndexPort: Send + Sync {
    /// Does `domain` match any rule in any list?
    fn matches_any(&self, domain: &str) -> bool;

    /// Does `domain` match a rule in one of the named lists?
    fn matches_in(&self, domain: &str, lists: &[String]) -> bool;
}
