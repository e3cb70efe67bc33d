use dashmap::DashMap;
use rustc_hash::FxBuildHasher;
use std::net::IpAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};

struct Binding {
    device_id: Arc<str>,
    expires_at: Option<Instant>,
}

/// Client-IP → device-identifier cache.
///
/// Populated by the control plane when it observes a logged-in device at a
/// given IP; consulted by the DNS front-end on every packet. Read-heavy, so
/// a sharded map with short critical sections. Entries carry an optional
/// TTL; the sweep job drops expired ones, and `get` ignores them either way.
pub struct ClientBindingCache {
    bindings: DashMap<IpAddr, Binding, FxBuildHasher>,
    ttl: Option<Duration>,
}

impl ClientBindingCache {
    /// Cache without expiry. Bindings live until invalidated.
    pub fn new() -> Self {
        Self {
            bindings: DashMap::with_hasher(FxBuildHasher),
            ttl: None,
        }
    }

    /// Cache whose bindings expire `ttl` after their last `set`.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            bindings: DashMap::with_hasher(FxBuildHasher),
            ttl: Some(ttl),
        }
    }

    pub fn set(&self, ip: IpAddr, device_id: Arc<str>) {
        let expires_at = self.ttl.map(|ttl| Instant::now() + ttl);
        self.bindings.insert(
            ip,
            Binding {
                device_id,
                expires_at,
            },
        );
    }

    pub fn get(&self, ip: IpAddr) -> Option<Arc<str>> {
        let entry = self.bindings.get(&ip)?;
        if let Some(expires_at) = entry.expires_at {
            if Instant::now() >= expires_at {
                return None;
            }
        }
        Some(Arc::clone(&entry.device_id))
    }

    pub fn invalidate(&self, ip: IpAddr) -> bool {
        self.bindings.remove(&ip).is_some()
    }

    /// Drop expired bindings. Returns how many were removed.
    pub fn sweep_expired(&self) -> usize {
        let now = Instant::now();
        let before = self.bindings.len();
        self.bindings
            .retain(|_, binding| match binding.expires_at {
                Some(expires_at) => now < expires_at,
                None => true,
            });
        before - self.bindings.len()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Default for ClientBindingCache {
    fn default() -> Self {
        Self::new()
    }
}
