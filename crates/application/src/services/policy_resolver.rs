use crate::ports::{DevicePolicyRepository, FilterIndexPort};
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::warn;
use warden_dns_domain::UnknownDevicePolicy;

const POLICY_CACHE_CAPACITY: usize = 256;
const POLICY_CACHE_TTL: Duration = Duration::from_secs(60);

/// Composite per-device matcher.
///
/// Given a device identifier, fetches that device's enabled list names from
/// the policy repository (cached for 60 s) and matches the domain against
/// exactly those lists. Clients with no binding fall through to the
/// configured unknown-device policy.
pub struct PolicyResolver {
    policies: Arc<dyn DevicePolicyRepository>,
    index: Arc<dyn FilterIndexPort>,
    cache: Mutex<LruCache<Arc<str>, (Arc<Vec<String>>, Instant)>>,
}

impl PolicyResolver {
    pub fn new(policies: Arc<dyn DevicePolicyRepository>, index: Arc<dyn FilterIndexPort>) -> Self {
        Self {
            policies,
            index,
            cache: Mutex::new(LruCache::new(
                NonZeroUsize::new(POLICY_CACHE_CAPACITY).unwrap(),
            )),
        }
    }

    /// Enabled list names for `device_id`, served from the LRU when fresh.
    ///
    /// Repository errors degrade to an empty policy: the DNS path must keep
    /// answering even when the auth store is unreachable.
    pub async fn enabled_lists(&self, device_id: &str) -> Arc<Vec<String>> {
        if let Ok(mut cache) = self.cache.lock() {
            if let Some((lists, fetched_at)) = cache.get(device_id) {
                if fetched_at.elapsed() < POLICY_CACHE_TTL {
                    return Arc::clone(lists);
                }
                cache.pop(device_id);
            }
        }

        let lists = match self.policies.enabled_lists(device_id).await {
            Ok(lists) => Arc::new(lists),
            Err(e) => {
                warn!(device_id, error = %e, "Policy lookup failed; treating as empty");
                Arc::new(Vec::new())
            }
        };

        if let Ok(mut cache) = self.cache.lock() {
            cache.put(
                Arc::from(device_id),
                (Arc::clone(&lists), Instant::now()),
            );
        }
        lists
    }

    /// Is `domain` blocked for this specific device?
    pub async fn is_blocked_for_device(&self, domain: &str, device_id: &str) -> bool {
        let lists = self.enabled_lists(device_id).await;
        if lists.is_empty() {
            return false;
        }
        self.index.matches_in(domain, &lists)
    }

    /// Full per-query evaluation, applying the unknown-device fallback when
    /// the client has no binding.
    pub async fn evaluate(
        &self,
        domain: &str,
        device_id: Option<&str>,
        fallback: UnknownDevicePolicy,
    ) -> bool {
        match device_id {
            Some(id) => self.is_blocked_for_device(domain, id).await,
            None => match fallback {
                UnknownDevicePolicy::NoBlock => false,
                UnknownDevicePolicy::Global => self.index.matches_any(domain),
            },
        }
    }

    /// Forget cached policies (after a list-membership change upstream).
    pub fn invalidate_cache(&self) {
        if let Ok(mut cache) = self.cache.lock() {
            cache.clear();
        }
    }
}
