use moka::future::Cache;
use serde_json::Value;
use std::time::Duration;

/// Size-bounded, TTL'd cache of response payloads
///
/// Owned by the route layer, never by the matching core. Can be built
/// disabled, in which case every lookup misses and inserts are
/// dropped. Staleness within the TTL is acceptable: scores depend only
/// on immutable profile fields.
pub struct ResponseCache {
    inner: Option<Cache<String, Value>>,
}

impl ResponseCache {
    pub fn new(capacity: u64, ttl_secs: u64) -> Self {
        let inner = Cache::builder()
            .max_capacity(capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { inner: Some(inner) }
    }

    pub fn disabled() -> Self {
        Self { inner: None }
    }

    pub async fn get(&self, key: &str) -> Option<Value> {
        match &self.inner {
            Some(cache) => {
                let hit = cache.get(key).await;
                if hit.is_some() {
                    tracing::trace!("Cache hit: {}", key);
                }
                hit
            }
            None => None,
        }
    }

    pub async fn insert(&self, key: String, value: Value) {
        if let Some(cache) = &self.inner {
            tracing::trace!("Cache set: {}", key);
            cache.insert(key, value).await;
        }
    }
}

/// Cache key builder
pub struct CacheKey;

impl CacheKey {
    /// Build a cache key for match recommendations
    pub fn matches(user_id: &str) -> String {
        format!("matches:{}", user_id)
    }
}
