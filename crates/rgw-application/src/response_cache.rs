//! Best-effort, owner-partitioned response cache
//!
//! Wraps a [`CacheProvider`] and makes the silent-degradation contract
//! explicit: every provider or decode failure is logged and reported as a
//! miss (`None`) or a failed write (`false`). Nothing here can abort the
//! caller's request.
//!
//! Keys are partitioned per owner: the owner id participates in the hashed
//! content, so one tenant can never observe another tenant's cached
//! responses even for byte-identical inputs.

use rgw_domain::ports::providers::CacheProvider;
use rgw_domain::value_objects::{CacheKey, UserId};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Best-effort cache facade over an injected provider
#[derive(Clone)]
pub struct ResponseCache {
    provider: Arc<dyn CacheProvider>,
    namespace: String,
    ttl: Duration,
}

impl ResponseCache {
    /// Create a cache facade writing under `namespace` with a fixed TTL
    pub fn new(provider: Arc<dyn CacheProvider>, namespace: impl Into<String>, ttl: Duration) -> Self {
        Self {
            provider,
            namespace: namespace.into(),
            ttl,
        }
    }

    /// Derive the owner-partitioned key for `content`
    fn key_for(&self, owner: UserId, content: &str) -> CacheKey {
        CacheKey::derive(&self.namespace, &format!("{owner}\n{content}"))
    }

    /// Read a cached value; absence, backend failure, and decode failure
    /// are all a miss
    pub async fn get<T: DeserializeOwned>(&self, owner: UserId, content: &str) -> Option<T> {
        let key = self.key_for(owner, content);
        match self.provider.get_json(&key).await {
            Ok(Some(json)) => match serde_json::from_str(&json) {
                Ok(value) => Some(value),
                Err(e) => {
                    debug!(key = %key, error = %e, "cache entry failed to decode, treating as miss");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!(key = %key, error = %e, "cache read failed, treating as miss");
                None
            }
        }
    }

    /// Write a value with the configured TTL; returns whether the write
    /// was accepted
    pub async fn put<T: Serialize>(&self, owner: UserId, content: &str, value: &T) -> bool {
        let key = self.key_for(owner, content);
        let json = match serde_json::to_string(value) {
            Ok(json) => json,
            Err(e) => {
                warn!(key = %key, error = %e, "cache value failed to encode, skipping write");
                return false;
            }
        };
        match self.provider.set_json(&key, &json, self.ttl).await {
            Ok(()) => true,
            Err(e) => {
                warn!(key = %key, error = %e, "cache write failed");
                false
            }
        }
    }

    /// Name of the underlying provider, for startup logging
    pub fn provider_name(&self) -> &str {
        self.provider.provider_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use rgw_domain::error::{Error, Result};
    use std::collections::HashMap;
    use std::sync::Mutex;
    use uuid::Uuid;

    /// Provider that remembers writes, for partitioning assertions
    #[derive(Debug, Default)]
    struct MapProvider {
        entries: Mutex<HashMap<String, String>>,
    }

    #[async_trait]
    impl CacheProvider for MapProvider {
        async fn get_json(&self, key: &CacheKey) -> Result<Option<String>> {
            Ok(self.entries.lock().unwrap().get(key.as_str()).cloned())
        }

        async fn set_json(&self, key: &CacheKey, value: &str, _ttl: Duration) -> Result<()> {
            self.entries
                .lock()
                .unwrap()
                .insert(key.as_str().to_string(), value.to_string());
            Ok(())
        }

        fn provider_name(&self) -> &str {
            "map"
        }
    }

    /// Provider whose every operation fails
    #[derive(Debug)]
    struct BrokenProvider;

    #[async_trait]
    impl CacheProvider for BrokenProvider {
        async fn get_json(&self, _key: &CacheKey) -> Result<Option<String>> {
            Err(Error::cache("backend unreachable"))
        }

        async fn set_json(&self, _key: &CacheKey, _value: &str, _ttl: Duration) -> Result<()> {
            Err(Error::cache("backend unreachable"))
        }

        fn provider_name(&self) -> &str {
            "broken"
        }
    }

    fn owner() -> UserId {
        UserId::from(Uuid::new_v4())
    }

    #[tokio::test]
    async fn never_written_key_is_a_miss() {
        let cache = ResponseCache::new(Arc::new(MapProvider::default()), "query", Duration::from_secs(60));
        let hit: Option<String> = cache.get(owner(), "no such entry").await;
        assert!(hit.is_none());
    }

    #[tokio::test]
    async fn round_trip_within_one_owner() {
        let cache = ResponseCache::new(Arc::new(MapProvider::default()), "query", Duration::from_secs(60));
        let user = owner();
        assert!(cache.put(user, "question", &"answer".to_string()).await);
        let hit: Option<String> = cache.get(user, "question").await;
        assert_eq!(hit.as_deref(), Some("answer"));
    }

    #[tokio::test]
    async fn entries_are_partitioned_per_owner() {
        let cache = ResponseCache::new(Arc::new(MapProvider::default()), "query", Duration::from_secs(60));
        let alice = owner();
        let bob = owner();
        assert!(cache.put(alice, "question", &"alice's answer".to_string()).await);
        let hit: Option<String> = cache.get(bob, "question").await;
        assert!(hit.is_none(), "one tenant observed another's cached entry");
    }

    #[tokio::test]
    async fn failing_backend_degrades_to_miss() {
        let cache = ResponseCache::new(Arc::new(BrokenProvider), "query", Duration::from_secs(60));
        let user = owner();
        let hit: Option<String> = cache.get(user, "question").await;
        assert!(hit.is_none());
        assert!(!cache.put(user, "question", &"answer".to_string()).await);
    }

    #[tokio::test]
    async fn undecodable_entry_is_a_miss() {
        let provider = Arc::new(MapProvider::default());
        let cache = ResponseCache::new(provider.clone(), "query", Duration::from_secs(60));
        let user = owner();
        assert!(cache.put(user, "question", &"answer".to_string()).await);
        for value in provider.entries.lock().unwrap().values_mut() {
            *value = "{not json".to_string();
        }
        let hit: Option<String> = cache.get(user, "question").await;
        assert!(hit.is_none());
    }
}
