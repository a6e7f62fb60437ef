//! Moka in-memory cache provider
//!
//! Concurrent in-memory cache for single-instance deployments and local
//! development. Entries expire per-write via Moka's expiry hook, honoring
//! the TTL the caller passes on each set.

use async_trait::async_trait;
use moka::Expiry;
use moka::future::Cache;
use rgw_domain::error::Result;
use rgw_domain::ports::providers::CacheProvider;
use rgw_domain::value_objects::CacheKey;
use std::time::{Duration, Instant};

/// Default capacity in entries
const DEFAULT_CAPACITY: u64 = 10_000;

/// Cached value paired with the TTL it was written under
type Entry = (String, Duration);

struct PerEntryTtl;

impl Expiry<String, Entry> for PerEntryTtl {
    fn expire_after_create(
        &self,
        _key: &String,
        value: &Entry,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(value.1)
    }
}

/// Moka-based in-memory cache provider
#[derive(Clone)]
pub struct MokaCacheProvider {
    cache: Cache<String, Entry>,
}

impl MokaCacheProvider {
    /// Create a provider with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a provider with a specific entry capacity
    pub fn with_capacity(capacity: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(capacity)
            .expire_after(PerEntryTtl)
            .build();
        Self { cache }
    }
}

impl Default for MokaCacheProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheProvider for MokaCacheProvider {
    async fn get_json(&self, key: &CacheKey) -> Result<Option<String>> {
        Ok(self.cache.get(key.as_str()).await.map(|(json, _)| json))
    }

    async fn set_json(&self, key: &CacheKey, value: &str, ttl: Duration) -> Result<()> {
        self.cache
            .insert(key.as_str().to_string(), (value.to_string(), ttl))
            .await;
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "moka"
    }
}

impl std::fmt::Debug for MokaCacheProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MokaCacheProvider")
            .field("entries", &self.cache.entry_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn round_trip() {
        let provider = MokaCacheProvider::new();
        let key = CacheKey::derive("query", "content");
        provider
            .set_json(&key, "\"value\"", Duration::from_secs(60))
            .await
            .unwrap();
        let hit = provider.get_json(&key).await.unwrap();
        assert_eq!(hit.as_deref(), Some("\"value\""));
    }

    #[tokio::test]
    async fn unwritten_key_misses() {
        let provider = MokaCacheProvider::new();
        let key = CacheKey::derive("query", "never written");
        assert!(provider.get_json(&key).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn entries_expire_after_ttl() {
        let provider = MokaCacheProvider::new();
        let key = CacheKey::derive("query", "short lived");
        provider
            .set_json(&key, "\"value\"", Duration::from_millis(50))
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(120)).await;
        assert!(provider.get_json(&key).await.unwrap().is_none());
    }
}
