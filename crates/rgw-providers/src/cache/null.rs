//! Null cache provider
//!
//! A cache provider that stores nothing. Wired in when caching is disabled
//! in configuration or when the Redis backend is unreachable at startup,
//! and used as the fake in tests: every get is a miss, every set is
//! accepted and dropped.

use async_trait::async_trait;
use rgw_domain::error::Result;
use rgw_domain::ports::providers::CacheProvider;
use rgw_domain::value_objects::CacheKey;
use std::time::Duration;

/// Null cache provider that doesn't store anything
#[derive(Debug, Clone, Default)]
pub struct NullCacheProvider;

impl NullCacheProvider {
    /// Create a new null cache provider
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CacheProvider for NullCacheProvider {
    async fn get_json(&self, _key: &CacheKey) -> Result<Option<String>> {
        Ok(None)
    }

    async fn set_json(&self, _key: &CacheKey, _value: &str, _ttl: Duration) -> Result<()> {
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}
