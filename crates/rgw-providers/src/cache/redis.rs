//! Redis distributed cache provider
//!
//! Distributed cache implementation using Redis as the backend.
//! Suitable for multi-instance deployments.
//!
//! Connection failures at startup are surfaced from [`RedisCacheProvider::connect`]
//! so the caller can degrade the cache subsystem to the null provider;
//! there is no retry path.

use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::MultiplexedConnection};
use rgw_domain::error::{Error, Result};
use rgw_domain::ports::providers::CacheProvider;
use rgw_domain::value_objects::CacheKey;
use std::time::Duration;

/// Redis cache provider
///
/// Uses a multiplexed connection for efficient connection reuse.
#[derive(Clone)]
pub struct RedisCacheProvider {
    client: Client,
}

impl RedisCacheProvider {
    /// Connect to Redis and verify the connection with a PING
    ///
    /// # Arguments
    ///
    /// * `connection_string` - Redis connection URL (e.g., "redis://localhost:6379")
    pub async fn connect(connection_string: &str) -> Result<Self> {
        let client = Client::open(connection_string).map_err(|e| {
            Error::cache_with_source("failed to create Redis client", e)
        })?;

        let provider = Self { client };
        let mut conn = provider.get_connection().await?;
        redis::cmd("PING")
            .query_async::<()>(&mut conn)
            .await
            .map_err(|e| Error::cache_with_source("Redis PING failed", e))?;

        Ok(provider)
    }

    /// Get a multiplexed connection
    async fn get_connection(&self) -> Result<MultiplexedConnection> {
        self.client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| Error::cache_with_source("failed to get Redis connection", e))
    }
}

#[async_trait]
impl CacheProvider for RedisCacheProvider {
    async fn get_json(&self, key: &CacheKey) -> Result<Option<String>> {
        let mut conn = self.get_connection().await?;
        conn.get::<_, Option<String>>(key.as_str())
            .await
            .map_err(|e| Error::cache_with_source("Redis GET failed", e))
    }

    async fn set_json(&self, key: &CacheKey, value: &str, ttl: Duration) -> Result<()> {
        let mut conn = self.get_connection().await?;
        // Entries are never written without an expiration.
        conn.set_ex::<_, _, ()>(key.as_str(), value, ttl.as_secs().max(1))
            .await
            .map_err(|e| Error::cache_with_source("Redis SETEX failed", e))
    }

    fn provider_name(&self) -> &str {
        "redis"
    }
}

impl std::fmt::Debug for RedisCacheProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisCacheProvider").finish_non_exhaustive()
    }
}
