//! Cache Provider Port
//!
//! Port for cache backend providers. Supports a distributed backend
//! (Redis), an in-memory backend (Moka), and a null provider that stands
//! in both for tests and for the permanently-disabled state the cache
//! subsystem degrades to when the backend is unreachable at startup.
//!
//! Adapters report failures through `Result`; the decision to *absorb*
//! those failures belongs to the application-layer response cache, which
//! treats every error as a miss. Nothing on the request path may abort
//! because a cache operation failed.

use crate::error::Result;
use crate::value_objects::CacheKey;
use async_trait::async_trait;
use std::time::Duration;

/// Cache Provider Port
///
/// JSON-based storage with a TTL on every write. Entries are never written
/// without an expiration and are never renewed.
///
/// # Implementations
///
/// - **Redis**: distributed cache for multi-instance deployments
/// - **Moka**: in-memory cache for single-instance and local development
/// - **Null**: always-miss provider for tests and degraded mode
#[async_trait]
pub trait CacheProvider: Send + Sync + std::fmt::Debug {
    /// Get a value from the cache as a JSON string
    ///
    /// Returns `None` when the key is absent or expired.
    async fn get_json(&self, key: &CacheKey) -> Result<Option<String>>;

    /// Set a value in the cache from a JSON string, with expiry
    async fn set_json(&self, key: &CacheKey, value: &str, ttl: Duration) -> Result<()>;

    /// The name/identifier of this provider implementation
    fn provider_name(&self) -> &str;
}
