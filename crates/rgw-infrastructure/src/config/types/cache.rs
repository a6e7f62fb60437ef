//! Cache configuration types

use rgw_domain::constants::{CACHE_DEFAULT_TTL_SECS, CACHE_NAMESPACE_QUERY};
use serde::{Deserialize, Serialize};

/// Cache backends
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CacheBackend {
    /// Distributed cache (Redis)
    Redis,
    /// In-memory cache (Moka)
    Memory,
}

/// Cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Cache enabled; when false the null provider is wired in
    pub enabled: bool,

    /// Cache backend
    pub backend: CacheBackend,

    /// Redis URL (for the Redis backend)
    pub redis_url: Option<String>,

    /// TTL applied to every write, in seconds
    pub ttl_secs: u64,

    /// Namespace prefix for derived keys
    pub namespace: String,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            backend: CacheBackend::Memory,
            redis_url: None,
            ttl_secs: CACHE_DEFAULT_TTL_SECS,
            namespace: CACHE_NAMESPACE_QUERY.to_string(),
        }
    }
}
