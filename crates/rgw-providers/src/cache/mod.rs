//! Cache backend providers

/// Moka in-memory cache provider
pub mod moka;
/// Null cache provider
pub mod null;
/// Redis distributed cache provider
pub mod redis;

pub use moka::MokaCacheProvider;
pub use null::NullCacheProvider;
pub use redis::RedisCacheProvider;
