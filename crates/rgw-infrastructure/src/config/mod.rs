//! Configuration loading and types

/// Configuration loader
pub mod loader;
/// Configuration type definitions
pub mod types;

pub use loader::ConfigLoader;
pub use types::{
    AppConfig, AuthConfig, AuthMode, CacheBackend, CacheConfig, CompletionConfig, CorsConfig,
    DatabaseConfig, EmbeddingConfig, IngestConfig, LoggingConfig, ServerConfig,
};
