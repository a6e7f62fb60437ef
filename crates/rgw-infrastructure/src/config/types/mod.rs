//! Configuration types module

pub mod app;
pub mod auth;
pub mod cache;
pub mod cors;
pub mod database;
pub mod logging;
pub mod providers;
pub mod server;

// Re-export main types
pub use app::AppConfig;
pub use auth::{AuthConfig, AuthMode};
pub use cache::{CacheBackend, CacheConfig};
pub use cors::CorsConfig;
pub use database::DatabaseConfig;
pub use logging::LoggingConfig;
pub use providers::{CompletionConfig, EmbeddingConfig, IngestConfig};
pub use server::ServerConfig;
