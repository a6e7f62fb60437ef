//! Main application configuration

use serde::{Deserialize, Serialize};

use super::auth::AuthConfig;
use super::cache::CacheConfig;
use super::cors::CorsConfig;
use super::database::DatabaseConfig;
use super::logging::LoggingConfig;
use super::providers::{CompletionConfig, EmbeddingConfig, IngestConfig};
use super::server::ServerConfig;

/// Root configuration for the gateway
///
/// One section per concern. All sections have defaults suitable for local
/// development; production deployments override via `rgw.toml` or `RGW_`
/// environment variables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server binding
    #[serde(default)]
    pub server: ServerConfig,

    /// Identity resolution
    #[serde(default)]
    pub auth: AuthConfig,

    /// Response cache
    #[serde(default)]
    pub cache: CacheConfig,

    /// Postgres/pgvector store
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Embedding provider
    #[serde(default)]
    pub embedding: EmbeddingConfig,

    /// Completion provider
    #[serde(default)]
    pub completion: CompletionConfig,

    /// Ingestion tunables
    #[serde(default)]
    pub ingest: IngestConfig,

    /// CORS origin allowlist
    #[serde(default)]
    pub cors: CorsConfig,

    /// Logging
    #[serde(default)]
    pub logging: LoggingConfig,
}
