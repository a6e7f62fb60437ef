//! Provider construction and state wiring
//!
//! Builds every provider from the loaded configuration, once, and hands
//! the resulting `Arc<dyn Trait>` handles to the services. There are no
//! global client handles: everything a handler touches flows through
//! [`AppState`].

use std::sync::Arc;
use std::time::Duration;

use rgw_application::{IngestService, QueryService, ResponseCache};
use rgw_domain::error::{Error, Result};
use rgw_domain::ports::infrastructure::IdentityVerifier;
use rgw_domain::ports::providers::{CacheProvider, ChunkStore};
use rgw_infrastructure::config::{AppConfig, AuthConfig, CacheBackend};
use rgw_providers::cache::{MokaCacheProvider, NullCacheProvider, RedisCacheProvider};
use rgw_providers::chunk_store::PgvectorChunkStore;
use rgw_providers::completion::HttpCompletionProvider;
use rgw_providers::embedding::HttpEmbeddingProvider;
use rgw_providers::identity::HttpIdentityVerifier;
use tracing::{info, warn};

/// Everything the HTTP surface needs, wired once at startup
pub struct AppState {
    /// Bearer-token verifier
    pub identity: Arc<dyn IdentityVerifier>,
    /// Document ingestion service
    pub ingest: IngestService,
    /// Retrieval-augmented query service
    pub query: QueryService,
    /// Chunk store, for document listing and deletion
    pub store: Arc<dyn ChunkStore>,
    /// Identity-resolution settings the guards consult per request
    pub auth: AuthConfig,
}

/// Build the full application state from configuration
pub async fn build_state(config: &AppConfig) -> Result<AppState> {
    let http_client = reqwest::Client::builder()
        .build()
        .map_err(|e| Error::configuration_with_source("failed to build HTTP client", e))?;

    let identity: Arc<dyn IdentityVerifier> = Arc::new(HttpIdentityVerifier::new(
        config.auth.provider_url.clone(),
        config.auth.provider_api_key.clone(),
        Duration::from_secs(config.auth.timeout_secs),
        http_client.clone(),
    ));

    let cache = build_cache(config).await;
    info!(provider = cache.provider_name(), "cache subsystem ready");

    let store = PgvectorChunkStore::connect(
        &config.database.url,
        config.database.max_connections,
        config.embedding.dimensions,
    )
    .await?;
    store.migrate().await?;
    let store: Arc<dyn ChunkStore> = Arc::new(store);

    let embeddings = Arc::new(HttpEmbeddingProvider::new(
        config.embedding.base_url.clone(),
        config.embedding.api_key.clone(),
        config.embedding.model.clone(),
        config.embedding.dimensions,
        Duration::from_secs(config.embedding.timeout_secs),
        http_client.clone(),
    ));
    let completions = Arc::new(HttpCompletionProvider::new(
        config.completion.base_url.clone(),
        config.completion.api_key.clone(),
        config.completion.model.clone(),
        Duration::from_secs(config.completion.timeout_secs),
        http_client,
    ));

    let response_cache = ResponseCache::new(
        cache,
        config.cache.namespace.clone(),
        Duration::from_secs(config.cache.ttl_secs),
    );

    let ingest = IngestService::new(
        embeddings.clone(),
        store.clone(),
        config.ingest.max_chunk_chars,
    );
    let query = QueryService::new(response_cache, embeddings, store.clone(), completions);

    Ok(AppState {
        identity,
        ingest,
        query,
        store,
        auth: config.auth.clone(),
    })
}

/// Build the cache provider, degrading rather than failing
///
/// A Redis backend that cannot be reached at startup disables the cache
/// subsystem for the lifetime of the process; it is not retried.
async fn build_cache(config: &AppConfig) -> Arc<dyn CacheProvider> {
    if !config.cache.enabled {
        return Arc::new(NullCacheProvider::new());
    }
    match config.cache.backend {
        CacheBackend::Memory => Arc::new(MokaCacheProvider::new()),
        CacheBackend::Redis => {
            // redis_url presence is enforced by config validation
            let url = config.cache.redis_url.as_deref().unwrap_or_default();
            match RedisCacheProvider::connect(url).await {
                Ok(provider) => Arc::new(provider),
                Err(e) => {
                    warn!(error = %e, "Redis unreachable, cache disabled for this process");
                    Arc::new(NullCacheProvider::new())
                }
            }
        }
    }
}
