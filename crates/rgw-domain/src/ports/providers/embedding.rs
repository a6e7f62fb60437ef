//! Embedding Provider Port

use crate::error::Result;
use crate::value_objects::Embedding;
use async_trait::async_trait;

/// Embedding provider interface
///
/// # Implementations
///
/// - **Http**: OpenAI-compatible embeddings endpoint
/// - **Null**: deterministic hash-based vectors for tests
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Embed a single text
    async fn embed(&self, text: &str) -> Result<Embedding>;

    /// Embed a batch of texts, preserving order
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>>;

    /// Vector width this provider produces
    ///
    /// Must equal the chunk store's configured width; the mismatch is a
    /// startup configuration error, not a per-request one.
    fn dimensions(&self) -> usize;

    /// The name/identifier of this provider implementation
    fn provider_name(&self) -> &str;
}
