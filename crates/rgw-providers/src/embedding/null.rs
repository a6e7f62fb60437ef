//! Null embedding provider
//!
//! Deterministic, hash-based embeddings with no external dependencies.
//! The same text always embeds to the same vector, and distinct texts
//! diverge, which is all the test suites need.

use async_trait::async_trait;

use rgw_domain::constants::EMBEDDING_DIMENSIONS;
use rgw_domain::error::Result;
use rgw_domain::ports::providers::EmbeddingProvider;
use rgw_domain::value_objects::Embedding;

/// Null embedding provider for testing
#[derive(Debug, Clone, Default)]
pub struct NullEmbeddingProvider;

impl NullEmbeddingProvider {
    /// Create a new null embedding provider
    pub fn new() -> Self {
        Self
    }

    fn embed_one(text: &str) -> Embedding {
        let hash = text.bytes().fold(0u32, |acc, b| {
            acc.wrapping_mul(31).wrapping_add(u32::from(b))
        });
        // A per-text frequency decorrelates the vectors of distinct texts.
        let seed = (hash % 10_000) as f32 + 1.0;

        let vector = (0..EMBEDDING_DIMENSIONS)
            .map(|i| (seed * (i as f32 + 1.0)).sin())
            .collect();

        Embedding::new(vector, "null")
    }
}

#[async_trait]
impl EmbeddingProvider for NullEmbeddingProvider {
    async fn embed(&self, text: &str) -> Result<Embedding> {
        Ok(Self::embed_one(text))
    }

    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        Ok(texts.iter().map(|t| Self::embed_one(t)).collect())
    }

    fn dimensions(&self) -> usize {
        EMBEDDING_DIMENSIONS
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn embeddings_are_deterministic() {
        let provider = NullEmbeddingProvider::new();
        let a = provider.embed("hello").await.unwrap();
        let b = provider.embed("hello").await.unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn embeddings_have_the_store_width() {
        let provider = NullEmbeddingProvider::new();
        let e = provider.embed("hello").await.unwrap();
        assert_eq!(e.dimensions(), EMBEDDING_DIMENSIONS);
    }

    #[tokio::test]
    async fn batch_preserves_order() {
        let provider = NullEmbeddingProvider::new();
        let texts = vec!["one".to_string(), "two".to_string()];
        let batch = provider.embed_batch(&texts).await.unwrap();
        assert_eq!(batch[0], provider.embed("one").await.unwrap());
        assert_eq!(batch[1], provider.embed("two").await.unwrap());
    }
}
