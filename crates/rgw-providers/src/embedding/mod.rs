//! Embedding providers

/// HTTP embedding provider (OpenAI-compatible)
pub mod http;
/// Null embedding provider
pub mod null;

pub use http::HttpEmbeddingProvider;
pub use null::NullEmbeddingProvider;
