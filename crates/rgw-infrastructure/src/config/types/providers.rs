//! Embedding, completion, and ingestion configuration types

use rgw_domain::constants::{CHUNK_MAX_CHARS, EMBEDDING_DIMENSIONS};
use serde::{Deserialize, Serialize};

/// Embedding provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddingConfig {
    /// Base URL of an OpenAI-compatible embeddings API
    pub base_url: String,

    /// API key, when the endpoint requires one
    pub api_key: Option<String>,

    /// Model name
    pub model: String,

    /// Expected vector width; must equal the store's vector width
    pub dimensions: usize,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434/v1".to_string(),
            api_key: None,
            model: "all-minilm".to_string(),
            dimensions: EMBEDDING_DIMENSIONS,
            timeout_secs: 30,
        }
    }
}

/// Completion provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionConfig {
    /// Base URL of an OpenAI-compatible chat completions API
    pub base_url: String,

    /// API key, when the endpoint requires one
    pub api_key: Option<String>,

    /// Model name
    pub model: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434/v1".to_string(),
            api_key: None,
            model: "llama3.2".to_string(),
            timeout_secs: 60,
        }
    }
}

/// Ingestion tunables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestConfig {
    /// Maximum chunk size in characters
    pub max_chunk_chars: usize,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            max_chunk_chars: CHUNK_MAX_CHARS,
        }
    }
}
