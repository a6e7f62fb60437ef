//! HTTP embedding provider
//!
//! Implements the `EmbeddingProvider` port against an OpenAI-compatible
//! `/embeddings` endpoint. Receives its HTTP client via constructor
//! injection; one request per call, no retries.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use rgw_domain::error::{Error, Result};
use rgw_domain::ports::providers::EmbeddingProvider;
use rgw_domain::value_objects::Embedding;

/// HTTP embedding provider
pub struct HttpEmbeddingProvider {
    base_url: String,
    api_key: Option<String>,
    model: String,
    dimensions: usize,
    timeout: Duration,
    http_client: Client,
}

impl HttpEmbeddingProvider {
    /// Create a new HTTP embedding provider
    ///
    /// # Arguments
    /// * `base_url` - API base URL (e.g., "https://api.openai.com/v1")
    /// * `api_key` - Bearer key, when the endpoint requires one
    /// * `model` - Model name
    /// * `dimensions` - Expected vector width; responses with any other
    ///   width are rejected
    /// * `timeout` - Request timeout duration
    /// * `http_client` - Reqwest HTTP client for making API requests
    pub fn new(
        base_url: String,
        api_key: Option<String>,
        model: String,
        dimensions: usize,
        timeout: Duration,
        http_client: Client,
    ) -> Self {
        Self {
            base_url,
            api_key,
            model,
            dimensions,
            timeout,
            http_client,
        }
    }

    /// Fetch embeddings for a batch of texts
    async fn fetch_embeddings(&self, texts: &[String]) -> Result<serde_json::Value> {
        let payload = serde_json::json!({
            "input": texts,
            "model": self.model,
            "encoding_format": "float"
        });

        let mut request = self
            .http_client
            .post(format!(
                "{}/embeddings",
                self.base_url.trim_end_matches('/')
            ))
            .timeout(self.timeout)
            .json(&payload);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                Error::embedding(format!("request timed out after {:?}", self.timeout))
            } else {
                Error::network_with_source("embedding request failed", e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::embedding(format!(
                "embedding endpoint returned {status}: {body}"
            )));
        }

        response
            .json()
            .await
            .map_err(|e| Error::network_with_source("embedding response was not JSON", e))
    }

    /// Parse one embedding vector out of the response data
    fn parse_embedding(&self, index: usize, item: &serde_json::Value) -> Result<Embedding> {
        let vector: Vec<f32> = item["embedding"]
            .as_array()
            .ok_or_else(|| Error::embedding(format!("missing embedding for input {index}")))?
            .iter()
            .map(|v| v.as_f64().unwrap_or(0.0) as f32)
            .collect();

        if vector.len() != self.dimensions {
            return Err(Error::embedding(format!(
                "model returned {} dimensions, expected {}",
                vector.len(),
                self.dimensions
            )));
        }

        Ok(Embedding::new(vector, self.model.clone()))
    }
}

#[async_trait]
impl EmbeddingProvider for HttpEmbeddingProvider {
    async fn embed(&self, text: &str) -> Result<Embedding> {
        let mut embeddings = self.embed_batch(&[text.to_string()]).await?;
        embeddings
            .pop()
            .ok_or_else(|| Error::embedding("provider returned no embedding"))
    }

    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Embedding>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let data = self.fetch_embeddings(texts).await?;
        let items = data["data"]
            .as_array()
            .ok_or_else(|| Error::embedding("response has no data array"))?;

        items
            .iter()
            .enumerate()
            .map(|(index, item)| self.parse_embedding(index, item))
            .collect()
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn provider_name(&self) -> &str {
        "http"
    }
}
