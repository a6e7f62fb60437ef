//! HTTP completion provider
//!
//! Implements the `CompletionProvider` port against an OpenAI-compatible
//! `/chat/completions` endpoint. One request per call, no retries, no
//! streaming.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use rgw_domain::error::{Error, Result};
use rgw_domain::ports::providers::CompletionProvider;

/// HTTP completion provider
pub struct HttpCompletionProvider {
    base_url: String,
    api_key: Option<String>,
    model: String,
    timeout: Duration,
    http_client: Client,
}

impl HttpCompletionProvider {
    /// Create a new HTTP completion provider
    ///
    /// # Arguments
    /// * `base_url` - API base URL (e.g., "https://api.openai.com/v1")
    /// * `api_key` - Bearer key, when the endpoint requires one
    /// * `model` - Model name
    /// * `timeout` - Request timeout duration
    /// * `http_client` - Reqwest HTTP client for making API requests
    pub fn new(
        base_url: String,
        api_key: Option<String>,
        model: String,
        timeout: Duration,
        http_client: Client,
    ) -> Self {
        Self {
            base_url,
            api_key,
            model,
            timeout,
            http_client,
        }
    }
}

#[async_trait]
impl CompletionProvider for HttpCompletionProvider {
    async fn complete(&self, system: &str, user: &str) -> Result<String> {
        let payload = serde_json::json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": system },
                { "role": "user", "content": user }
            ],
            "stream": false
        });

        let mut request = self
            .http_client
            .post(format!(
                "{}/chat/completions",
                self.base_url.trim_end_matches('/')
            ))
            .timeout(self.timeout)
            .json(&payload);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                Error::completion(format!("request timed out after {:?}", self.timeout))
            } else {
                Error::network_with_source("completion request failed", e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::completion(format!(
                "completion endpoint returned {status}: {body}"
            )));
        }

        let data: serde_json::Value = response
            .json()
            .await
            .map_err(|e| Error::network_with_source("completion response was not JSON", e))?;

        data["choices"][0]["message"]["content"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| Error::completion("response has no message content"))
    }

    fn provider_name(&self) -> &str {
        "http"
    }
}
