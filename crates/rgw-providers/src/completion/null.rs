//! Null completion provider
//!
//! Echoes the user prompt back, prefixed so tests can assert the prompt
//! actually reached the provider.

use async_trait::async_trait;

use rgw_domain::error::Result;
use rgw_domain::ports::providers::CompletionProvider;

/// Null completion provider for testing
#[derive(Debug, Clone, Default)]
pub struct NullCompletionProvider;

impl NullCompletionProvider {
    /// Create a new null completion provider
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CompletionProvider for NullCompletionProvider {
    async fn complete(&self, _system: &str, user: &str) -> Result<String> {
        Ok(format!("echo: {user}"))
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}
