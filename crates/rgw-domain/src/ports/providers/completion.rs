//! Completion Provider Port

use crate::error::Result;
use async_trait::async_trait;

/// Completion provider interface
///
/// Synthesizes an answer from a system instruction and a user prompt that
/// already contains the retrieved context. One call per request, no
/// retries, no streaming.
///
/// # Implementations
///
/// - **Http**: OpenAI-compatible chat completions endpoint
/// - **Null**: echoes the prompt, for tests
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Produce a completion for `user` under the `system` instruction
    async fn complete(&self, system: &str, user: &str) -> Result<String>;

    /// The name/identifier of this provider implementation
    fn provider_name(&self) -> &str;
}
