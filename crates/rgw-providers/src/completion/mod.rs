//! Completion providers

/// HTTP completion provider (OpenAI-compatible)
pub mod http;
/// Null completion provider
pub mod null;

pub use http::HttpCompletionProvider;
pub use null::NullCompletionProvider;
