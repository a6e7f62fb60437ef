//! Infrastructure layer for the RAG gateway
//!
//! Cross-cutting concerns with no domain logic: configuration loading and
//! the logging bootstrap. Provider construction from the loaded
//! configuration happens in the server crate, where the adapters live.

/// Configuration loading and types
pub mod config;
/// Structured logging with tracing
pub mod logging;

pub use config::{AppConfig, ConfigLoader};
