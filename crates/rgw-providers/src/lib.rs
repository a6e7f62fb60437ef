//! Provider implementations for the RAG gateway
//!
//! Concrete adapters for the domain ports. Each family ships a production
//! implementation plus a null/in-memory one that doubles as the test fake:
//!
//! | Port | Production | Fake |
//! |------|------------|------|
//! | `CacheProvider` | Redis, Moka | Null |
//! | `ChunkStore` | Postgres + pgvector | InMemory |
//! | `EmbeddingProvider` | HTTP (OpenAI-compatible) | Null |
//! | `CompletionProvider` | HTTP (OpenAI-compatible) | Null |
//! | `IdentityVerifier` | HTTP | Static |
//!
//! Providers receive their HTTP clients and pools by constructor injection
//! and are wired into `Arc<dyn Trait>` handles at startup.

/// Cache backend providers
pub mod cache;
/// Chunk store providers
pub mod chunk_store;
/// Completion providers
pub mod completion;
/// Embedding providers
pub mod embedding;
/// Identity verifiers
pub mod identity;
