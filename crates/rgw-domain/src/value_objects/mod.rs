//! Domain Value Objects
//!
//! Immutable value objects that represent concepts in the domain
//! without identity. Value objects are defined by their attributes
//! and can be compared for equality.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`UserId`] | Opaque verified identifier of a tenant |
//! | [`UserProfile`] | Identity-provider view of an authenticated user |
//! | [`CacheKey`] | Deterministic content-addressed cache key |
//! | [`Embedding`] | Vector representation of text for similarity search |
//! | [`Document`] / [`DocumentChunk`] | Ingested content and its pieces |
//! | [`SimilarityQuery`] / [`ChunkMatch`] | Scoped retrieval request and result |

/// Content-addressed cache key derivation
pub mod cache_key;
/// Documents, chunks, and embeddings
pub mod document;
/// User identity value objects
pub mod identity;
/// Scoped retrieval request and result types
pub mod search;

// Re-export commonly used value objects
pub use cache_key::CacheKey;
pub use document::{Document, DocumentChunk, Embedding};
pub use identity::{UserId, UserProfile};
pub use search::{ChunkMatch, SimilarityQuery};
