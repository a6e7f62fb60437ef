//! Chunk Store Port
//!
//! Contract for document/chunk persistence and owner-scoped similarity
//! search. Similarity is cosine: `1 - cosine_distance`, in [-1, 1],
//! higher is more similar.
//!
//! ## Isolation contract
//!
//! A record is eligible for a scoped search only when its owner equals the
//! query's owner. Implementations backed by a real store enforce the owner
//! predicate twice: once in the query itself and once at the storage layer
//! (row-level security keyed on the caller identity), so a malformed or
//! bypassed query predicate cannot leak cross-owner data.

use crate::error::Result;
use crate::value_objects::{ChunkMatch, Document, DocumentChunk, SimilarityQuery, UserId};
use async_trait::async_trait;
use uuid::Uuid;

/// Chunk store interface
///
/// # Implementations
///
/// - **Pgvector**: Postgres with the pgvector extension and RLS
/// - **InMemory**: same contract over process memory, for tests
#[async_trait]
pub trait ChunkStore: Send + Sync {
    /// Persist a document and all of its chunks
    ///
    /// Every chunk carries the document's owner; stores enforce the
    /// equality structurally.
    async fn insert(&self, document: &Document, chunks: &[DocumentChunk]) -> Result<()>;

    /// Owner-scoped similarity search
    ///
    /// Eligible records are filtered to `similarity > threshold`, ordered
    /// by descending similarity, truncated to `limit`. A `limit` of 0 and
    /// an owner with no records both return an empty list, not an error.
    async fn search(&self, query: &SimilarityQuery) -> Result<Vec<ChunkMatch>>;

    /// List documents belonging to `owner`
    async fn list_documents(&self, owner: UserId) -> Result<Vec<Document>>;

    /// Delete one of `owner`'s documents and its chunks
    ///
    /// Returns [`crate::Error::NotFound`] when the id does not exist for
    /// this owner; another tenant's document is indistinguishable from a
    /// missing one.
    async fn delete_document(&self, owner: UserId, id: Uuid) -> Result<()>;

    /// The name/identifier of this store implementation
    fn store_name(&self) -> &str;
}
