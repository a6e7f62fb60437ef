//! Documents, chunks, and embeddings

use crate::value_objects::identity::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Vector representation of a piece of text
///
/// Fixed-width; the store rejects vectors whose width differs from the
/// configured dimensionality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Embedding {
    /// The vector components
    pub vector: Vec<f32>,
    /// Model that produced the vector
    pub model: String,
}

impl Embedding {
    /// Create an embedding from raw components
    pub fn new(vector: Vec<f32>, model: impl Into<String>) -> Self {
        Self {
            vector,
            model: model.into(),
        }
    }

    /// Vector width
    pub fn dimensions(&self) -> usize {
        self.vector.len()
    }
}

/// An ingested document
///
/// Carries the owning tenant; every chunk of a document carries the same
/// owner, enforced by the storage schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Document identifier
    pub id: Uuid,
    /// Owning tenant
    pub owner: UserId,
    /// Human-readable title
    pub title: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Document {
    /// Create a new document owned by `owner`
    pub fn new(owner: UserId, title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner,
            title: title.into(),
            created_at: Utc::now(),
        }
    }
}

/// One piece of an ingested document, with its embedding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentChunk {
    /// Chunk identifier
    pub id: Uuid,
    /// Parent document
    pub document_id: Uuid,
    /// Owning tenant, always equal to the parent document's owner
    pub owner: UserId,
    /// Position of this chunk within the document, starting at 0
    pub chunk_index: u32,
    /// Free-text content
    pub content: String,
    /// Arbitrary caller-supplied metadata
    pub metadata: serde_json::Value,
    /// Embedding of `content`
    pub embedding: Embedding,
}

impl DocumentChunk {
    /// Create a chunk belonging to `document`
    pub fn new(
        document: &Document,
        chunk_index: u32,
        content: impl Into<String>,
        metadata: serde_json::Value,
        embedding: Embedding,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            document_id: document.id,
            owner: document.owner,
            chunk_index,
            content: content.into(),
            metadata,
            embedding,
        }
    }
}
