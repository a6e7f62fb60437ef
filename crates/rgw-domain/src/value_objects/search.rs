//! Scoped retrieval request and result types
//!
//! A [`SimilarityQuery`] is constructed per request and never persisted.
//! Scoping is part of the query itself: when `owner` is set, only records
//! with that owner are eligible, and the store enforces the same predicate
//! a second time at the row level.

use crate::constants::{EMBEDDING_DIMENSIONS, MAX_MATCH_LIMIT};
use crate::error::{Error, Result};
use crate::value_objects::identity::UserId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A similarity search request against the chunk store
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityQuery {
    /// Query embedding, must match the stored vector width
    pub embedding: Vec<f32>,
    /// Minimum similarity (exclusive); matches require `similarity > threshold`
    pub threshold: f32,
    /// Maximum number of results; 0 legitimately returns nothing
    pub limit: usize,
    /// Owner scope; `None` is an unscoped administrative search
    pub owner: Option<UserId>,
}

impl SimilarityQuery {
    /// Build a query scoped to one tenant
    pub fn scoped(owner: UserId, embedding: Vec<f32>, threshold: f32, limit: usize) -> Self {
        Self {
            embedding,
            threshold,
            limit,
            owner: Some(owner),
        }
    }

    /// Build an unscoped administrative query
    pub fn unscoped(embedding: Vec<f32>, threshold: f32, limit: usize) -> Self {
        Self {
            embedding,
            threshold,
            limit,
            owner: None,
        }
    }

    /// Validate the query against the retrieval contract
    ///
    /// Rejects dimension mismatches before any store I/O and clamps
    /// nothing: a bad limit is the caller's error, not ours to repair.
    pub fn validate(&self) -> Result<()> {
        if self.embedding.len() != EMBEDDING_DIMENSIONS {
            return Err(Error::invalid_argument(format!(
                "query embedding has {} dimensions, store expects {}",
                self.embedding.len(),
                EMBEDDING_DIMENSIONS
            )));
        }
        if self.limit > MAX_MATCH_LIMIT {
            return Err(Error::invalid_argument(format!(
                "limit {} exceeds maximum {}",
                self.limit, MAX_MATCH_LIMIT
            )));
        }
        Ok(())
    }
}

/// Value Object: Ranked Retrieval Match
///
/// One result of a similarity search, ranked by descending cosine
/// similarity. Ties are unordered; scores are continuous floats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChunkMatch {
    /// Identifier of the matched chunk
    pub id: Uuid,
    /// Parent document of the matched chunk
    pub document_id: Uuid,
    /// The matched content
    pub content: String,
    /// Caller-supplied metadata stored with the chunk
    pub metadata: serde_json::Value,
    /// Cosine similarity in [-1, 1], higher is more similar
    pub similarity: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn embedding(len: usize) -> Vec<f32> {
        vec![0.1; len]
    }

    #[test]
    fn validate_accepts_store_width() {
        let q = SimilarityQuery::unscoped(embedding(EMBEDDING_DIMENSIONS), 0.5, 5);
        assert!(q.validate().is_ok());
    }

    #[test]
    fn validate_rejects_wrong_width() {
        let q = SimilarityQuery::unscoped(embedding(128), 0.5, 5);
        assert!(matches!(
            q.validate().unwrap_err(),
            Error::InvalidArgument { .. }
        ));
    }

    #[test]
    fn validate_rejects_oversized_limit() {
        let q = SimilarityQuery::unscoped(embedding(EMBEDDING_DIMENSIONS), 0.5, MAX_MATCH_LIMIT + 1);
        assert!(q.validate().is_err());
    }

    #[test]
    fn zero_limit_is_valid() {
        let q = SimilarityQuery::unscoped(embedding(EMBEDDING_DIMENSIONS), 0.5, 0);
        assert!(q.validate().is_ok());
    }
}
