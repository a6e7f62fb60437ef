//! In-memory chunk store
//!
//! Stores documents and chunks in process memory and answers similarity
//! queries with the same owner predicate and cosine ranking as the
//! Postgres store. Data is not persisted; intended for tests and local
//! development without a database.

use async_trait::async_trait;
use rgw_domain::error::{Error, Result};
use rgw_domain::ports::providers::ChunkStore;
use rgw_domain::value_objects::{ChunkMatch, Document, DocumentChunk, SimilarityQuery, UserId};
use std::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
struct State {
    documents: Vec<Document>,
    chunks: Vec<DocumentChunk>,
}

/// In-memory chunk store
#[derive(Default)]
pub struct InMemoryChunkStore {
    state: RwLock<State>,
}

impl InMemoryChunkStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

/// Cosine similarity between two vectors, 0.0 when either norm is zero
fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

#[async_trait]
impl ChunkStore for InMemoryChunkStore {
    async fn insert(&self, document: &Document, chunks: &[DocumentChunk]) -> Result<()> {
        let mut state = self.state.write().expect("store lock poisoned");
        if state.documents.iter().any(|d| d.id == document.id) {
            return Err(Error::database(format!(
                "document {} already exists",
                document.id
            )));
        }
        state.documents.push(document.clone());
        state.chunks.extend_from_slice(chunks);
        Ok(())
    }

    async fn search(&self, query: &SimilarityQuery) -> Result<Vec<ChunkMatch>> {
        query.validate()?;
        if query.limit == 0 {
            return Ok(Vec::new());
        }

        let state = self.state.read().expect("store lock poisoned");
        let mut matches: Vec<ChunkMatch> = state
            .chunks
            .iter()
            .filter(|chunk| query.owner.is_none_or(|owner| chunk.owner == owner))
            .filter_map(|chunk| {
                let similarity = cosine_similarity(&query.embedding, &chunk.embedding.vector);
                (similarity > query.threshold).then(|| ChunkMatch {
                    id: chunk.id,
                    document_id: chunk.document_id,
                    content: chunk.content.clone(),
                    metadata: chunk.metadata.clone(),
                    similarity,
                })
            })
            .collect();

        matches.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
        matches.truncate(query.limit);
        Ok(matches)
    }

    async fn list_documents(&self, owner: UserId) -> Result<Vec<Document>> {
        let state = self.state.read().expect("store lock poisoned");
        let mut documents: Vec<Document> = state
            .documents
            .iter()
            .filter(|d| d.owner == owner)
            .cloned()
            .collect();
        documents.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(documents)
    }

    async fn delete_document(&self, owner: UserId, id: Uuid) -> Result<()> {
        let mut state = self.state.write().expect("store lock poisoned");
        let before = state.documents.len();
        state.documents.retain(|d| !(d.id == id && d.owner == owner));
        if state.documents.len() == before {
            return Err(Error::not_found(format!("document {id}")));
        }
        state.chunks.retain(|c| c.document_id != id);
        Ok(())
    }

    fn store_name(&self) -> &str {
        "in_memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rgw_domain::constants::EMBEDDING_DIMENSIONS;
    use rgw_domain::value_objects::Embedding;

    /// A unit vector with full weight on one axis
    fn axis(index: usize) -> Vec<f32> {
        let mut v = vec![0.0; EMBEDDING_DIMENSIONS];
        v[index] = 1.0;
        v
    }

    /// A vector close to `axis(index)` but not identical
    fn near_axis(index: usize) -> Vec<f32> {
        let mut v = axis(index);
        v[(index + 1) % EMBEDDING_DIMENSIONS] = 0.3;
        v
    }

    async fn store_with_chunk(owner: UserId, vector: Vec<f32>, content: &str) -> InMemoryChunkStore {
        let store = InMemoryChunkStore::new();
        insert_chunk(&store, owner, vector, content).await;
        store
    }

    async fn insert_chunk(
        store: &InMemoryChunkStore,
        owner: UserId,
        vector: Vec<f32>,
        content: &str,
    ) {
        let document = Document::new(owner, content);
        let chunk = DocumentChunk::new(
            &document,
            0,
            content,
            serde_json::Value::Null,
            Embedding::new(vector, "test"),
        );
        store.insert(&document, &[chunk]).await.unwrap();
    }

    #[test]
    fn cosine_of_identical_vectors_is_one() {
        let v = near_axis(0);
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn cosine_of_orthogonal_vectors_is_zero() {
        assert_eq!(cosine_similarity(&axis(0), &axis(1)), 0.0);
    }

    #[test]
    fn cosine_of_zero_vector_is_zero() {
        let zero = vec![0.0; EMBEDDING_DIMENSIONS];
        assert_eq!(cosine_similarity(&zero, &axis(0)), 0.0);
    }

    #[tokio::test]
    async fn scoped_search_never_returns_other_owners_chunks() {
        let alice = UserId::from(Uuid::new_v4());
        let bob = UserId::from(Uuid::new_v4());
        let store = InMemoryChunkStore::new();
        // Bob's chunk matches the query exactly; Alice's only approximately.
        insert_chunk(&store, bob, axis(0), "bob exact").await;
        insert_chunk(&store, alice, near_axis(0), "alice near").await;

        let query = SimilarityQuery::scoped(alice, axis(0), 0.1, 10);
        let matches = store.search(&query).await.unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].content, "alice near");
    }

    #[tokio::test]
    async fn owner_with_no_records_gets_empty_list() {
        let alice = UserId::from(Uuid::new_v4());
        let bob = UserId::from(Uuid::new_v4());
        let store = store_with_chunk(alice, axis(0), "alice only").await;

        let query = SimilarityQuery::scoped(bob, axis(0), 0.1, 10);
        assert!(store.search(&query).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unscoped_search_sees_all_owners() {
        let alice = UserId::from(Uuid::new_v4());
        let bob = UserId::from(Uuid::new_v4());
        let store = InMemoryChunkStore::new();
        insert_chunk(&store, alice, axis(0), "alice").await;
        insert_chunk(&store, bob, near_axis(0), "bob").await;

        let query = SimilarityQuery::unscoped(axis(0), 0.1, 10);
        assert_eq!(store.search(&query).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn threshold_one_excludes_non_identical_embeddings() {
        let alice = UserId::from(Uuid::new_v4());
        let store = store_with_chunk(alice, near_axis(0), "near").await;

        let query = SimilarityQuery::scoped(alice, axis(0), 1.0, 10);
        assert!(store.search(&query).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn limit_zero_returns_empty() {
        let alice = UserId::from(Uuid::new_v4());
        let store = store_with_chunk(alice, axis(0), "chunk").await;

        let query = SimilarityQuery::scoped(alice, axis(0), 0.1, 0);
        assert!(store.search(&query).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn results_rank_by_descending_similarity_and_truncate() {
        let alice = UserId::from(Uuid::new_v4());
        let store = InMemoryChunkStore::new();
        insert_chunk(&store, alice, axis(0), "exact").await;
        insert_chunk(&store, alice, near_axis(0), "near").await;
        insert_chunk(&store, alice, axis(1), "orthogonal").await;

        let query = SimilarityQuery::scoped(alice, axis(0), 0.1, 2);
        let matches = store.search(&query).await.unwrap();
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].content, "exact");
        assert_eq!(matches[1].content, "near");
        assert!(matches[0].similarity > matches[1].similarity);
    }

    #[tokio::test]
    async fn mismatched_query_width_fails_before_search() {
        let alice = UserId::from(Uuid::new_v4());
        let store = store_with_chunk(alice, axis(0), "chunk").await;

        let query = SimilarityQuery::scoped(alice, vec![1.0; 128], 0.1, 10);
        assert!(matches!(
            store.search(&query).await.unwrap_err(),
            Error::InvalidArgument { .. }
        ));
    }

    #[tokio::test]
    async fn delete_is_scoped_to_owner() {
        let alice = UserId::from(Uuid::new_v4());
        let bob = UserId::from(Uuid::new_v4());
        let store = InMemoryChunkStore::new();
        let document = Document::new(alice, "alice's doc");
        store.insert(&document, &[]).await.unwrap();

        // Bob cannot delete Alice's document; it reads as missing.
        assert!(matches!(
            store.delete_document(bob, document.id).await.unwrap_err(),
            Error::NotFound { .. }
        ));
        store.delete_document(alice, document.id).await.unwrap();
        assert!(store.list_documents(alice).await.unwrap().is_empty());
    }
}
