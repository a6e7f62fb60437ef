//! Document Ingestion Use Case
//!
//! Splits a document into paragraph-bounded chunks, embeds them in one
//! batch call, and persists document and chunks with the owner stamped on
//! every row.

use crate::chunking::chunk_text;
use rgw_domain::error::{Error, Result};
use rgw_domain::ports::providers::{ChunkStore, EmbeddingProvider};
use rgw_domain::value_objects::{Document, DocumentChunk, UserId};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Result of a successful ingest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestReceipt {
    /// Identifier of the stored document
    pub document_id: Uuid,
    /// Number of chunks the document was split into
    pub chunk_count: usize,
}

/// Ingestion service
pub struct IngestService {
    embeddings: Arc<dyn EmbeddingProvider>,
    store: Arc<dyn ChunkStore>,
    max_chunk_chars: usize,
}

impl IngestService {
    /// Create an ingestion service with injected collaborators
    pub fn new(
        embeddings: Arc<dyn EmbeddingProvider>,
        store: Arc<dyn ChunkStore>,
        max_chunk_chars: usize,
    ) -> Self {
        Self {
            embeddings,
            store,
            max_chunk_chars,
        }
    }

    /// Ingest a document on behalf of `owner`
    pub async fn ingest(
        &self,
        owner: UserId,
        title: &str,
        text: &str,
        metadata: serde_json::Value,
    ) -> Result<IngestReceipt> {
        let pieces = chunk_text(text, self.max_chunk_chars);
        if pieces.is_empty() {
            return Err(Error::invalid_argument("document text is empty"));
        }

        let embeddings = self.embeddings.embed_batch(&pieces).await?;
        if embeddings.len() != pieces.len() {
            return Err(Error::embedding(format!(
                "provider returned {} embeddings for {} chunks",
                embeddings.len(),
                pieces.len()
            )));
        }

        let document = Document::new(owner, title);
        let chunks: Vec<DocumentChunk> = pieces
            .into_iter()
            .zip(embeddings)
            .enumerate()
            .map(|(index, (content, embedding))| {
                DocumentChunk::new(&document, index as u32, content, metadata.clone(), embedding)
            })
            .collect();

        self.store.insert(&document, &chunks).await?;
        info!(
            document_id = %document.id,
            owner = %owner,
            chunk_count = chunks.len(),
            "document ingested"
        );

        Ok(IngestReceipt {
            document_id: document.id,
            chunk_count: chunks.len(),
        })
    }
}
