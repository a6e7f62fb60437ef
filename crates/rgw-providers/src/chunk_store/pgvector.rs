//! Postgres + pgvector chunk store
//!
//! Persists documents and chunks in Postgres and answers similarity
//! queries through the `match_document_chunks` SQL function (see
//! `migrations/`). Vectors are bound as their text form and cast with
//! `::vector`.
//!
//! ## Row-level security
//!
//! Every transaction sets the caller identity (`rgw.user_id`) or the
//! explicit unscoped marker (`rgw.unscoped`) as a transaction-local GUC.
//! The RLS policies on `documents` and `document_chunks` key on those
//! settings, so the owner predicate inside the SQL function is enforced a
//! second time by the storage layer: a malformed or bypassed predicate
//! cannot leak cross-owner rows.

use async_trait::async_trait;
use rgw_domain::error::{Error, Result};
use rgw_domain::ports::providers::ChunkStore;
use rgw_domain::value_objects::{ChunkMatch, Document, DocumentChunk, SimilarityQuery, UserId};
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::{Postgres, Transaction};
use tracing::debug;
use uuid::Uuid;

/// Postgres chunk store
pub struct PgvectorChunkStore {
    pool: PgPool,
    dimensions: usize,
}

#[derive(sqlx::FromRow)]
struct MatchRow {
    id: Uuid,
    document_id: Uuid,
    content: String,
    metadata: serde_json::Value,
    similarity: f64,
}

#[derive(sqlx::FromRow)]
struct DocumentRow {
    id: Uuid,
    owner_id: Uuid,
    title: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl PgvectorChunkStore {
    /// Create a store over an existing pool
    pub fn new(pool: PgPool, dimensions: usize) -> Self {
        Self { pool, dimensions }
    }

    /// Connect to Postgres and build a store
    pub async fn connect(url: &str, max_connections: u32, dimensions: usize) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await
            .map_err(|e| Error::database_with_source("failed to connect to Postgres", e))?;
        Ok(Self::new(pool, dimensions))
    }

    /// Apply pending migrations
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("../../migrations")
            .run(&self.pool)
            .await
            .map_err(|e| Error::database_with_source("migration failed", e))?;
        Ok(())
    }

    /// Convert an f32 slice to the text form expected by pgvector
    fn vec_to_pgvector(vector: &[f32]) -> String {
        let values: Vec<String> = vector.iter().map(|v| v.to_string()).collect();
        format!("[{}]", values.join(","))
    }

    /// Bind the caller identity into the transaction for RLS
    async fn set_user_context(
        tx: &mut Transaction<'_, Postgres>,
        owner: UserId,
    ) -> Result<()> {
        sqlx::query("SELECT set_config('rgw.user_id', $1, true)")
            .bind(owner.to_string())
            .execute(&mut **tx)
            .await
            .map_err(|e| Error::database_with_source("failed to set RLS user context", e))?;
        Ok(())
    }

    /// Mark the transaction as an explicit unscoped administrative read
    async fn set_unscoped_context(tx: &mut Transaction<'_, Postgres>) -> Result<()> {
        sqlx::query("SELECT set_config('rgw.unscoped', 'on', true)")
            .execute(&mut **tx)
            .await
            .map_err(|e| Error::database_with_source("failed to set RLS unscoped context", e))?;
        Ok(())
    }

    fn check_dimensions(&self, width: usize) -> Result<()> {
        if width != self.dimensions {
            return Err(Error::invalid_argument(format!(
                "embedding has {width} dimensions, store expects {}",
                self.dimensions
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl ChunkStore for PgvectorChunkStore {
    async fn insert(&self, document: &Document, chunks: &[DocumentChunk]) -> Result<()> {
        for chunk in chunks {
            self.check_dimensions(chunk.embedding.dimensions())?;
        }

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| Error::database_with_source("failed to begin transaction", e))?;
        Self::set_user_context(&mut tx, document.owner).await?;

        sqlx::query(
            "INSERT INTO documents (id, owner_id, title, created_at) VALUES ($1, $2, $3, $4)",
        )
        .bind(document.id)
        .bind(document.owner.as_uuid())
        .bind(&document.title)
        .bind(document.created_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| Error::database_with_source("failed to insert document", e))?;

        for chunk in chunks {
            sqlx::query(
                "INSERT INTO document_chunks \
                     (id, document_id, owner_id, chunk_index, content, metadata, embedding) \
                 VALUES ($1, $2, $3, $4, $5, $6, $7::vector)",
            )
            .bind(chunk.id)
            .bind(chunk.document_id)
            .bind(chunk.owner.as_uuid())
            .bind(chunk.chunk_index as i32)
            .bind(&chunk.content)
            .bind(&chunk.metadata)
            .bind(Self::vec_to_pgvector(&chunk.embedding.vector))
            .execute(&mut *tx)
            .await
            .map_err(|e| Error::database_with_source("failed to insert chunk", e))?;
        }

        tx.commit()
            .await
            .map_err(|e| Error::database_with_source("failed to commit insert", e))?;
        Ok(())
    }

    async fn search(&self, query: &SimilarityQuery) -> Result<Vec<ChunkMatch>> {
        query.validate()?;
        self.check_dimensions(query.embedding.len())?;
        if query.limit == 0 {
            return Ok(Vec::new());
        }

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| Error::database_with_source("failed to begin transaction", e))?;
        match query.owner {
            Some(owner) => Self::set_user_context(&mut tx, owner).await?,
            None => Self::set_unscoped_context(&mut tx).await?,
        }

        let rows: Vec<MatchRow> = sqlx::query_as(
            "SELECT id, document_id, content, metadata, similarity \
             FROM match_document_chunks($1::vector, $2, $3, $4)",
        )
        .bind(Self::vec_to_pgvector(&query.embedding))
        .bind(f64::from(query.threshold))
        .bind(query.limit as i32)
        .bind(query.owner.map(|o| o.as_uuid()))
        .fetch_all(&mut *tx)
        .await
        .map_err(|e| Error::database_with_source("similarity search failed", e))?;

        tx.commit()
            .await
            .map_err(|e| Error::database_with_source("failed to commit search", e))?;

        debug!(matches = rows.len(), scoped = query.owner.is_some(), "similarity search completed");
        Ok(rows
            .into_iter()
            .map(|row| ChunkMatch {
                id: row.id,
                document_id: row.document_id,
                content: row.content,
                metadata: row.metadata,
                similarity: row.similarity as f32,
            })
            .collect())
    }

    async fn list_documents(&self, owner: UserId) -> Result<Vec<Document>> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| Error::database_with_source("failed to begin transaction", e))?;
        Self::set_user_context(&mut tx, owner).await?;

        let rows: Vec<DocumentRow> = sqlx::query_as(
            "SELECT id, owner_id, title, created_at FROM documents \
             WHERE owner_id = $1 ORDER BY created_at DESC",
        )
        .bind(owner.as_uuid())
        .fetch_all(&mut *tx)
        .await
        .map_err(|e| Error::database_with_source("failed to list documents", e))?;

        tx.commit()
            .await
            .map_err(|e| Error::database_with_source("failed to commit list", e))?;

        Ok(rows
            .into_iter()
            .map(|row| Document {
                id: row.id,
                owner: UserId::from(row.owner_id),
                title: row.title,
                created_at: row.created_at,
            })
            .collect())
    }

    async fn delete_document(&self, owner: UserId, id: Uuid) -> Result<()> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| Error::database_with_source("failed to begin transaction", e))?;
        Self::set_user_context(&mut tx, owner).await?;

        // Chunks go with the document via ON DELETE CASCADE.
        let result = sqlx::query("DELETE FROM documents WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner.as_uuid())
            .execute(&mut *tx)
            .await
            .map_err(|e| Error::database_with_source("failed to delete document", e))?;

        tx.commit()
            .await
            .map_err(|e| Error::database_with_source("failed to commit delete", e))?;

        if result.rows_affected() == 0 {
            return Err(Error::not_found(format!("document {id}")));
        }
        Ok(())
    }

    fn store_name(&self) -> &str {
        "pgvector"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vector_text_form_is_bracketed_and_comma_separated() {
        let text = PgvectorChunkStore::vec_to_pgvector(&[0.25, -1.0, 2.0]);
        assert_eq!(text, "[0.25,-1,2]");
    }
}
