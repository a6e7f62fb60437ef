//! Chunk store providers

/// In-memory chunk store
pub mod in_memory;
/// Postgres + pgvector chunk store
pub mod pgvector;

pub use in_memory::InMemoryChunkStore;
pub use pgvector::PgvectorChunkStore;
