//! Application layer for the RAG gateway
//!
//! Use-case services orchestrating the domain ports: document ingestion
//! (chunk, embed, store) and retrieval-augmented query answering (cache,
//! embed, scoped search, synthesize). All collaborators are injected as
//! `Arc<dyn Trait>` at construction; this crate performs no I/O of its own.

/// Paragraph-boundary text chunking
pub mod chunking;
/// Best-effort, owner-partitioned response cache
pub mod response_cache;
/// Use-case services
pub mod use_cases;

pub use response_cache::ResponseCache;
pub use use_cases::{IngestReceipt, IngestService, QueryAnswer, QueryService};
