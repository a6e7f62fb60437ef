//! Use-Case Services
//!
//! One service per gateway operation. Services own no state beyond their
//! injected collaborators and perform exactly one pass per request: no
//! retries, no background work.

/// Document ingestion
pub mod ingest_service;
/// Retrieval-augmented query answering
pub mod query_service;

pub use ingest_service::{IngestReceipt, IngestService};
pub use query_service::{QueryAnswer, QueryService};
