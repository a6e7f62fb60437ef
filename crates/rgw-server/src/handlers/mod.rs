//! Route handlers

/// Document ingestion, listing, and deletion
pub mod documents;
/// Health probe
pub mod health;
/// Caller identity echo
pub mod me;
/// Retrieval-augmented query
pub mod query;
