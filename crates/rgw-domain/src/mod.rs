//! Domain layer for the RAG gateway
//!
//! Core business contracts and types shared by every other crate in the
//! workspace. This layer is pure: no I/O, no framework types, only value
//! objects, the error taxonomy, and the port traits that adapters implement.

/// Domain layer constants
pub mod constants;
/// Error handling types
pub mod error;
/// Port definitions (provider and infrastructure contracts)
pub mod ports;
/// Immutable domain value objects
pub mod value_objects;

pub use error::{Error, Result};
