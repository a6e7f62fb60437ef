//! Identity verifiers

/// HTTP identity verifier
pub mod http;
/// Static identity verifier
pub mod static_map;

pub use http::HttpIdentityVerifier;
pub use static_map::StaticIdentityVerifier;
