//! Content-addressed cache key derivation
//!
//! Keys are the SHA-256 digest of the content, hex-encoded and prefixed
//! with a namespace. Equal `(namespace, content)` pairs always derive the
//! same key; the digest keeps keys fixed-length regardless of content size
//! and makes collisions cryptographically infeasible. Keys are one-way:
//! nothing in the system decodes them back to content.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Value Object: Deterministic Cache Key
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CacheKey(String);

impl CacheKey {
    /// Derive a key from a namespace and the content it addresses
    pub fn derive(namespace: &str, content: &str) -> Self {
        let digest = Sha256::digest(content.as_bytes());
        Self(format!("{namespace}:{}", hex::encode(digest)))
    }

    /// The key in its wire form, as sent to the cache backend
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derivation_is_deterministic() {
        let a = CacheKey::derive("query", "what is rust?");
        let b = CacheKey::derive("query", "what is rust?");
        assert_eq!(a, b);
    }

    #[test]
    fn distinct_content_derives_distinct_keys() {
        let a = CacheKey::derive("query", "what is rust?");
        let b = CacheKey::derive("query", "what is rust!");
        assert_ne!(a, b);
    }

    #[test]
    fn distinct_namespaces_partition_keys() {
        let a = CacheKey::derive("query", "content");
        let b = CacheKey::derive("ingest", "content");
        assert_ne!(a, b);
    }

    #[test]
    fn key_length_is_independent_of_content_size() {
        let short = CacheKey::derive("query", "x");
        let long = CacheKey::derive("query", &"x".repeat(1 << 16));
        assert_eq!(short.as_str().len(), long.as_str().len());
    }

    #[test]
    fn key_is_namespace_plus_hex_digest() {
        let key = CacheKey::derive("query", "hello");
        let (ns, digest) = key.as_str().split_once(':').unwrap();
        assert_eq!(ns, "query");
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
