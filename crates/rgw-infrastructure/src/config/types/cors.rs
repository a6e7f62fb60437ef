//! CORS configuration types

use serde::{Deserialize, Serialize};

/// CORS origin allowlist
///
/// Origins are matched exactly (scheme, host, and port). There is no
/// substring or wildcard matching; an origin not in the list receives no
/// CORS headers at all.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Origins allowed to call the gateway from a browser
    #[serde(default)]
    pub allowed_origins: Vec<String>,

    /// Whether to allow credentialed requests from allowed origins
    #[serde(default)]
    pub allow_credentials: bool,
}

impl CorsConfig {
    /// Whether `origin` is allowed, by exact match
    pub fn is_allowed(&self, origin: &str) -> bool {
        self.allowed_origins.iter().any(|o| o == origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(origins: &[&str]) -> CorsConfig {
        CorsConfig {
            allowed_origins: origins.iter().map(|s| s.to_string()).collect(),
            allow_credentials: false,
        }
    }

    #[test]
    fn exact_origin_matches() {
        let cors = config(&["https://app.example.com"]);
        assert!(cors.is_allowed("https://app.example.com"));
    }

    #[test]
    fn substring_origins_do_not_match() {
        let cors = config(&["https://app.example.com"]);
        assert!(!cors.is_allowed("https://app.example.com.evil.io"));
        assert!(!cors.is_allowed("https://evil.io/?https://app.example.com"));
        assert!(!cors.is_allowed("http://app.example.com"));
    }

    #[test]
    fn empty_allowlist_rejects_everything() {
        let cors = config(&[]);
        assert!(!cors.is_allowed("https://app.example.com"));
    }
}
