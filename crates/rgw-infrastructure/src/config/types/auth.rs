//! Authentication configuration types

use serde::{Deserialize, Serialize};

/// Deployment mode, selecting the identity-resolution strategies in play
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    /// Bearer verification only; the dev header is ignored entirely
    Production,
    /// Bearer verification, with the trusted dev header as a fallback
    Development,
}

/// Authentication configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Deployment mode
    pub mode: AuthMode,

    /// Base URL of the external identity provider
    ///
    /// The gateway calls `{base}/user` with the caller's bearer token and
    /// trusts the returned profile. It never verifies signatures itself.
    pub provider_url: String,

    /// Service API key forwarded to the identity provider, if it requires one
    pub provider_api_key: Option<String>,

    /// Header carrying a raw user id in development mode
    pub dev_user_header: String,

    /// Whether the dev header path is active at all
    ///
    /// Must be false in production mode; the loader rejects the combination.
    pub dev_header_enabled: bool,

    /// Timeout for verification calls, in seconds
    pub timeout_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            mode: AuthMode::Development,
            provider_url: "http://localhost:9999".to_string(),
            provider_api_key: None,
            dev_user_header: "X-User-Id".to_string(),
            dev_header_enabled: true,
            timeout_secs: 10,
        }
    }
}
