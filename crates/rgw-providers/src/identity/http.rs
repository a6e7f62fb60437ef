//! HTTP identity verifier
//!
//! Delegates bearer-token verification to the external identity provider:
//! the token is forwarded to the provider's user endpoint and the returned
//! profile is trusted. The gateway never inspects token signatures itself.
//!
//! Rejections from the provider (401/403) are authentication failures;
//! transport problems are network errors, because an unreachable provider
//! says nothing about the token.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use rgw_domain::error::{Error, Result};
use rgw_domain::ports::infrastructure::IdentityVerifier;
use rgw_domain::value_objects::{UserId, UserProfile};

/// Wire form of the provider's user record
#[derive(Deserialize)]
struct UserRecord {
    id: UserId,
    email: Option<String>,
}

/// HTTP identity verifier
pub struct HttpIdentityVerifier {
    base_url: String,
    api_key: Option<String>,
    timeout: Duration,
    http_client: Client,
}

impl HttpIdentityVerifier {
    /// Create a new HTTP identity verifier
    ///
    /// # Arguments
    /// * `base_url` - Identity provider base URL
    /// * `api_key` - Service key sent alongside the user's token, when the
    ///   provider requires one
    /// * `timeout` - Request timeout duration
    /// * `http_client` - Reqwest HTTP client for making API requests
    pub fn new(
        base_url: String,
        api_key: Option<String>,
        timeout: Duration,
        http_client: Client,
    ) -> Self {
        Self {
            base_url,
            api_key,
            timeout,
            http_client,
        }
    }
}

#[async_trait]
impl IdentityVerifier for HttpIdentityVerifier {
    async fn verify_bearer(&self, token: &str) -> Result<UserProfile> {
        let mut request = self
            .http_client
            .get(format!("{}/user", self.base_url.trim_end_matches('/')))
            .timeout(self.timeout)
            .bearer_auth(token);
        if let Some(key) = &self.api_key {
            request = request.header("apikey", key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::network_with_source("identity provider unreachable", e))?;

        match response.status() {
            status if status.is_success() => {
                let record: UserRecord = response.json().await.map_err(|e| {
                    Error::network_with_source("identity provider returned malformed profile", e)
                })?;
                let mut profile = UserProfile::new(record.id);
                if let Some(email) = record.email {
                    profile = profile.with_email(email);
                }
                Ok(profile)
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(
                Error::authentication_invalid("bearer token rejected by identity provider"),
            ),
            status => Err(Error::network(format!(
                "identity provider returned unexpected status {status}"
            ))),
        }
    }

    fn verifier_name(&self) -> &str {
        "http"
    }
}
