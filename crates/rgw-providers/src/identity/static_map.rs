//! Static identity verifier
//!
//! A fixed token-to-profile map. Tokens absent from the map are invalid,
//! which makes expired-token and revoked-token scenarios trivial to stage
//! in tests.

use async_trait::async_trait;
use std::collections::HashMap;

use rgw_domain::error::{Error, Result};
use rgw_domain::ports::infrastructure::IdentityVerifier;
use rgw_domain::value_objects::UserProfile;

/// Static identity verifier for tests and local development
#[derive(Debug, Clone, Default)]
pub struct StaticIdentityVerifier {
    tokens: HashMap<String, UserProfile>,
}

impl StaticIdentityVerifier {
    /// Create an empty verifier that rejects every token
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a token as valid for `profile`
    pub fn with_token(mut self, token: impl Into<String>, profile: UserProfile) -> Self {
        self.tokens.insert(token.into(), profile);
        self
    }
}

#[async_trait]
impl IdentityVerifier for StaticIdentityVerifier {
    async fn verify_bearer(&self, token: &str) -> Result<UserProfile> {
        self.tokens
            .get(token)
            .cloned()
            .ok_or_else(|| Error::authentication_invalid("unknown bearer token"))
    }

    fn verifier_name(&self) -> &str {
        "static"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rgw_domain::value_objects::UserId;
    use uuid::Uuid;

    #[tokio::test]
    async fn known_token_verifies() {
        let profile = UserProfile::new(UserId::from(Uuid::new_v4()));
        let verifier = StaticIdentityVerifier::new().with_token("good", profile.clone());
        assert_eq!(verifier.verify_bearer("good").await.unwrap(), profile);
    }

    #[tokio::test]
    async fn unknown_token_is_invalid() {
        let verifier = StaticIdentityVerifier::new();
        assert!(matches!(
            verifier.verify_bearer("expired").await.unwrap_err(),
            Error::AuthenticationInvalid { .. }
        ));
    }
}
