//! Identity Verification Port
//!
//! Contract for delegated bearer-token verification. The gateway never
//! inspects token signatures itself; it submits the token to an external
//! identity provider and trusts the returned profile.

use crate::error::Result;
use crate::value_objects::UserProfile;
use async_trait::async_trait;

/// Identity verifier interface
///
/// # Implementations
///
/// - **Http**: outbound call to the identity provider's user endpoint
/// - **Static**: fixed token-to-profile map for tests and local development
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    /// Verify a bearer token and return the authenticated profile
    ///
    /// Any verification failure (expired, malformed, revoked) is an
    /// [`crate::Error::AuthenticationInvalid`]; a transport failure reaching
    /// the provider is [`crate::Error::Network`]. Never a silent fallback.
    async fn verify_bearer(&self, token: &str) -> Result<UserProfile>;

    /// The name/identifier of this verifier implementation
    fn verifier_name(&self) -> &str;
}
