//! User identity value objects
//!
//! Identity in this system is an opaque UUID-shaped string. In production
//! it originates exclusively from signature-verified proof (a bearer token
//! checked by the external identity provider); in development deployments
//! a trusted header may assert it directly, but only when the value parses
//! as a UUID.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Value Object: Verified User Identifier
///
/// Wraps the tenant UUID so that owner scoping cannot be confused with
/// other string or UUID parameters. Construction goes through
/// [`UserId::parse`] for header-asserted values, or [`From<Uuid>`] for
/// identifiers the identity provider already verified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Parse a user identifier from its canonical string form
    ///
    /// Accepts the 8-4-4-4-12 hex-group syntax, case-insensitive.
    /// Anything else is a format error, reported as an invalid credential
    /// rather than a generic parse failure.
    pub fn parse(value: &str) -> Result<Self> {
        Uuid::parse_str(value)
            .map(Self)
            .map_err(|e| Error::authentication_invalid_with_source(
                format!("malformed user identifier '{value}'"),
                e,
            ))
    }

    /// The underlying UUID
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for UserId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Value Object: Authenticated User Profile
///
/// The identity provider's view of the caller, as returned by bearer-token
/// verification. Only the identifier participates in scoping decisions;
/// the email is carried for logging and response payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Verified tenant identifier
    pub id: UserId,
    /// Email address, when the provider exposes one
    pub email: Option<String>,
}

impl UserProfile {
    /// Create a profile from a verified identifier
    pub fn new(id: UserId) -> Self {
        Self { id, email: None }
    }

    /// Attach an email address
    pub fn with_email<S: Into<String>>(mut self, email: S) -> Self {
        self.email = Some(email.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_canonical_uuid() {
        let id = UserId::parse("6fa459ea-ee8a-3ca4-894e-db77e160355e").unwrap();
        assert_eq!(id.to_string(), "6fa459ea-ee8a-3ca4-894e-db77e160355e");
    }

    #[test]
    fn parse_is_case_insensitive() {
        let lower = UserId::parse("6fa459ea-ee8a-3ca4-894e-db77e160355e").unwrap();
        let upper = UserId::parse("6FA459EA-EE8A-3CA4-894E-DB77E160355E").unwrap();
        assert_eq!(lower, upper);
    }

    #[test]
    fn parse_rejects_non_uuid() {
        let err = UserId::parse("not-a-uuid").unwrap_err();
        assert!(matches!(
            err,
            crate::error::Error::AuthenticationInvalid { .. }
        ));
    }
}
