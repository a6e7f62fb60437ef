//! Identity request guards
//!
//! Resolves a verified user identity from request headers, once per
//! request. Resolution order:
//!
//! 1. `Authorization: Bearer <token>` — delegated to the configured
//!    [`IdentityVerifier`]; any verification failure is terminal, never a
//!    silent fallback.
//! 2. The trusted dev header (`X-User-Id` by default) — only when the
//!    deployment mode is development and the header path is enabled, and
//!    only when the value parses as a UUID.
//! 3. Otherwise: authentication required.
//!
//! In production mode the dev header is ignored entirely.
//!
//! The outcome is cached in the request's local state; handlers and the
//! 401 catcher read that single resolution, and nothing else in the
//! system re-derives or overrides it.

use rocket::http::Status;
use rocket::outcome::Outcome;
use rocket::request::{self, FromRequest, Request};

use crate::error::ApiError;
use crate::init::AppState;
use rgw_domain::Error;
use rgw_domain::value_objects::{UserId, UserProfile};
use rgw_infrastructure::config::AuthMode;

/// The per-request identity resolution, cached in request-local state
#[derive(Debug, Clone)]
pub enum Resolution {
    /// A verified identity
    Authenticated(UserProfile),
    /// Resolution failed; carries the translated HTTP failure
    Failed(Status, &'static str, String),
}

/// Request guard: a verified user, required
///
/// Routes carrying this guard fail with 401 (or 502 when the identity
/// provider is unreachable) before the handler runs.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub UserProfile);

impl AuthenticatedUser {
    /// The verified tenant identifier
    pub fn id(&self) -> UserId {
        self.0.id
    }
}

/// Request guard: a verified user, optional
///
/// Identical resolution logic, but never fails: absent credentials and
/// any internal error leave the request anonymous.
#[derive(Debug, Clone)]
pub struct MaybeUser(pub Option<UserProfile>);

/// Resolve the caller identity from headers, per the strategy order
async fn resolve(request: &Request<'_>) -> Resolution {
    let Some(state) = request.rocket().state::<AppState>() else {
        return Resolution::Failed(
            Status::InternalServerError,
            "internal_error",
            "gateway state not initialized".to_string(),
        );
    };

    if let Some(header) = request.headers().get_one("Authorization") {
        let Some(token) = header.strip_prefix("Bearer ") else {
            return failed(Error::authentication_invalid(
                "Authorization header is not a bearer token",
            ));
        };
        return match state.identity.verify_bearer(token.trim()).await {
            Ok(profile) => Resolution::Authenticated(profile),
            Err(err) => failed(err),
        };
    }

    if state.auth.mode == AuthMode::Development && state.auth.dev_header_enabled {
        if let Some(raw) = request.headers().get_one(&state.auth.dev_user_header) {
            return match UserId::parse(raw) {
                Ok(id) => Resolution::Authenticated(UserProfile::new(id)),
                Err(err) => failed(err),
            };
        }
    }

    failed(Error::authentication_required("no credentials presented"))
}

fn failed(err: Error) -> Resolution {
    let api = ApiError::from(err);
    Resolution::Failed(api.status, api.body.error, api.body.message)
}

/// Resolve once and cache in request-local state
pub async fn cached_resolution<'r>(request: &'r Request<'_>) -> &'r Resolution {
    request.local_cache_async(resolve(request)).await
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for AuthenticatedUser {
    type Error = ApiError;

    async fn from_request(request: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        match cached_resolution(request).await {
            Resolution::Authenticated(profile) => {
                Outcome::Success(AuthenticatedUser(profile.clone()))
            }
            Resolution::Failed(status, error, message) => {
                Outcome::Error((*status, ApiError::new(*status, *error, message.clone())))
            }
        }
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for MaybeUser {
    type Error = std::convert::Infallible;

    async fn from_request(request: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        match cached_resolution(request).await {
            Resolution::Authenticated(profile) => {
                Outcome::Success(MaybeUser(Some(profile.clone())))
            }
            Resolution::Failed(..) => Outcome::Success(MaybeUser(None)),
        }
    }
}
