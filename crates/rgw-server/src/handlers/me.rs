//! Caller identity echo
//!
//! Uses the optional identity guard: an unauthenticated call is not an
//! error, it simply reports an anonymous session.

use rocket::get;
use rocket::serde::json::Json;
use serde::Serialize;

use crate::guards::MaybeUser;
use rgw_domain::value_objects::UserProfile;

/// Identity echo response
#[derive(Debug, Serialize)]
pub struct MeResponse {
    /// Whether the request carried a verifiable identity
    pub authenticated: bool,
    /// The resolved profile, when authenticated
    pub user: Option<UserProfile>,
}

/// Report the caller's resolved identity, if any
#[get("/me")]
pub fn me(user: MaybeUser) -> Json<MeResponse> {
    Json(MeResponse {
        authenticated: user.0.is_some(),
        user: user.0,
    })
}
