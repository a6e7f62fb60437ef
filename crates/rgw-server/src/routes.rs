//! Rocket assembly
//!
//! Route table:
//! - `GET  /health` - liveness probe (public)
//! - `GET  /api/me` - caller identity echo (optional auth)
//! - `POST /api/documents` - ingest a document
//! - `GET  /api/documents` - list the caller's documents
//! - `DELETE /api/documents/<id>` - delete a document
//! - `POST /api/query` - retrieval-augmented answer
//! - `OPTIONS /<any>` - CORS preflight

use rocket::http::Status;
use rocket::{Build, Request, Rocket, catch, catchers, options, routes};

use crate::cors::Cors;
use crate::error::ApiError;
use crate::guards::Resolution;
use crate::handlers::{documents, health, me, query};
use crate::init::AppState;
use rgw_infrastructure::config::CorsConfig;

/// Assemble the gateway rocket
pub fn gateway(state: AppState, cors: CorsConfig) -> Rocket<Build> {
    rocket::build()
        .manage(state)
        .attach(Cors::new(cors))
        .mount("/", routes![health::health, preflight])
        .mount(
            "/api",
            routes![
                me::me,
                documents::create,
                documents::list,
                documents::remove,
                query::query,
            ],
        )
        .register(
            "/",
            catchers![
                bad_request,
                unauthorized,
                not_found,
                unprocessable,
                internal_error,
                bad_gateway,
            ],
        )
}

/// Answer CORS preflight for any path; the fairing attaches the headers
#[options("/<_..>")]
pub fn preflight() -> Status {
    Status::NoContent
}

/// Render the identity failure the guard cached for this request, or a
/// generic fallback when the status was produced elsewhere
fn resolution_error(request: &Request<'_>, fallback: ApiError) -> ApiError {
    match request.local_cache(|| Resolution::Failed(
        fallback.status,
        fallback.body.error,
        fallback.body.message.clone(),
    )) {
        Resolution::Failed(status, error, message) => {
            ApiError::new(*status, *error, message.clone())
        }
        Resolution::Authenticated(_) => fallback,
    }
}

#[catch(400)]
fn bad_request() -> ApiError {
    ApiError::new(Status::BadRequest, "bad_request", "malformed request")
}

#[catch(401)]
fn unauthorized(request: &Request<'_>) -> ApiError {
    resolution_error(
        request,
        ApiError::new(
            Status::Unauthorized,
            "authentication_required",
            "authentication required",
        ),
    )
}

#[catch(404)]
fn not_found() -> ApiError {
    ApiError::new(Status::NotFound, "not_found", "no such route or resource")
}

#[catch(422)]
fn unprocessable() -> ApiError {
    ApiError::new(
        Status::UnprocessableEntity,
        "invalid_argument",
        "request body failed validation",
    )
}

#[catch(500)]
fn internal_error() -> ApiError {
    ApiError::new(
        Status::InternalServerError,
        "internal_error",
        "internal error",
    )
}

#[catch(502)]
fn bad_gateway(request: &Request<'_>) -> ApiError {
    resolution_error(
        request,
        ApiError::new(Status::BadGateway, "upstream_error", "upstream failure"),
    )
}
