//! Health probe

use rocket::get;
use rocket::serde::json::Json;
use serde::Serialize;

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service name
    pub service: &'static str,
    /// Crate version
    pub version: &'static str,
    /// Liveness status
    pub status: &'static str,
}

/// Liveness probe; requires no credentials
#[get("/health")]
pub fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        service: "rgw",
        version: env!("CARGO_PKG_VERSION"),
        status: "ok",
    })
}
