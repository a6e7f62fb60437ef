//! Document handlers
//!
//! Every route here requires a verified identity; the resolved owner
//! scopes each store operation, so one tenant's documents are invisible
//! to every other tenant.

use rocket::http::Status;
use rocket::response::status;
use rocket::serde::json::Json;
use rocket::{State, delete, get, post};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::ApiError;
use crate::guards::AuthenticatedUser;
use crate::init::AppState;
use rgw_application::IngestReceipt;
use rgw_domain::value_objects::Document;

/// Ingest request body
#[derive(Debug, Deserialize)]
pub struct IngestRequest {
    /// Document title
    pub title: String,
    /// Full document text
    pub content: String,
    /// Metadata stored with every chunk
    #[serde(default)]
    pub metadata: serde_json::Value,
}

/// Ingest a document for the authenticated caller
#[post("/documents", format = "json", data = "<request>")]
pub async fn create(
    user: AuthenticatedUser,
    state: &State<AppState>,
    request: Json<IngestRequest>,
) -> Result<status::Created<Json<IngestReceipt>>, ApiError> {
    let request = request.into_inner();
    if request.title.trim().is_empty() {
        return Err(ApiError::new(
            Status::UnprocessableEntity,
            "invalid_argument",
            "title must not be empty",
        ));
    }

    let receipt = state
        .ingest
        .ingest(user.id(), &request.title, &request.content, request.metadata)
        .await?;
    let location = format!("/api/documents/{}", receipt.document_id);
    Ok(status::Created::new(location).body(Json(receipt)))
}

/// List the caller's documents
#[get("/documents")]
pub async fn list(
    user: AuthenticatedUser,
    state: &State<AppState>,
) -> Result<Json<Vec<Document>>, ApiError> {
    let documents = state.store.list_documents(user.id()).await?;
    Ok(Json(documents))
}

/// Delete one of the caller's documents
///
/// A malformed id cannot name an existing document, so it reads as 404
/// rather than a format error.
#[delete("/documents/<id>")]
pub async fn remove(
    user: AuthenticatedUser,
    state: &State<AppState>,
    id: &str,
) -> Result<Status, ApiError> {
    let id = Uuid::parse_str(id)
        .map_err(|_| ApiError::new(Status::NotFound, "not_found", format!("document {id}")))?;
    state.store.delete_document(user.id(), id).await?;
    Ok(Status::NoContent)
}
