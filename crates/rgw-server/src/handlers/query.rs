//! Retrieval-augmented query handler

use rocket::serde::json::Json;
use rocket::{State, post};
use serde::Deserialize;

use crate::error::ApiError;
use crate::guards::AuthenticatedUser;
use crate::init::AppState;
use rgw_application::QueryAnswer;

/// Query request body
#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    /// The question to answer from the caller's documents
    pub question: String,
    /// Minimum similarity for a chunk to be used (default 0.5)
    #[serde(default)]
    pub threshold: Option<f32>,
    /// Maximum number of chunks to retrieve (default 5)
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Answer a question from the caller's documents
#[post("/query", format = "json", data = "<request>")]
pub async fn query(
    user: AuthenticatedUser,
    state: &State<AppState>,
    request: Json<QueryRequest>,
) -> Result<Json<QueryAnswer>, ApiError> {
    let request = request.into_inner();
    let answer = state
        .query
        .answer(user.id(), &request.question, request.threshold, request.limit)
        .await?;
    Ok(Json(answer))
}
