//! HTTP error translation
//!
//! Maps the domain error taxonomy onto HTTP statuses and a uniform JSON
//! body. Authentication failures are terminal for the request; upstream
//! failures (store, embedding, completion, identity transport) surface as
//! 502; cache errors never reach this mapping.

use rocket::Request;
use rocket::http::Status;
use rocket::response::{self, Responder};
use rocket::serde::json::Json;
use serde::Serialize;

/// JSON error body returned for every failed request
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    /// Stable machine-readable error slug
    pub error: &'static str,
    /// Human-readable description
    pub message: String,
}

/// A fully translated HTTP error
#[derive(Debug)]
pub struct ApiError {
    /// HTTP status to respond with
    pub status: Status,
    /// JSON body
    pub body: ErrorBody,
}

impl ApiError {
    /// Build an error from its parts
    pub fn new(status: Status, error: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorBody {
                error,
                message: message.into(),
            },
        }
    }
}

impl From<rgw_domain::Error> for ApiError {
    fn from(err: rgw_domain::Error) -> Self {
        use rgw_domain::Error;
        match &err {
            Error::AuthenticationRequired { .. } => {
                Self::new(Status::Unauthorized, "authentication_required", err.to_string())
            }
            Error::AuthenticationInvalid { .. } => {
                Self::new(Status::Unauthorized, "authentication_invalid", err.to_string())
            }
            Error::InvalidArgument { .. } => {
                Self::new(Status::UnprocessableEntity, "invalid_argument", err.to_string())
            }
            Error::NotFound { .. } => Self::new(Status::NotFound, "not_found", err.to_string()),
            Error::Database { .. }
            | Error::Embedding { .. }
            | Error::Completion { .. }
            | Error::Network { .. } => {
                Self::new(Status::BadGateway, "upstream_error", err.to_string())
            }
            _ => Self::new(Status::InternalServerError, "internal_error", err.to_string()),
        }
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        let mut response = Json(self.body).respond_to(request)?;
        response.set_status(self.status);
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rgw_domain::Error;

    #[test]
    fn authentication_variants_map_to_distinct_401_slugs() {
        let required = ApiError::from(Error::authentication_required("no credentials"));
        let invalid = ApiError::from(Error::authentication_invalid("bad token"));
        assert_eq!(required.status, Status::Unauthorized);
        assert_eq!(invalid.status, Status::Unauthorized);
        assert_ne!(required.body.error, invalid.body.error);
    }

    #[test]
    fn upstream_failures_map_to_502() {
        for err in [
            Error::database("down"),
            Error::embedding("down"),
            Error::completion("down"),
            Error::network("down"),
        ] {
            assert_eq!(ApiError::from(err).status, Status::BadGateway);
        }
    }

    #[test]
    fn not_found_maps_to_404() {
        assert_eq!(
            ApiError::from(Error::not_found("document x")).status,
            Status::NotFound
        );
    }
}
