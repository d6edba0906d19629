//! API error types and response formatting.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::validation::{FieldViolation, ValidationErrors};

/// API error type that converts to appropriate HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Input was well-formed JSON but violated the schema.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// Request body could not be read as JSON.
    #[error("bad request: {0}")]
    Json(#[from] JsonRejection),
}

/// JSON error response body.
#[derive(Debug, Clone, Serialize)]
struct ErrorResponse {
    error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    violations: Vec<FieldViolation>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorResponse {
                    error: "validation_failed",
                    message: None,
                    violations: errors.into_iter().collect(),
                },
            ),
            Self::Json(rejection) => {
                let status = rejection.status();
                let error = if status == StatusCode::PAYLOAD_TOO_LARGE {
                    "payload_too_large"
                } else {
                    "bad_request"
                };
                (
                    status,
                    ErrorResponse {
                        error,
                        message: Some(rejection.body_text()),
                        violations: Vec::new(),
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
