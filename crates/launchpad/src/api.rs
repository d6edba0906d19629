//! JSON validation endpoints.
//!
//! - `POST /api/users` - validate a user record
//! - `POST /api/posts` - validate a post record
//!
//! Both return the normalized record on success and the violation list otherwise.

use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde_json::Value;

use crate::error::ApiError;
use crate::validation::{PostInput, Schema, UserInput};

fn validate_with<S: Schema>(payload: Result<Json<Value>, JsonRejection>) -> Result<Json<S>, ApiError> {
    let Json(value) = payload?;

    match S::parse(&value) {
        Ok(record) => {
            tracing::debug!(schema = S::NAME, "input accepted");
            Ok(Json(record))
        }
        Err(errors) => {
            tracing::debug!(schema = S::NAME, fields = ?errors.fields(), "input rejected");
            Err(errors.into())
        }
    }
}

pub async fn validate_user(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<UserInput>, ApiError> {
    validate_with(payload)
}

pub async fn validate_post(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<PostInput>, ApiError> {
    validate_with(payload)
}
