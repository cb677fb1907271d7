//! API error type with IntoResponse
//!
//! Data failures were already logged by the repository that hit them; the
//! response only carries the operation's generic message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use invoicedash_core::ValidationError;
use serde_json::json;

use crate::db::DataError;

#[derive(Debug)]
pub enum ApiError {
    /// Malformed request input (400)
    Validation(ValidationError),

    /// Sign-in denied (401)
    InvalidCredentials,

    /// Data access failed (500)
    Data(DataError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Validation(e) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": "validation_error",
                    "message": e.to_string()
                }),
            ),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                json!({
                    "error": "invalid_credentials",
                    "message": "Invalid credentials."
                }),
            ),
            Self::Data(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({
                    "error": "internal_error",
                    "message": e.to_string()
                }),
            ),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DataError> for ApiError {
    fn from(e: DataError) -> Self {
        Self::Data(e)
    }
}
