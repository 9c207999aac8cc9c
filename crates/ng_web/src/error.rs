use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

pub const MISSING_FIELDS: &str = "Missing required fields";
pub const FORM_INCOMPLETE: &str = "Please fill in all fields";
pub const GENERATION_FAILED: &str = "Failed to generate article";

/// Errors surfaced to API clients as `{"error": message}`
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            ApiError::Internal(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<ng_core::Error> for ApiError {
    fn from(error: ng_core::Error) -> Self {
        match error {
            ng_core::Error::Validation(message) => ApiError::BadRequest(message),
            ng_core::Error::NotFound(message) => ApiError::NotFound(message),
            other => {
                tracing::error!("Request failed: {}", other);
                ApiError::Internal("Internal server error".to_string())
            }
        }
    }
}
