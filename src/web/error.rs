// Error types for the API server

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// API server error types
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    InternalServerError(String),

    // Application-specific errors
    FileNotFound(String),
    DeletionFailed(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),

            Self::FileNotFound(filename) => (
                StatusCode::NOT_FOUND,
                format!("File not found: {}", filename),
            ),
            Self::DeletionFailed(filename) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to delete file: {}", filename),
            ),
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(error: tokio::task::JoinError) -> Self {
        Self::InternalServerError(format!("Filesystem task failed: {}", error))
    }
}
