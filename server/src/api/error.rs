//! API Error Types

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::directory::DirectoryError;

/// API error types.
#[derive(Debug, Error)]
pub enum ApiError {
    /// User or role lookup came up empty.
    #[error("User or role not found")]
    NotFound,

    /// Username already taken.
    #[error("User already exists")]
    DuplicateUser,

    /// Role name not present in the directory.
    #[error("Unknown role: {0}")]
    UnknownRole(String),

    /// Request body missing or malformed.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Validation error.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Database error.
    #[error("Database error")]
    Database(#[from] sqlx::Error),
}

/// Error response body for JSON responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable error message.
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            Self::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            Self::DuplicateUser => (StatusCode::BAD_REQUEST, "USER_EXISTS"),
            Self::UnknownRole(_) => (StatusCode::BAD_REQUEST, "UNKNOWN_ROLE"),
            Self::InvalidInput(_) => (StatusCode::BAD_REQUEST, "INVALID_INPUT"),
            Self::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            Self::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let body = Json(ErrorResponse {
            error: code.to_string(),
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}

impl From<DirectoryError> for ApiError {
    fn from(err: DirectoryError) -> Self {
        match err {
            DirectoryError::DuplicateUser => Self::DuplicateUser,
            DirectoryError::UnknownRole(name) => Self::UnknownRole(name),
            DirectoryError::NotFound => Self::NotFound,
            DirectoryError::Database(e) => Self::Database(e),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidInput(rejection.body_text())
    }
}

/// `Json` extractor that reports malformed bodies as 400 instead of
/// axum's default 422.
#[derive(Debug, axum::extract::FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
pub struct AppJson<T>(pub T);
