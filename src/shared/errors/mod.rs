//! Error Types
//!
//! Domain-specific error types with proper HTTP status code mapping.
//! Every API error renders as a flat `{"error": "<message>"}` JSON body.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Repository-level errors for data access failures
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Use case-level errors for application logic failures
#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),

    #[error("{resource} with username '{username}' not found")]
    NotFound { resource: String, username: String },

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl UseCaseError {
    /// Get the HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// API error for HTTP responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    UseCase(#[from] UseCaseError),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

/// Error response body structure
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable description of what went wrong
    #[schema(example = "shopper with username 'jdoe' not found")]
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::UseCase(uc_error) => {
                // Storage failures are logged with full detail but clients
                // only ever see a generic message.
                if let UseCaseError::Repository(err) = uc_error {
                    tracing::error!(error = %err, "Storage operation failed");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "An unexpected error occurred".to_string(),
                    )
                } else {
                    (uc_error.status_code(), uc_error.to_string())
                }
            }
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error occurred".to_string(),
                )
            }
        };

        let body = ErrorResponse { error: message };
        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        let messages: Vec<String> = err
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| {
                    format!(
                        "{}: {}",
                        field,
                        e.message.as_ref().map_or("invalid", |m| m.as_ref())
                    )
                })
            })
            .collect();
        ApiError::UseCase(UseCaseError::Validation(messages))
    }
}
