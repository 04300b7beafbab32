//! Error types for the API server
//!
//! Provides unified error handling using thiserror. Every variant renders
//! as a failure envelope.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::Envelope;

// == Api Error Enum ==
/// Unified error type for the API handlers.
#[derive(Error, Debug)]
pub enum ApiError {
    /// No record with the requested id
    #[error("{0}")]
    NotFound(String),

    /// Missing required fields or a malformed body
    #[error("{0}")]
    InvalidRequest(String),

    /// One or more field rules failed
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),
}

impl ApiError {
    /// HTTP status code this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidRequest(_) | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidRequest(rejection.body_text())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body: Envelope<()> = match self {
            ApiError::NotFound(msg) | ApiError::InvalidRequest(msg) => Envelope::failure(msg),
            ApiError::Validation(errors) => Envelope::invalid(errors),
        };

        (status, Json(body)).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the API handlers.
pub type Result<T> = std::result::Result<T, ApiError>;
