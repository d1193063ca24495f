//! Error handling for Karnataka Disaster Watch
//!
//! Upstream failures are normally absorbed by the synthetic fallback; the
//! variants here cover what is left to report to the caller.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Upstream errors
    #[error("Upstream request failed: {0}")]
    UpstreamUnavailable(String),

    #[error("Upstream responded with status {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    #[error("Failed to decode upstream response: {0}")]
    UpstreamDecode(String),

    // Data errors
    #[error("No data available: {0}")]
    NoData(String),

    // Internal errors
    #[error("Lookup table error: {0}")]
    Table(#[from] shared::TableError),
}

/// Error response structure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NoData(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            AppError::UpstreamUnavailable(_)
            | AppError::UpstreamStatus { .. }
            | AppError::UpstreamDecode(_)
            | AppError::Table(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
