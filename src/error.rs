// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent API responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application error type that converts to HTTP responses.
///
/// Every variant aborts the whole render: there is no partial output.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Data source error: {0}")]
    DataSource(String),

    #[error("Malformed data: {0}")]
    MalformedData(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Message used when the data source rejects the access key.
    pub const DATA_SOURCE_AUTH_ERROR: &'static str = "Data source rejected credentials";

    /// Check if this error is an authentication failure against the data source.
    pub fn is_data_source_auth_error(&self) -> bool {
        matches!(self, AppError::DataSource(msg) if msg.starts_with(Self::DATA_SOURCE_AUTH_ERROR))
    }
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "bad_request", Some(msg.clone()))
            }
            AppError::DataSource(msg) => {
                tracing::error!(error = %msg, "Data source error");
                (StatusCode::BAD_GATEWAY, "data_source_error", Some(msg.clone()))
            }
            AppError::MalformedData(msg) => {
                tracing::error!(error = %msg, "Malformed data");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "malformed_data",
                    Some(msg.clone()),
                )
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", None)
            }
        };

        let body = ErrorResponse {
            error: error.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
