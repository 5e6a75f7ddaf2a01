// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent API responses.

use crate::db::StoreError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application error type that converts to HTTP responses.
///
/// None of these are retried; each ends the current user action.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Geolocation is not supported by this device")]
    CapabilityUnavailable,

    #[error("Geolocation failed: {0}")]
    GeolocationFailed(String),

    #[error("Failed to start guardia: {0}")]
    PersistenceFailed(String),

    #[error("Failed to look up guardia: {0}")]
    LookupFailed(String),

    #[error("Guardia not found")]
    NotFound,

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Store write failure, keeping the store's own message.
    pub fn persistence(err: StoreError) -> Self {
        AppError::PersistenceFailed(err.user_message())
    }

    /// Store read failure, keeping the store's own message.
    pub fn lookup(err: StoreError) -> Self {
        AppError::LookupFailed(err.user_message())
    }
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::CapabilityUnavailable => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "capability_unavailable",
                None,
            ),
            AppError::GeolocationFailed(reason) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "geolocation_failed",
                Some(reason.clone()),
            ),
            AppError::PersistenceFailed(msg) => {
                tracing::error!(error = %msg, "Record store insert failed");
                (StatusCode::BAD_GATEWAY, "persistence_failed", Some(msg.clone()))
            }
            AppError::LookupFailed(msg) => {
                tracing::error!(error = %msg, "Record store lookup failed");
                (StatusCode::BAD_GATEWAY, "lookup_failed", Some(msg.clone()))
            }
            AppError::NotFound => (StatusCode::NOT_FOUND, "not_found", None),
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "bad_request", Some(msg.clone()))
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", None)
            }
        };

        let message = match &self {
            AppError::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        };

        let body = ErrorResponse {
            error: error.to_string(),
            message,
            details,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
