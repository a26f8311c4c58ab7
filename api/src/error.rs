//! Unified error types for the leaderboard API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Core business logic and persistence errors
//! - `LeetCodeError`: LeetCode GraphQL client errors
//! - `AppError`: Application layer errors (wraps both for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Domain layer errors - pure business logic errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Entity already exists: {0}")]
    AlreadyExists(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// LeetCode GraphQL client errors
#[derive(Debug, Error)]
pub enum LeetCodeError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Rate limited by LeetCode")]
    RateLimited,

    #[error("No data received from LeetCode API for username: {username}")]
    MissingData { username: String },

    #[error("Could not fetch stats for username: {username}")]
    UserStatsMissing { username: String },

    #[error("Unexpected response for username {username}: {message}")]
    Deserialization { username: String, message: String },
}

impl LeetCodeError {
    /// True when the upstream answered but the payload was unusable
    pub fn is_upstream_data_error(&self) -> bool {
        matches!(
            self,
            LeetCodeError::MissingData { .. }
                | LeetCodeError::UserStatsMissing { .. }
                | LeetCodeError::Deserialization { .. }
        )
    }
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("LeetCode error: {0}")]
    LeetCode(#[from] LeetCodeError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Domain(DomainError::NotFound(msg)) => {
                (StatusCode::NOT_FOUND, "Not found", Some(msg.clone()))
            }
            AppError::Domain(DomainError::AlreadyExists(msg)) => {
                (StatusCode::CONFLICT, "Already exists", Some(msg.clone()))
            }
            AppError::Domain(DomainError::Validation(msg)) => (
                StatusCode::BAD_REQUEST,
                "Validation error",
                Some(msg.clone()),
            ),
            AppError::Domain(DomainError::Database(msg)) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
            AppError::Domain(DomainError::Internal(msg)) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
            AppError::LeetCode(e) => {
                tracing::error!("LeetCode error: {}", e);
                match e {
                    LeetCodeError::RateLimited => {
                        (StatusCode::TOO_MANY_REQUESTS, "Rate limited", None)
                    }
                    e if e.is_upstream_data_error() => (
                        StatusCode::BAD_GATEWAY,
                        "Upstream data error",
                        Some(e.to_string()),
                    ),
                    LeetCodeError::Api { message, .. } => (
                        StatusCode::BAD_GATEWAY,
                        "LeetCode service error",
                        Some(message.clone()),
                    ),
                    _ => (StatusCode::BAD_GATEWAY, "LeetCode service error", None),
                }
            }
            AppError::InvalidArgument(msg) => (
                StatusCode::BAD_REQUEST,
                "Invalid argument",
                Some(msg.clone()),
            ),
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "Bad request", Some(msg.clone()))
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "Not found", Some(msg.clone())),
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let response = AppError::Domain(DomainError::NotFound("Student 7".into())).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn invalid_argument_maps_to_400() {
        let response = AppError::InvalidArgument("Codeforces".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn upstream_data_errors_map_to_bad_gateway() {
        let err = LeetCodeError::MissingData {
            username: "alice".into(),
        };
        assert!(err.is_upstream_data_error());
        assert_eq!(
            AppError::LeetCode(err).into_response().status(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn upstream_rate_limit_maps_to_429() {
        assert!(!LeetCodeError::RateLimited.is_upstream_data_error());
        assert_eq!(
            AppError::LeetCode(LeetCodeError::RateLimited)
                .into_response()
                .status(),
            StatusCode::TOO_MANY_REQUESTS
        );
    }

    #[test]
    fn upstream_messages_carry_username() {
        let err = LeetCodeError::UserStatsMissing {
            username: "bob".into(),
        };
        assert_eq!(err.to_string(), "Could not fetch stats for username: bob");
    }
}
