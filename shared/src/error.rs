//! Error types and wire error envelope
//!
//! [`ErrorResponse`] is the passive shape carried inside the API envelope;
//! [`ApiError`] is the service-side error that produces it.

use http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Wire error envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Stable machine-readable code (e.g. "NOT_FOUND")
    pub code: String,
    /// Human-readable message
    pub message: String,
    /// Additional detail lines, in order (field errors, context)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl ErrorResponse {
    /// Create a new error envelope
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Append a detail line, preserving insertion order
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.details.get_or_insert_with(Vec::new).push(detail.into());
        self
    }
}

/// Map a wire error code to its HTTP status
///
/// Unknown codes fall back to 500 so a malformed envelope never reads
/// as success.
pub fn status_for_code(code: &str) -> StatusCode {
    match code {
        "VALIDATION_FAILED" | "INVALID_REQUEST" => StatusCode::BAD_REQUEST,
        "UNAUTHENTICATED" => StatusCode::UNAUTHORIZED,
        "FORBIDDEN" => StatusCode::FORBIDDEN,
        "NOT_FOUND" => StatusCode::NOT_FOUND,
        "CONFLICT" => StatusCode::CONFLICT,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Unified error type for HRMS services
#[derive(Debug, Error)]
pub enum ApiError {
    /// Validation error
    #[error("{message}")]
    Validation { message: String },

    /// Authentication required
    #[error("Authentication required")]
    Unauthorized,

    /// Permission denied
    #[error("Permission denied: {message}")]
    Forbidden { message: String },

    /// Resource not found
    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    /// Resource already exists
    #[error("Resource already exists: {resource}")]
    Conflict { resource: String },

    /// Invalid request
    #[error("Invalid request: {message}")]
    Invalid { message: String },

    /// Internal server error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl ApiError {
    // ========== Convenient constructors ==========

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    pub fn conflict(resource: impl Into<String>) -> Self {
        Self::Conflict {
            resource: resource.into(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    // ========== Error inspection methods ==========

    /// Stable wire code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "VALIDATION_FAILED",
            Self::Unauthorized => "UNAUTHENTICATED",
            Self::Forbidden { .. } => "FORBIDDEN",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Conflict { .. } => "CONFLICT",
            Self::Invalid { .. } => "INVALID_REQUEST",
            Self::Internal { .. } => "INTERNAL_ERROR",
        }
    }

    /// HTTP status for this error
    pub fn status_code(&self) -> StatusCode {
        status_for_code(self.code())
    }

    /// Build the wire envelope for this error
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse::new(self.code(), self.to_string())
    }
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.code(), message = %self, "request failed");
        }

        let body = crate::response::ApiResponse::failure(self.to_response());
        (status, Json(body)).into_response()
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;
