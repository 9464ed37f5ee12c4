//! Application error types
//!
//! Unified error handling for the client services and the backfill tool.

use chat_core::DomainError;
use serde::Serialize;
use std::fmt;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Authentication errors
    #[error("Not authenticated")]
    Unauthenticated,

    #[error("Invalid credentials")]
    InvalidCredentials,

    // Validation errors
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Upload rejected: {0}")]
    UploadRejected(#[source] DomainError),

    // Transport errors
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out")]
    Timeout,

    // Backend errors
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Unexpected response body: {0}")]
    Decode(String),

    #[error("Rejected by backend: {0}")]
    Rejected(String),

    // Internal errors
    #[error("Internal error")]
    Internal(#[source] anyhow::Error),

    // Domain errors
    #[error(transparent)]
    Domain(#[from] DomainError),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Get error code for UI messages and logs
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Unauthenticated => "UNAUTHENTICATED",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::UploadRejected(e) => e.code(),
            Self::Network(_) => "NETWORK_ERROR",
            Self::Timeout => "TIMEOUT",
            Self::Api { .. } => "API_ERROR",
            Self::Decode(_) => "DECODE_ERROR",
            Self::Rejected(_) => "REJECTED",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Domain(e) => e.code(),
            Self::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Check if the caller can fix this by changing its input or session
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        match self {
            Self::Unauthenticated
            | Self::InvalidCredentials
            | Self::InvalidInput(_)
            | Self::UploadRejected(_) => true,
            Self::Api { status, .. } => (400..500).contains(status),
            Self::Domain(e) => e.is_validation() || e.is_upload_rejection(),
            _ => false,
        }
    }

    /// Check if the failure happened before reaching the backend or on the wire
    #[must_use]
    pub fn is_transport_error(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Timeout)
    }

    /// Create an invalid input error
    #[must_use]
    pub fn invalid_input(msg: impl fmt::Display) -> Self {
        Self::InvalidInput(msg.to_string())
    }

    /// Create an API error from a status and message
    #[must_use]
    pub fn api(status: u16, message: impl fmt::Display) -> Self {
        Self::Api {
            status,
            message: message.to_string(),
        }
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

/// Failure shape handed to the UI for display
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub code: String,
    pub message: String,
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        Self {
            success: false,
            code: err.error_code().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<AppError> for ErrorResponse {
    fn from(err: AppError) -> Self {
        Self::from(&err)
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
