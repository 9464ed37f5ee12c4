//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
///
/// Presentation operations never return these; they degrade to defaults.
/// Strict parsers and upload validation do.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Invalid avatar size: {0}")]
    InvalidAvatarSize(String),

    // =========================================================================
    // Upload Errors
    // =========================================================================
    #[error("Unsupported media type: {0} (expected image/*)")]
    UnsupportedMediaType(String),

    #[error("File too large: {size} bytes (max {max} bytes)")]
    FileTooLarge { size: usize, max: usize },

    #[error("File is empty")]
    EmptyFile,
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidAvatarSize(_) => "INVALID_AVATAR_SIZE",
            Self::UnsupportedMediaType(_) => "UNSUPPORTED_MEDIA_TYPE",
            Self::FileTooLarge { .. } => "FILE_TOO_LARGE",
            Self::EmptyFile => "EMPTY_FILE",
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidAvatarSize(_))
    }

    /// Check if this error rejects an upload payload
    pub fn is_upload_rejection(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedMediaType(_) | Self::FileTooLarge { .. } | Self::EmptyFile
        )
    }
}
