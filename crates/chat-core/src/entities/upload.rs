//! Avatar upload payload and its pre-flight checks

use crate::error::DomainError;

/// Largest accepted avatar image (2 MiB)
pub const MAX_AVATAR_BYTES: usize = 2 * 1024 * 1024;

/// An image file the user picked as their avatar
#[derive(Clone, PartialEq, Eq)]
pub struct AvatarUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl AvatarUpload {
    /// Create a new AvatarUpload
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// Payload size in bytes
    #[inline]
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Check if the declared media type is an image
    pub fn is_image(&self) -> bool {
        self.content_type.starts_with("image/")
    }

    /// Validate against the default size limit
    pub fn validate(&self) -> Result<(), DomainError> {
        self.validate_with_limit(MAX_AVATAR_BYTES)
    }

    /// Validate type and size. Performs no I/O.
    pub fn validate_with_limit(&self, max_bytes: usize) -> Result<(), DomainError> {
        if !self.is_image() {
            return Err(DomainError::UnsupportedMediaType(self.content_type.clone()));
        }
        if self.bytes.is_empty() {
            return Err(DomainError::EmptyFile);
        }
        if self.size() > max_bytes {
            return Err(DomainError::FileTooLarge {
                size: self.size(),
                max: max_bytes,
            });
        }
        Ok(())
    }
}

// Image bytes are noise in logs
impl std::fmt::Debug for AvatarUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AvatarUpload")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("size", &self.size())
            .finish()
    }
}
