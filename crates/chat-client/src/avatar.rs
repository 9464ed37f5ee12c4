//! Avatar upload service
//!
//! Validates the picked image locally, then uploads it as multipart form
//! data. Rejections happen before any request is built.

use chat_common::{AppError, AppResult, ClientConfig, Credential};
use chat_core::{AvatarUpload, DomainError, MAX_AVATAR_BYTES};
use reqwest::multipart::{Form, Part};
use tracing::{info, instrument, warn};

use crate::api::ApiClient;
use crate::dto::AvatarResponse;

/// Multipart field carrying the image
pub const AVATAR_FIELD: &str = "avatar";

/// Uploads and removes the current user's avatar
#[derive(Debug, Clone)]
pub struct AvatarService {
    api: ApiClient,
    credential: Credential,
    max_bytes: usize,
}

impl AvatarService {
    /// Create a new AvatarService
    pub fn new(api: ApiClient, credential: Credential) -> Self {
        Self {
            api,
            credential,
            max_bytes: MAX_AVATAR_BYTES,
        }
    }

    /// Create an AvatarService honoring the configured size limit
    pub fn from_config(api: ApiClient, credential: Credential, config: &ClientConfig) -> Self {
        Self::new(api, credential).with_max_bytes(config.avatar_max_bytes)
    }

    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    /// Override the size limit (never above the 2 MiB ceiling)
    pub fn with_max_bytes(mut self, max_bytes: usize) -> Self {
        self.max_bytes = max_bytes.min(MAX_AVATAR_BYTES);
        self
    }

    /// Validate without uploading
    pub fn check(&self, upload: &AvatarUpload) -> AppResult<()> {
        upload.validate_with_limit(self.max_bytes).map_err(|e| {
            warn!(error = %e, file = %upload.file_name, "Avatar rejected");
            AppError::UploadRejected(e)
        })
    }

    /// Upload a new avatar and return its URL
    ///
    /// POST /users/@me/avatar
    #[instrument(skip(self, upload), fields(file = %upload.file_name, size = upload.size()))]
    pub async fn upload(&self, upload: AvatarUpload) -> AppResult<String> {
        self.check(&upload)?;

        let AvatarUpload {
            file_name,
            content_type,
            bytes,
        } = upload;
        let part = Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(&content_type)
            .map_err(|e| {
                let reason = format!("{content_type} ({e})");
                AppError::UploadRejected(DomainError::UnsupportedMediaType(reason))
            })?;
        let form = Form::new().part(AVATAR_FIELD, part);

        let url = self.api.endpoint(&["users", "@me", "avatar"])?;
        let request = ApiClient::authorize(self.api.post(url), &self.credential).multipart(form);
        let response: AvatarResponse = self.api.send_json(request).await?;

        info!(avatar_url = %response.avatar_url, "Avatar uploaded");
        Ok(response.avatar_url)
    }

    /// Remove the current avatar
    ///
    /// DELETE /users/@me/avatar
    #[instrument(skip(self))]
    pub async fn delete(&self) -> AppResult<()> {
        let url = self.api.endpoint(&["users", "@me", "avatar"])?;
        let request = ApiClient::authorize(self.api.delete(url), &self.credential);
        self.api.send(request).await?;

        info!("Avatar deleted");
        Ok(())
    }
}
