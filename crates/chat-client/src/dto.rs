//! Request and response bodies exchanged with the backend
//!
//! One explicit schema per endpoint. Unknown fields are ignored; missing
//! required fields are a decode error rather than a silent fallback.

use serde::{Deserialize, Serialize};

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Login response
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
}

/// Avatar upload response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvatarResponse {
    pub avatar_url: String,
}

/// Embedding backfill request
#[derive(Debug, Serialize)]
pub struct BackfillRequest<'a> {
    pub workspace_id: &'a str,
}

/// State of a backfill job as reported by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackfillStatus {
    Queued,
    Running,
    Completed,
    Failed,
    #[serde(other)]
    Unknown,
}

impl BackfillStatus {
    /// Whether the backend accepted the job
    pub fn is_success(self) -> bool {
        matches!(self, Self::Queued | Self::Running | Self::Completed)
    }
}

/// Embedding backfill response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackfillReport {
    pub status: BackfillStatus,
    #[serde(default)]
    pub processed: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Error body returned with non-2xx statuses
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
}
