//! Search index maintenance client

use chat_common::{AppError, AppResult, Credential};
use tracing::{info, instrument, warn};

use crate::api::ApiClient;
use crate::dto::{BackfillReport, BackfillRequest};

/// Triggers server-side search index jobs
#[derive(Debug, Clone)]
pub struct SearchClient {
    api: ApiClient,
    credential: Credential,
}

impl SearchClient {
    /// Create a new SearchClient
    pub fn new(api: ApiClient, credential: Credential) -> Self {
        Self { api, credential }
    }

    /// Ask the backend to re-embed every message in a workspace.
    ///
    /// A report whose status is not a success is returned as an error so
    /// callers never mistake a failed job for a finished one.
    ///
    /// POST /search/backfill
    #[instrument(skip(self))]
    pub async fn backfill_embeddings(&self, workspace_id: &str) -> AppResult<BackfillReport> {
        if workspace_id.trim().is_empty() {
            return Err(AppError::invalid_input("workspace id is required"));
        }

        let url = self.api.endpoint(&["search", "backfill"])?;
        let request = ApiClient::authorize(self.api.post(url), &self.credential)
            .json(&BackfillRequest { workspace_id });
        let report: BackfillReport = self.api.send_json(request).await?;

        if !report.status.is_success() {
            warn!(status = ?report.status, message = ?report.message, "Backfill not accepted");
            return Err(AppError::Rejected(
                report
                    .message
                    .unwrap_or_else(|| format!("backfill status {:?}", report.status)),
            ));
        }

        info!(
            status = ?report.status,
            processed = report.processed,
            "Backfill accepted"
        );
        Ok(report)
    }
}
