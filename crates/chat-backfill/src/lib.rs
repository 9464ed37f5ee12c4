//! # chat-backfill
//!
//! Logs in with the configured service account and asks the backend to
//! rebuild message embeddings for one workspace.

use chat_client::{ApiClient, AuthClient, BackfillReport, SearchClient};
use chat_common::{AppResult, BackfillConfig};
use tracing::{info, instrument};

/// Log in, then trigger the backfill. Any failed step ends the sequence.
#[instrument(skip(config), fields(workspace_id = %config.workspace_id))]
pub async fn run(config: &BackfillConfig) -> AppResult<BackfillReport> {
    let api = ApiClient::from_config(&config.client)?;

    info!(base_url = %api.base_url(), "Logging in");
    let credential = AuthClient::new(api.clone())
        .login(&config.email, &config.password)
        .await?;

    info!("Requesting embedding backfill");
    SearchClient::new(api, credential)
        .backfill_embeddings(&config.workspace_id)
        .await
}

/// Process exit status for a finished run: 0 on success, 1 on any failure
pub fn exit_status<T>(result: &AppResult<T>) -> u8 {
    u8::from(result.is_err())
}

/// One-line human summary printed on success
pub fn summary(workspace_id: &str, report: &BackfillReport) -> String {
    let mut line = format!(
        "Backfill {:?} for workspace {workspace_id}: {} messages processed",
        report.status, report.processed
    );
    if let Some(message) = &report.message {
        line.push_str(" (");
        line.push_str(message);
        line.push(')');
    }
    line
}
