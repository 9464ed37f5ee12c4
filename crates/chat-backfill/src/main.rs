//! Embedding backfill entry point
//!
//! Run with:
//! ```bash
//! cargo run -p chat-backfill
//! ```
//!
//! Configuration is loaded from environment variables or a `.env` file:
//! `API_BASE_URL`, `BACKFILL_EMAIL`, `BACKFILL_PASSWORD`, `BACKFILL_WORKSPACE_ID`.

use std::process::ExitCode;

use chat_common::{
    try_init_tracing_with_config, AppError, BackfillConfig, Environment, TracingConfig,
};
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    let config = BackfillConfig::from_env();

    // Tracing format depends on APP_ENV, which may itself be invalid
    let env = config
        .as_ref()
        .map_or(Environment::default(), |c| c.client.env);
    if let Err(e) = try_init_tracing_with_config(TracingConfig::for_environment(env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    let result = match config {
        Ok(config) => chat_backfill::run(&config)
            .await
            .map(|report| chat_backfill::summary(&config.workspace_id, &report)),
        Err(e) => Err(AppError::from(e)),
    };

    match &result {
        Ok(line) => println!("{line}"),
        Err(err) => {
            error!(error = %err, code = err.error_code(), "Backfill failed");
            eprintln!("Backfill failed: {err}");
        }
    }
    ExitCode::from(chat_backfill::exit_status(&result))
}
