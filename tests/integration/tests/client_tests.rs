//! Client Integration Tests
//!
//! Each test spawns its own in-process mock backend; no external services
//! are required.
//!
//! Run with: cargo test -p integration-tests --test client_tests

use chat_client::{
    reaction_channel, AuthClient, AvatarService, BackfillStatus, ReactionClient, SearchClient,
};
use chat_common::{AppError, BackfillConfig, ClientConfig, Credential};
use chat_core::{DomainError, MessageId, ReactionBar, ReactionCount};
use integration_tests::{fixtures::*, valid_credential, MockBackend, Recorded};

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_login() {
    let backend = MockBackend::start().await.expect("Failed to start backend");
    let auth = AuthClient::new(backend.api());

    let credential = auth.login(TEST_EMAIL, TEST_PASSWORD).await.unwrap();

    assert_eq!(credential.token(), TEST_TOKEN);
    assert_eq!(
        backend.recorded(),
        vec![Recorded::Login {
            email: TEST_EMAIL.to_string()
        }]
    );
}

#[tokio::test]
async fn test_login_wrong_password() {
    let backend = MockBackend::start().await.expect("Failed to start backend");
    let auth = AuthClient::new(backend.api());

    let err = auth.login(TEST_EMAIL, "wrong").await.unwrap_err();

    assert!(matches!(err, AppError::InvalidCredentials));
    assert!(backend.recorded().is_empty());
}

#[tokio::test]
async fn test_login_requires_input() {
    let backend = MockBackend::start().await.expect("Failed to start backend");
    let auth = AuthClient::new(backend.api());

    let err = auth.login("", TEST_PASSWORD).await.unwrap_err();

    assert!(matches!(err, AppError::InvalidInput(_)));
    assert_eq!(backend.hits(), 0);
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    // Bind and release a port so nothing is listening on it
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = chat_client::ApiClient::new(&format!("http://{addr}/api")).unwrap();
    let err = AuthClient::new(api)
        .login(TEST_EMAIL, TEST_PASSWORD)
        .await
        .unwrap_err();

    assert!(err.is_transport_error(), "unexpected error: {err:?}");
}

// ============================================================================
// Avatar Tests
// ============================================================================

#[tokio::test]
async fn test_upload_avatar() {
    let backend = MockBackend::start().await.expect("Failed to start backend");
    let service = AvatarService::new(backend.api(), valid_credential());

    let url = service.upload(small_png()).await.unwrap();

    assert_eq!(url, AVATAR_URL);
    assert!(matches!(
        backend.recorded().as_slice(),
        [Recorded::AvatarUpload { body_len }] if *body_len > small_png().size()
    ));
}

#[tokio::test]
async fn test_upload_rejects_oversized_before_any_request() {
    let backend = MockBackend::start().await.expect("Failed to start backend");
    let service = AvatarService::new(backend.api(), valid_credential());

    let err = service.upload(oversized_png()).await.unwrap_err();

    assert!(matches!(
        err,
        AppError::UploadRejected(DomainError::FileTooLarge { .. })
    ));
    assert_eq!(backend.hits(), 0);
}

#[tokio::test]
async fn test_upload_honors_configured_limit() {
    let backend = MockBackend::start().await.expect("Failed to start backend");
    let config = ClientConfig {
        avatar_max_bytes: 4,
        ..backend.client_config()
    };
    let service = AvatarService::from_config(backend.api(), valid_credential(), &config);

    let err = service.upload(small_png()).await.unwrap_err();

    assert!(matches!(
        err,
        AppError::UploadRejected(DomainError::FileTooLarge { size: 8, max: 4 })
    ));
    assert_eq!(backend.hits(), 0);
}

#[tokio::test]
async fn test_upload_rejects_text_before_any_request() {
    let backend = MockBackend::start().await.expect("Failed to start backend");
    let service = AvatarService::new(backend.api(), valid_credential());

    let err = service.upload(text_file()).await.unwrap_err();

    assert!(matches!(
        err,
        AppError::UploadRejected(DomainError::UnsupportedMediaType(_))
    ));
    assert_eq!(backend.hits(), 0);
}

#[tokio::test]
async fn test_upload_with_stale_credential() {
    let backend = MockBackend::start().await.expect("Failed to start backend");
    let service = AvatarService::new(backend.api(), Credential::new("expired").unwrap());

    let err = service.upload(small_png()).await.unwrap_err();

    assert!(matches!(err, AppError::Unauthenticated));
    assert_eq!(backend.hits(), 1);
    assert!(backend.recorded().is_empty());
}

#[tokio::test]
async fn test_delete_avatar() {
    let backend = MockBackend::start().await.expect("Failed to start backend");
    let service = AvatarService::new(backend.api(), valid_credential());

    service.delete().await.unwrap();

    assert_eq!(backend.recorded(), vec![Recorded::AvatarDelete]);
}

// ============================================================================
// Reaction Tests
// ============================================================================

#[tokio::test]
async fn test_add_and_remove_reaction() {
    let backend = MockBackend::start().await.expect("Failed to start backend");
    let client = ReactionClient::new(backend.api(), valid_credential());
    let message_id = MessageId::new("1201");

    client.add(&message_id, "🎉").await.unwrap();
    client.remove(&message_id, "🎉").await.unwrap();

    assert_eq!(
        backend.recorded(),
        vec![
            Recorded::ReactionAdd {
                message_id: "1201".to_string(),
                emoji: "🎉".to_string(),
            },
            Recorded::ReactionRemove {
                message_id: "1201".to_string(),
                emoji: "🎉".to_string(),
            },
        ]
    );
}

#[tokio::test]
async fn test_remove_reaction_unknown_message() {
    let backend = MockBackend::start().await.expect("Failed to start backend");
    let client = ReactionClient::new(backend.api(), valid_credential());

    let err = client
        .remove(&MessageId::new("missing"), "👍")
        .await
        .unwrap_err();

    match err {
        AppError::Api { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Message not found");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_reaction_bar_drives_client() {
    let backend = MockBackend::start().await.expect("Failed to start backend");
    let client = ReactionClient::new(backend.api(), valid_credential());
    let (handler, requests) = reaction_channel();

    let mut bar = ReactionBar::new(MessageId::new("77"), Some(sample_reactions()), handler)
        .with_current_user("u3");
    assert_eq!(
        bar.render(),
        vec![
            ReactionCount::new("👍", 2, false),
            ReactionCount::new("😂", 1, true),
        ]
    );

    bar.toggle_picker();
    bar.select_emoji("👍");
    assert!(!bar.is_picker_open());
    bar.remove_emoji("😂");
    bar.select_emoji("missing-is-fine");
    drop(bar);

    let applied = client.run(requests).await;

    assert_eq!(applied, 3);
    assert_eq!(
        backend.recorded(),
        vec![
            Recorded::ReactionAdd {
                message_id: "77".to_string(),
                emoji: "👍".to_string(),
            },
            Recorded::ReactionRemove {
                message_id: "77".to_string(),
                emoji: "😂".to_string(),
            },
            Recorded::ReactionAdd {
                message_id: "77".to_string(),
                emoji: "missing-is-fine".to_string(),
            },
        ]
    );
}

#[tokio::test]
async fn test_reaction_run_continues_after_failure() {
    let backend = MockBackend::start().await.expect("Failed to start backend");
    let client = ReactionClient::new(backend.api(), valid_credential());
    let (handler, requests) = reaction_channel();

    let mut doomed = ReactionBar::new(MessageId::new("missing"), None, handler.clone());
    let mut fine = ReactionBar::new(MessageId::new("5"), None, handler);
    doomed.remove_emoji("👍");
    fine.select_emoji("🔥");
    drop(doomed);
    drop(fine);

    assert_eq!(client.run(requests).await, 1);
    assert_eq!(backend.hits(), 2);
}

// ============================================================================
// Search / Backfill Tests
// ============================================================================

#[tokio::test]
async fn test_search_client_backfill() {
    let backend = MockBackend::start().await.expect("Failed to start backend");
    let search = SearchClient::new(backend.api(), valid_credential());

    let report = search.backfill_embeddings(TEST_WORKSPACE).await.unwrap();

    assert_eq!(report.status, BackfillStatus::Completed);
    assert_eq!(report.processed, PROCESSED_COUNT);
}

#[tokio::test]
async fn test_backfill_tool_success() {
    let backend = MockBackend::start().await.expect("Failed to start backend");
    let config = backend.backfill_config(TEST_WORKSPACE);

    let report = chat_backfill::run(&config).await.unwrap();

    assert_eq!(report.processed, PROCESSED_COUNT);
    assert_eq!(
        backend.recorded(),
        vec![
            Recorded::Login {
                email: TEST_EMAIL.to_string()
            },
            Recorded::Backfill {
                workspace_id: TEST_WORKSPACE.to_string()
            },
        ]
    );
    assert_eq!(
        chat_backfill::summary(TEST_WORKSPACE, &report),
        "Backfill Completed for workspace ws-general: 42 messages processed"
    );
}

#[tokio::test]
async fn test_backfill_tool_failed_job_is_error() {
    let backend = MockBackend::start().await.expect("Failed to start backend");
    let config = backend.backfill_config(FAILING_WORKSPACE);

    let result = chat_backfill::run(&config).await;

    assert_eq!(chat_backfill::exit_status(&result), 1);
    assert!(matches!(&result, Err(AppError::Rejected(msg)) if msg == "index offline"));
}

#[tokio::test]
async fn test_backfill_tool_server_error() {
    let backend = MockBackend::start().await.expect("Failed to start backend");
    let config = backend.backfill_config(SERVER_ERROR_WORKSPACE);

    let result = chat_backfill::run(&config).await;

    assert_eq!(chat_backfill::exit_status(&result), 1);
    assert!(matches!(result, Err(AppError::Api { status: 500, .. })));
}

#[tokio::test]
async fn test_backfill_tool_stops_after_failed_login() {
    let backend = MockBackend::start().await.expect("Failed to start backend");
    let config = BackfillConfig {
        password: "nope".to_string(),
        ..backend.backfill_config(TEST_WORKSPACE)
    };

    let err = chat_backfill::run(&config).await.unwrap_err();

    assert!(matches!(err, AppError::InvalidCredentials));
    assert_eq!(backend.hits(), 1);
    assert!(backend.recorded().is_empty());
}

#[tokio::test]
async fn test_backfill_tool_bad_base_url() {
    let config = BackfillConfig {
        client: ClientConfig::with_base_url("not a url"),
        email: TEST_EMAIL.to_string(),
        password: TEST_PASSWORD.to_string(),
        workspace_id: TEST_WORKSPACE.to_string(),
    };

    let result = chat_backfill::run(&config).await;

    assert_eq!(chat_backfill::exit_status(&result), 1);
    assert!(matches!(result, Err(AppError::Config(_))));
}
