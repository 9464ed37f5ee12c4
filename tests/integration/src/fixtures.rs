//! Test fixtures and data generators
//!
//! Shared constants the mock backend and the tests agree on.

use chat_core::{AvatarUpload, Reaction, ReactionSet};

pub const TEST_EMAIL: &str = "indexer@example.com";
pub const TEST_PASSWORD: &str = "TestPass123!";
pub const TEST_TOKEN: &str = "test-access-token";
pub const AVATAR_URL: &str = "/avatars/me/3f2a.png";

/// Workspace the backend reports as completed with [`PROCESSED_COUNT`]
pub const TEST_WORKSPACE: &str = "ws-general";
pub const PROCESSED_COUNT: u64 = 42;
/// Workspace whose backfill job is reported as failed
pub const FAILING_WORKSPACE: &str = "ws-offline";
/// Workspace that makes the backend answer 500
pub const SERVER_ERROR_WORKSPACE: &str = "ws-crash";

/// A small valid PNG-typed payload
pub fn small_png() -> AvatarUpload {
    AvatarUpload::new("me.png", "image/png", vec![0x89, b'P', b'N', b'G', 0, 1, 2, 3])
}

/// A 3 MB image, over the avatar limit
pub fn oversized_png() -> AvatarUpload {
    AvatarUpload::new("huge.png", "image/png", vec![0; 3 * 1024 * 1024])
}

/// A plain-text file
pub fn text_file() -> AvatarUpload {
    AvatarUpload::new("notes.txt", "text/plain", b"not an image".to_vec())
}

/// Reactions as the backend would send them with a message
pub fn sample_reactions() -> ReactionSet {
    vec![
        Reaction::new("👍", vec!["u1".to_string(), "u2".to_string()]),
        Reaction::new("😂", vec!["u3".to_string()]),
    ]
}
