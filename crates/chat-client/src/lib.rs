//! # chat-client
//!
//! HTTP clients for the chat backend: login, avatar upload, reactions and
//! search index maintenance. Every authenticated client takes its
//! [`Credential`](chat_common::Credential) explicitly.

pub mod api;
pub mod auth;
pub mod avatar;
pub mod dto;
pub mod reactions;
pub mod search;

pub use api::ApiClient;
pub use auth::AuthClient;
pub use avatar::{AvatarService, AVATAR_FIELD};
pub use dto::{AvatarResponse, BackfillReport, BackfillStatus};
pub use reactions::{reaction_channel, ReactionClient, ReactionSender};
pub use search::SearchClient;
