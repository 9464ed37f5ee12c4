//! # chat-core
//!
//! Client-side domain layer: avatar identity derivation, reaction snapshots
//! and the reaction bar, avatar upload validation.
//! This crate performs no I/O and has no dependency on the HTTP stack.

pub mod entities;
pub mod error;
pub mod reaction_bar;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    initial_for, resolve_avatar, AvatarIdentity, AvatarUpload, Reaction, ReactionCount,
    ReactionRequest, ReactionSet, MAX_AVATAR_BYTES, SENTINEL_INITIAL,
};
pub use error::DomainError;
pub use reaction_bar::{ReactionBar, PICKER_EMOJIS};
pub use traits::ReactionHandler;
pub use value_objects::{AvatarColor, AvatarSize, MessageId};
