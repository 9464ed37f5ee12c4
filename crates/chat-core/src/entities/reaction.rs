//! Reaction entity - represents an emoji reaction on a message

use serde::{Deserialize, Serialize};

use crate::value_objects::MessageId;

/// One emoji and the users who reacted with it
///
/// Snapshot data owned by the message; the client only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Reaction {
    pub emoji: String,
    #[serde(default)]
    pub users: Vec<String>,
}

impl Reaction {
    /// Create a new Reaction
    pub fn new(emoji: impl Into<String>, users: Vec<String>) -> Self {
        Self {
            emoji: emoji.into(),
            users,
        }
    }

    /// Check if reaction uses a specific emoji
    #[inline]
    pub fn is_emoji(&self, emoji: &str) -> bool {
        self.emoji == emoji
    }

    /// Number of reacting users in this entry
    #[inline]
    pub fn count(&self) -> usize {
        self.users.len()
    }

    /// Check if `user_id` reacted in this entry
    pub fn includes(&self, user_id: &str) -> bool {
        self.users.iter().any(|u| u == user_id)
    }
}

/// Ordered reactions attached to a message. Duplicate emoji are allowed.
pub type ReactionSet = Vec<Reaction>;

/// Aggregated reaction count for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReactionCount {
    pub emoji: String,
    pub count: usize,
    pub me: bool,
}

impl ReactionCount {
    /// Create a new ReactionCount
    pub fn new(emoji: impl Into<String>, count: usize, me: bool) -> Self {
        Self {
            emoji: emoji.into(),
            count,
            me,
        }
    }
}

/// A state change the reaction store is asked to apply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ReactionRequest {
    Add { message_id: MessageId, emoji: String },
    Remove { message_id: MessageId, emoji: String },
}

impl ReactionRequest {
    pub fn message_id(&self) -> &MessageId {
        match self {
            Self::Add { message_id, .. } | Self::Remove { message_id, .. } => message_id,
        }
    }

    pub fn emoji(&self) -> &str {
        match self {
            Self::Add { emoji, .. } | Self::Remove { emoji, .. } => emoji,
        }
    }
}
