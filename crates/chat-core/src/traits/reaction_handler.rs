//! Reaction handler trait (port) - where reaction selections go
//!
//! The reaction bar only forwards intent. Whoever owns message data (a
//! backend, a local store) implements this and decides what the request
//! means for membership.

use crate::entities::ReactionRequest;
use crate::value_objects::MessageId;

/// Receives reaction requests from a reaction bar
pub trait ReactionHandler {
    /// The current user picked `emoji` for `message_id`
    fn add_reaction(&self, message_id: &MessageId, emoji: &str);

    /// The current user asked to withdraw `emoji` from `message_id`
    fn remove_reaction(&self, message_id: &MessageId, emoji: &str);
}

/// Any closure over [`ReactionRequest`] is a handler
impl<F> ReactionHandler for F
where
    F: Fn(ReactionRequest),
{
    fn add_reaction(&self, message_id: &MessageId, emoji: &str) {
        self(ReactionRequest::Add {
            message_id: message_id.clone(),
            emoji: emoji.to_string(),
        });
    }

    fn remove_reaction(&self, message_id: &MessageId, emoji: &str) {
        self(ReactionRequest::Remove {
            message_id: message_id.clone(),
            emoji: emoji.to_string(),
        });
    }
}
