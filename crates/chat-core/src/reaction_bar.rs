//! Reaction bar - per-message reaction counts plus an emoji picker
//!
//! The bar reads a snapshot of reactions supplied by its owner and forwards
//! every selection to a [`ReactionHandler`]. It never edits the snapshot;
//! the only state it owns is whether its picker is open.

use tracing::debug;

use crate::entities::{Reaction, ReactionCount, ReactionSet};
use crate::traits::ReactionHandler;
use crate::value_objects::MessageId;

/// Emoji offered in the picker, in display order
pub const PICKER_EMOJIS: [&str; 8] = ["👍", "❤️", "😂", "😮", "😢", "🎉", "🔥", "👏"];

/// Reaction bar for one rendered message
pub struct ReactionBar<H> {
    message_id: MessageId,
    reactions: ReactionSet,
    current_user: Option<String>,
    picker_open: bool,
    handler: H,
}

impl<H: ReactionHandler> ReactionBar<H> {
    /// Mount a bar. A missing snapshot renders as no reactions.
    pub fn new(message_id: MessageId, reactions: Option<ReactionSet>, handler: H) -> Self {
        Self {
            message_id,
            reactions: reactions.unwrap_or_default(),
            current_user: None,
            picker_open: false,
            handler,
        }
    }

    /// Mark rows the given user is part of
    pub fn with_current_user(mut self, user_id: impl Into<String>) -> Self {
        self.current_user = Some(user_id.into());
        self
    }

    pub fn message_id(&self) -> &MessageId {
        &self.message_id
    }

    pub fn reactions(&self) -> &[Reaction] {
        &self.reactions
    }

    /// Replace the snapshot with fresh data from the owner
    pub fn set_reactions(&mut self, reactions: Option<ReactionSet>) {
        self.reactions = reactions.unwrap_or_default();
    }

    /// One row per snapshot entry, in snapshot order
    pub fn render(&self) -> Vec<ReactionCount> {
        self.reactions
            .iter()
            .map(|reaction| {
                let me = self
                    .current_user
                    .as_deref()
                    .is_some_and(|user| reaction.includes(user));
                ReactionCount::new(reaction.emoji.clone(), reaction.count(), me)
            })
            .collect()
    }

    /// Emoji the picker offers
    pub fn picker_emojis(&self) -> &'static [&'static str] {
        &PICKER_EMOJIS
    }

    #[inline]
    pub fn is_picker_open(&self) -> bool {
        self.picker_open
    }

    pub fn toggle_picker(&mut self) {
        self.picker_open = !self.picker_open;
    }

    /// Forward a selection as an add request and close the picker.
    ///
    /// Emoji already present in the snapshot go through the same call; the
    /// handler decides what a repeat means.
    pub fn select_emoji(&mut self, emoji: &str) {
        debug!(message_id = %self.message_id, emoji, "Reaction selected");
        self.handler.add_reaction(&self.message_id, emoji);
        self.picker_open = false;
    }

    /// Forward an explicit removal request. Picker state is unchanged.
    pub fn remove_emoji(&mut self, emoji: &str) {
        debug!(message_id = %self.message_id, emoji, "Reaction removal requested");
        self.handler.remove_reaction(&self.message_id, emoji);
    }
}
