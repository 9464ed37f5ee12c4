//! Reaction store client
//!
//! Applies add/remove requests for the current user against the backend,
//! and bridges the synchronous reaction bar to it through a channel.

use chat_common::{AppResult, Credential};
use chat_core::{MessageId, ReactionHandler, ReactionRequest};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{info, instrument, warn};

use crate::api::ApiClient;

/// Adds and removes the current user's reactions
#[derive(Debug, Clone)]
pub struct ReactionClient {
    api: ApiClient,
    credential: Credential,
}

impl ReactionClient {
    /// Create a new ReactionClient
    pub fn new(api: ApiClient, credential: Credential) -> Self {
        Self { api, credential }
    }

    /// Add own reaction
    ///
    /// PUT /messages/{message_id}/reactions/{emoji}/@me
    #[instrument(skip(self))]
    pub async fn add(&self, message_id: &MessageId, emoji: &str) -> AppResult<()> {
        let url = self.own_reaction_url(message_id, emoji)?;
        let request = ApiClient::authorize(self.api.put(url), &self.credential);
        self.api.send(request).await?;

        info!(message_id = %message_id, emoji, "Reaction added");
        Ok(())
    }

    /// Remove own reaction
    ///
    /// DELETE /messages/{message_id}/reactions/{emoji}/@me
    #[instrument(skip(self))]
    pub async fn remove(&self, message_id: &MessageId, emoji: &str) -> AppResult<()> {
        let url = self.own_reaction_url(message_id, emoji)?;
        let request = ApiClient::authorize(self.api.delete(url), &self.credential);
        self.api.send(request).await?;

        info!(message_id = %message_id, emoji, "Reaction removed");
        Ok(())
    }

    /// Dispatch a request coming from a reaction bar
    pub async fn apply(&self, request: &ReactionRequest) -> AppResult<()> {
        match request {
            ReactionRequest::Add { message_id, emoji } => self.add(message_id, emoji).await,
            ReactionRequest::Remove { message_id, emoji } => self.remove(message_id, emoji).await,
        }
    }

    /// Apply requests until every sender is dropped.
    ///
    /// A failed request is logged and skipped; it does not stop the loop.
    /// Returns the number of requests that succeeded.
    pub async fn run(&self, mut requests: UnboundedReceiver<ReactionRequest>) -> usize {
        let mut applied = 0;
        while let Some(request) = requests.recv().await {
            match self.apply(&request).await {
                Ok(()) => applied += 1,
                Err(e) => warn!(
                    error = %e,
                    message_id = %request.message_id(),
                    emoji = request.emoji(),
                    "Reaction request failed"
                ),
            }
        }
        applied
    }

    fn own_reaction_url(&self, message_id: &MessageId, emoji: &str) -> AppResult<reqwest::Url> {
        self.api
            .endpoint(&["messages", message_id.as_str(), "reactions", emoji, "@me"])
    }
}

/// Reaction handler that queues requests for an async [`ReactionClient`]
#[derive(Debug, Clone)]
pub struct ReactionSender {
    tx: UnboundedSender<ReactionRequest>,
}

impl ReactionSender {
    fn send(&self, request: ReactionRequest) {
        if let Err(e) = self.tx.send(request) {
            warn!(emoji = e.0.emoji(), "Reaction queue closed, request dropped");
        }
    }
}

impl ReactionHandler for ReactionSender {
    fn add_reaction(&self, message_id: &MessageId, emoji: &str) {
        self.send(ReactionRequest::Add {
            message_id: message_id.clone(),
            emoji: emoji.to_string(),
        });
    }

    fn remove_reaction(&self, message_id: &MessageId, emoji: &str) {
        self.send(ReactionRequest::Remove {
            message_id: message_id.clone(),
            emoji: emoji.to_string(),
        });
    }
}

/// Create a handler/receiver pair; feed the receiver to [`ReactionClient::run`]
pub fn reaction_channel() -> (ReactionSender, UnboundedReceiver<ReactionRequest>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (ReactionSender { tx }, rx)
}
