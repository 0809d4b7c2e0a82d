//! Order dialogue module for tracking where each customer is in the conversation.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use teloxide::dispatching::dialogue::{Dialogue, InMemStorage};
use teloxide::types::ChatId;

/// Represents the conversation state of one customer
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConversationState {
    #[default]
    Idle,
    /// The next text message is the order description
    AwaitingOrderText,
}

/// Type alias for our order dialogue
pub type OrderDialogue = Dialogue<ConversationState, InMemStorage<ConversationState>>;

/// Process-wide conversation state, keyed by chat.
///
/// A chat that was never seen reads as [`ConversationState::Idle`]. Entries
/// are created on first write and never removed; `clear` writes `Idle`.
#[derive(Clone)]
pub struct ConversationStore {
    storage: Arc<InMemStorage<ConversationState>>,
}

impl Default for ConversationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversationStore {
    pub fn new() -> Self {
        Self {
            storage: InMemStorage::new(),
        }
    }

    pub fn dialogue(&self, chat_id: ChatId) -> OrderDialogue {
        Dialogue::new(Arc::clone(&self.storage), chat_id)
    }

    pub async fn get(&self, chat_id: ChatId) -> Result<ConversationState> {
        Ok(self.dialogue(chat_id).get().await?.unwrap_or_default())
    }

    pub async fn set(&self, chat_id: ChatId, state: ConversationState) -> Result<()> {
        self.dialogue(chat_id).update(state).await?;
        Ok(())
    }

    pub async fn clear(&self, chat_id: ChatId) -> Result<()> {
        self.set(chat_id, ConversationState::Idle).await
    }
}

/// Validates an order description, returning it trimmed.
///
/// Whitespace-only input and menu labels, even padded ones, are not orders.
pub fn validate_order_text<'a>(text: &'a str, labels: &[&str]) -> Option<&'a str> {
    let trimmed = text.trim();

    if trimmed.is_empty() || labels.iter().any(|label| *label == trimmed) {
        return None;
    }

    Some(trimmed)
}
