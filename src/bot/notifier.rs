//! Forwarding of completed orders to the administrator chat

use std::sync::Arc;
use teloxide::types::ChatId;
use tracing::info;

use crate::localization::Messages;
use crate::transport::{ChatTransport, ReplyLayout, TransportError};

use super::ui_builder::format_order_notification;

/// A customer's order, built only to produce the admin notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSubmission {
    /// Public username without the leading `@`
    pub handle: Option<String>,
    pub sender_id: i64,
    pub text: String,
}

/// Sends order notifications to the single administrator chat
#[derive(Clone)]
pub struct Notifier {
    admin_chat_id: ChatId,
    transport: Arc<dyn ChatTransport>,
    messages: Messages,
}

impl Notifier {
    pub fn new(admin_chat_id: ChatId, transport: Arc<dyn ChatTransport>, messages: Messages) -> Self {
        Self {
            admin_chat_id,
            transport,
            messages,
        }
    }

    pub fn admin_chat_id(&self) -> ChatId {
        self.admin_chat_id
    }

    /// One best-effort send, no retry
    pub async fn notify(&self, submission: &OrderSubmission) -> Result<(), TransportError> {
        let text = format_order_notification(&self.messages, submission);
        self.transport
            .send_text(self.admin_chat_id, &text, ReplyLayout::None)
            .await?;

        info!(
            admin_id = %self.admin_chat_id,
            sender_id = submission.sender_id,
            order_length = submission.text.len(),
            "Order forwarded to administrator"
        );
        Ok(())
    }
}
