//! Message Handler module for processing incoming Telegram messages

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{debug, error, info};

use crate::dialogue::ConversationStore;
use crate::localization::{MessageKey, Messages};
use crate::transport::{ChatTransport, ReplyLayout};

use super::dialogue_manager::{transition, Action, Transition};
use super::intent::MenuLabels;
use super::notifier::{Notifier, OrderSubmission};
use super::ui_builder::{back_layout, main_menu_layout};

/// The parts of an incoming message the router looks at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    pub chat_id: ChatId,
    pub sender_id: i64,
    /// Username without the leading `@`
    pub handle: Option<String>,
    /// Message text; empty for photos, stickers and other non-text messages
    pub text: String,
}

impl InboundMessage {
    pub fn from_message(msg: &Message) -> Self {
        let sender = msg.from.as_ref();
        Self {
            chat_id: msg.chat.id,
            sender_id: sender.map(|user| user.id.0 as i64).unwrap_or(msg.chat.id.0),
            handle: sender.and_then(|user| user.username.clone()),
            text: msg.text().unwrap_or_default().to_string(),
        }
    }
}

/// Routes each inbound message through the conversation state machine
pub struct OrderBot {
    store: ConversationStore,
    transport: Arc<dyn ChatTransport>,
    notifier: Notifier,
    messages: Messages,
    labels: MenuLabels,
}

impl OrderBot {
    pub fn new(
        store: ConversationStore,
        transport: Arc<dyn ChatTransport>,
        messages: Messages,
        admin_chat_id: ChatId,
    ) -> Self {
        let notifier = Notifier::new(admin_chat_id, Arc::clone(&transport), messages.clone());
        let labels = MenuLabels::from_messages(&messages);
        Self {
            store,
            transport,
            notifier,
            messages,
            labels,
        }
    }

    pub fn store(&self) -> &ConversationStore {
        &self.store
    }

    /// Handle one inbound message.
    ///
    /// Callers must not run two messages from the same chat at once; the
    /// dispatcher's per-chat queue provides that.
    pub async fn handle(&self, inbound: InboundMessage) -> Result<()> {
        let chat_id = inbound.chat_id;
        let state = self.store.get(chat_id).await?;
        let intent = self.labels.classify(&inbound.text);
        debug!(user_id = %chat_id, ?state, ?intent, "Routing message");

        let Transition { action, next } = transition(state, intent, &self.labels);

        match action {
            Action::Welcome => {
                self.reply(chat_id, MessageKey::Welcome, main_menu_layout(&self.labels))
                    .await?
            }
            Action::OrderPrompt => {
                self.reply(chat_id, MessageKey::OrderPrompt, back_layout(&self.labels))
                    .await?
            }
            Action::About => {
                self.reply(chat_id, MessageKey::About, back_layout(&self.labels))
                    .await?
            }
            Action::Delivery => {
                self.reply(chat_id, MessageKey::Delivery, back_layout(&self.labels))
                    .await?
            }
            Action::Contacts => {
                self.reply(chat_id, MessageKey::Contacts, back_layout(&self.labels))
                    .await?
            }
            Action::MainMenu => {
                self.reply(chat_id, MessageKey::MainMenu, main_menu_layout(&self.labels))
                    .await?
            }
            Action::SubmitOrder(text) => self.submit_order(&inbound, text).await?,
            Action::RejectOrder => {
                debug!(user_id = %chat_id, "Empty order rejected");
                self.reply(chat_id, MessageKey::OrderRejected, main_menu_layout(&self.labels))
                    .await?
            }
            Action::Ignore => {
                debug!(user_id = %chat_id, "Ignoring unmatched text while idle");
            }
        }

        if next != state {
            self.store.set(chat_id, next).await?;
        }

        Ok(())
    }

    async fn reply(&self, chat_id: ChatId, key: MessageKey, layout: ReplyLayout) -> Result<()> {
        self.transport
            .send_text(chat_id, &self.messages.text(key), layout)
            .await?;
        Ok(())
    }

    async fn submit_order(&self, inbound: &InboundMessage, text: String) -> Result<()> {
        self.reply(
            inbound.chat_id,
            MessageKey::OrderConfirmed,
            main_menu_layout(&self.labels),
        )
        .await?;

        let submission = OrderSubmission {
            handle: inbound.handle.clone(),
            sender_id: inbound.sender_id,
            text,
        };
        info!(
            user_id = %inbound.chat_id,
            order_length = submission.text.len(),
            "Order submitted"
        );

        // The customer already has a confirmation; a failed forward is only logged.
        if let Err(e) = self.notifier.notify(&submission).await {
            error!(
                user_id = %inbound.chat_id,
                admin_id = %self.notifier.admin_chat_id(),
                error = %e,
                "Failed to forward order to administrator"
            );
        }

        Ok(())
    }
}

pub async fn message_handler(msg: Message, order_bot: Arc<OrderBot>) -> Result<()> {
    order_bot.handle(InboundMessage::from_message(&msg)).await
}
