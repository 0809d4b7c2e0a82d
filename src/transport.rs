//! Outbound side of the chat platform.
//!
//! Handlers talk to [`ChatTransport`] rather than to a `Bot` directly so the
//! routing logic can run against any sender.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{KeyboardButton, KeyboardMarkup, KeyboardRemove, ParseMode, ReplyMarkup};
use thiserror::Error;
use tracing::warn;

/// Keyboard attached to an outbound message
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ReplyLayout {
    /// Leave whatever keyboard the chat already shows
    #[default]
    None,
    /// Reply keyboard, one inner vec per row of button labels
    Keyboard(Vec<Vec<String>>),
    RemoveKeyboard,
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("failed to send message to chat {chat_id}: {source}")]
    Send {
        chat_id: ChatId,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Send one text message. Text may use the HTML subset (`<b>`, `<code>`).
    async fn send_text(
        &self,
        chat_id: ChatId,
        text: &str,
        layout: ReplyLayout,
    ) -> Result<(), TransportError>;
}

/// Telegram Bot API transport using teloxide
#[derive(Clone)]
pub struct TelegramTransport {
    bot: Bot,
}

impl TelegramTransport {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

/// Convert label rows into a resizable reply keyboard
pub fn keyboard_markup(rows: &[Vec<String>]) -> KeyboardMarkup {
    let buttons = rows
        .iter()
        .map(|row| row.iter().map(KeyboardButton::new).collect::<Vec<_>>())
        .collect::<Vec<_>>();

    KeyboardMarkup::new(buttons).resize_keyboard()
}

/// Telegram markup for a layout; `None` sends no markup at all
pub fn reply_markup(layout: ReplyLayout) -> Option<ReplyMarkup> {
    match layout {
        ReplyLayout::None => None,
        ReplyLayout::Keyboard(rows) => Some(ReplyMarkup::Keyboard(keyboard_markup(&rows))),
        ReplyLayout::RemoveKeyboard => Some(ReplyMarkup::KeyboardRemove(KeyboardRemove::new())),
    }
}

#[async_trait]
impl ChatTransport for TelegramTransport {
    async fn send_text(
        &self,
        chat_id: ChatId,
        text: &str,
        layout: ReplyLayout,
    ) -> Result<(), TransportError> {
        let mut request = self
            .bot
            .send_message(chat_id, text)
            .parse_mode(ParseMode::Html);
        if let Some(markup) = reply_markup(layout) {
            request = request.reply_markup(markup);
        }

        request.await.map(|_| ()).map_err(|e| {
            warn!(user_id = %chat_id, error = %e, "Failed to send message");
            TransportError::Send {
                chat_id,
                source: Box::new(e),
            }
        })
    }
}
