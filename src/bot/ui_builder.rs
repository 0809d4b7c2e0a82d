//! UI Builder module for creating keyboards and formatting messages

use teloxide::utils::html;

use crate::localization::{MessageKey, Messages};
use crate::transport::ReplyLayout;

use super::intent::MenuLabels;
use super::notifier::OrderSubmission;

/// Main menu: one menu entry per row
pub fn main_menu_layout(labels: &MenuLabels) -> ReplyLayout {
    ReplyLayout::Keyboard(vec![
        vec![labels.leave_order.clone()],
        vec![labels.about.clone()],
        vec![labels.delivery.clone()],
        vec![labels.contacts.clone()],
    ])
}

/// Single back button shown under informational pages
pub fn back_layout(labels: &MenuLabels) -> ReplyLayout {
    ReplyLayout::Keyboard(vec![vec![labels.back.clone()]])
}

/// Format an order for the administrator.
///
/// Customer text is HTML-escaped; the sender id is wrapped in `<code>`
/// by the content template.
pub fn format_order_notification(messages: &Messages, submission: &OrderSubmission) -> String {
    let handle = match submission.handle.as_deref() {
        Some(username) => format!("@{}", html::escape(username)),
        None => messages.text(MessageKey::NoHandle),
    };
    let text = html::escape(&submission.text);
    let id = submission.sender_id.to_string();

    messages.text_with_args(
        MessageKey::OrderNotification,
        &[("handle", &handle), ("text", &text), ("id", &id)],
    )
}
