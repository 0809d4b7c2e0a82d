//! Classification of inbound text into the bot's closed set of intents

use crate::localization::{MessageKey, Messages};

/// What an inbound message asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// `/start`, with or without a bot mention or payload
    Start,
    LeaveOrder,
    AboutUs,
    Delivery,
    Contacts,
    Back,
    /// Anything else, kept verbatim
    FreeText(String),
}

/// Menu labels the router recognises, resolved once from content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuLabels {
    pub leave_order: String,
    pub about: String,
    pub delivery: String,
    pub contacts: String,
    pub back: String,
}

impl MenuLabels {
    pub fn from_messages(messages: &Messages) -> Self {
        Self {
            leave_order: messages.text(MessageKey::LabelLeaveOrder),
            about: messages.text(MessageKey::LabelAbout),
            delivery: messages.text(MessageKey::LabelDelivery),
            contacts: messages.text(MessageKey::LabelContacts),
            back: messages.text(MessageKey::LabelBack),
        }
    }

    /// Every menu label, in keyboard order with back last
    pub fn all(&self) -> [&str; 5] {
        [
            self.leave_order.as_str(),
            self.about.as_str(),
            self.delivery.as_str(),
            self.contacts.as_str(),
            self.back.as_str(),
        ]
    }

    /// Classify raw message text. Labels match exactly, no trimming.
    pub fn classify(&self, text: &str) -> Intent {
        if is_start_command(text) {
            Intent::Start
        } else if text == self.leave_order {
            Intent::LeaveOrder
        } else if text == self.about {
            Intent::AboutUs
        } else if text == self.delivery {
            Intent::Delivery
        } else if text == self.contacts {
            Intent::Contacts
        } else if text == self.back {
            Intent::Back
        } else {
            Intent::FreeText(text.to_string())
        }
    }
}

fn is_start_command(text: &str) -> bool {
    let Some(command) = text.split_whitespace().next() else {
        return false;
    };
    let command = command.split('@').next().unwrap_or(command);
    command == "/start"
}
