//! Bot module for handling Telegram interactions
//!
//! This module is split into several submodules:
//! - `intent`: Classifies incoming text into commands, menu labels or free text
//! - `dialogue_manager`: The conversation state transition table
//! - `message_handler`: Runs each message through the table and sends replies
//! - `notifier`: Forwards submitted orders to the administrator
//! - `ui_builder`: Creates keyboards and formats messages

pub mod dialogue_manager;
pub mod intent;
pub mod message_handler;
pub mod notifier;
pub mod ui_builder;

// Re-export main handler types for use in main.rs
pub use message_handler::{message_handler, InboundMessage, OrderBot};
pub use notifier::{Notifier, OrderSubmission};
