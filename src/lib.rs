//! # Tennis Orders Telegram Bot
//!
//! A Telegram bot that shows a small menu, collects a free-text order
//! description from a customer and forwards it to a single administrator.

pub mod bot;
pub mod config;
pub mod dialogue;
pub mod localization;
pub mod transport;
