//! Process configuration read from the environment (and `.env`, if present).

use std::env;
use std::fmt;
use std::num::ParseIntError;
use std::path::PathBuf;
use teloxide::types::ChatId;
use thiserror::Error;

use crate::localization::{LocalizationError, Messages};

pub const DEFAULT_LOCALE: &str = "ru";
pub const DEFAULT_LOCALES_DIR: &str = "./locales";

/// Errors that stop the bot before it starts polling
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("ADMIN_ID must be an integer chat id, got '{value}': {source}")]
    InvalidAdminId {
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error(transparent)]
    Localization(#[from] LocalizationError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Clone)]
pub struct Config {
    pub bot_token: String,
    pub admin_chat_id: ChatId,
    pub locale: String,
    pub locales_dir: PathBuf,
    pub log_format: LogFormat,
}

// The token is a secret and stays out of logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("bot_token", &"<redacted>")
            .field("admin_chat_id", &self.admin_chat_id)
            .field("locale", &self.locale)
            .field("locales_dir", &self.locales_dir)
            .field("log_format", &self.log_format)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let bot_token = non_empty("BOT_TOKEN").ok_or(ConfigError::Missing("BOT_TOKEN"))?;

        let admin_raw = non_empty("ADMIN_ID").ok_or(ConfigError::Missing("ADMIN_ID"))?;
        let admin_id = admin_raw
            .trim()
            .parse::<i64>()
            .map_err(|source| ConfigError::InvalidAdminId {
                value: admin_raw.clone(),
                source,
            })?;

        let locale = non_empty("BOT_LOCALE").unwrap_or_else(|| DEFAULT_LOCALE.to_string());
        let locales_dir = non_empty("LOCALES_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOCALES_DIR));

        let log_format = match non_empty("LOG_FORMAT").as_deref() {
            Some(format) if format.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };

        Ok(Self {
            bot_token,
            admin_chat_id: ChatId(admin_id),
            locale: locale.trim().to_string(),
            locales_dir,
            log_format,
        })
    }

    /// Load the configured locale's content
    pub fn load_messages(&self) -> Result<Messages, ConfigError> {
        Ok(Messages::load(&self.locales_dir, &self.locale)?)
    }
}
