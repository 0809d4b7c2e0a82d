//! Bot content loaded from Fluent resources.
//!
//! Every reply text and every menu label lives in `locales/<locale>/main.ftl`.
//! The router never hard-codes a string a customer can see; it asks
//! [`Messages`] for the text behind a [`MessageKey`].

use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::{FluentArgs, FluentResource, FluentValue};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::warn;
use unic_langid::LanguageIdentifier;

/// Identifiers of every message the bot needs from its content source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    Welcome,
    MainMenu,
    OrderPrompt,
    OrderConfirmed,
    OrderRejected,
    OrderNotification,
    NoHandle,
    About,
    Delivery,
    Contacts,
    LabelLeaveOrder,
    LabelAbout,
    LabelDelivery,
    LabelContacts,
    LabelBack,
}

impl MessageKey {
    pub const ALL: [MessageKey; 15] = [
        MessageKey::Welcome,
        MessageKey::MainMenu,
        MessageKey::OrderPrompt,
        MessageKey::OrderConfirmed,
        MessageKey::OrderRejected,
        MessageKey::OrderNotification,
        MessageKey::NoHandle,
        MessageKey::About,
        MessageKey::Delivery,
        MessageKey::Contacts,
        MessageKey::LabelLeaveOrder,
        MessageKey::LabelAbout,
        MessageKey::LabelDelivery,
        MessageKey::LabelContacts,
        MessageKey::LabelBack,
    ];

    /// Fluent message id
    pub fn id(self) -> &'static str {
        match self {
            MessageKey::Welcome => "welcome",
            MessageKey::MainMenu => "main-menu",
            MessageKey::OrderPrompt => "order-prompt",
            MessageKey::OrderConfirmed => "order-confirmed",
            MessageKey::OrderRejected => "order-rejected",
            MessageKey::OrderNotification => "order-notification",
            MessageKey::NoHandle => "no-handle",
            MessageKey::About => "about",
            MessageKey::Delivery => "delivery",
            MessageKey::Contacts => "contacts",
            MessageKey::LabelLeaveOrder => "label-leave-order",
            MessageKey::LabelAbout => "label-about",
            MessageKey::LabelDelivery => "label-delivery",
            MessageKey::LabelContacts => "label-contacts",
            MessageKey::LabelBack => "label-back",
        }
    }
}

/// Errors raised while loading content
#[derive(Debug, Error)]
pub enum LocalizationError {
    #[error("invalid locale identifier '{0}'")]
    InvalidLocale(String),
    #[error("failed to read content file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("content for locale '{locale}' has {count} syntax error(s)")]
    Syntax { locale: String, count: usize },
    #[error("content for locale '{locale}' is missing message '{key}'")]
    MissingKey { locale: String, key: &'static str },
}

/// Resolved content for a single locale.
///
/// Cheap to clone; the bundle is shared behind an `Arc` and is safe to
/// use from concurrent handler tasks.
#[derive(Clone)]
pub struct Messages {
    locale: String,
    bundle: Arc<FluentBundle<FluentResource>>,
}

impl std::fmt::Debug for Messages {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Messages")
            .field("locale", &self.locale)
            .finish_non_exhaustive()
    }
}

impl Messages {
    /// Load `<dir>/<locale>/main.ftl`
    pub fn load(dir: &Path, locale: &str) -> Result<Self, LocalizationError> {
        let path = dir.join(locale).join("main.ftl");
        let source = fs::read_to_string(&path).map_err(|source| LocalizationError::Read {
            path: path.clone(),
            source,
        })?;

        Self::from_source(locale, source)
    }

    /// Build content from Fluent source text, checking every [`MessageKey`] resolves
    pub fn from_source(locale: &str, source: impl Into<String>) -> Result<Self, LocalizationError> {
        let langid: LanguageIdentifier = locale
            .parse()
            .map_err(|_| LocalizationError::InvalidLocale(locale.to_string()))?;

        let resource = FluentResource::try_new(source.into()).map_err(|(_, errors)| {
            LocalizationError::Syntax {
                locale: locale.to_string(),
                count: errors.len(),
            }
        })?;

        let mut bundle = FluentBundle::new_concurrent(vec![langid]);
        // Labels are compared byte-for-byte with button presses, so no bidi marks.
        bundle.set_use_isolating(false);
        bundle
            .add_resource(resource)
            .map_err(|errors| LocalizationError::Syntax {
                locale: locale.to_string(),
                count: errors.len(),
            })?;

        for key in MessageKey::ALL {
            let has_value = bundle
                .get_message(key.id())
                .and_then(|msg| msg.value())
                .is_some();
            if !has_value {
                return Err(LocalizationError::MissingKey {
                    locale: locale.to_string(),
                    key: key.id(),
                });
            }
        }

        Ok(Self {
            locale: locale.to_string(),
            bundle: Arc::new(bundle),
        })
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Get a message without arguments
    pub fn text(&self, key: MessageKey) -> String {
        self.format(key, None)
    }

    /// Get a message with simple string arguments
    pub fn text_with_args(&self, key: MessageKey, args: &[(&str, &str)]) -> String {
        let fluent_args = FluentArgs::from_iter(
            args.iter()
                .map(|(name, value)| (*name, FluentValue::from(*value))),
        );
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: MessageKey, args: Option<&FluentArgs>) -> String {
        let Some(pattern) = self
            .bundle
            .get_message(key.id())
            .and_then(|msg| msg.value())
        else {
            return format!("Missing translation: {}", key.id());
        };

        let mut errors = Vec::new();
        let value = self.bundle.format_pattern(pattern, args, &mut errors);
        if !errors.is_empty() {
            warn!(key = key.id(), locale = %self.locale, errors = ?errors, "Message formatted with errors");
        }

        value.into_owned()
    }
}
