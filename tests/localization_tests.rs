//! # Localization Tests
//!
//! Content loading from Fluent files, including the failures that must stop
//! the bot at startup.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use tennis_orders::bot::intent::{Intent, MenuLabels};
use tennis_orders::config::{Config, ConfigError};
use tennis_orders::localization::{LocalizationError, MessageKey, Messages};

fn bundled_locales() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("locales")
}

fn write_locale(dir: &TempDir, locale: &str, content: &str) {
    let locale_dir = dir.path().join(locale);
    fs::create_dir_all(&locale_dir).unwrap();
    fs::write(locale_dir.join("main.ftl"), content).unwrap();
}

#[test]
fn test_bundled_locales_are_complete() {
    for locale in ["ru", "en"] {
        let messages = Messages::load(&bundled_locales(), locale).unwrap();
        assert_eq!(messages.locale(), locale);
        for key in MessageKey::ALL {
            let text = messages.text(key);
            assert!(!text.is_empty(), "{locale}: {} is empty", key.id());
            assert!(!text.starts_with("Missing translation"));
        }
    }
}

#[test]
fn test_ru_labels_match_buttons() {
    let messages = Messages::load(&bundled_locales(), "ru").unwrap();
    let labels = MenuLabels::from_messages(&messages);

    assert_eq!(labels.leave_order, "📝 Оставить заказ");
    assert_eq!(labels.about, "ℹ️ О нас");
    assert_eq!(labels.delivery, "🚚 Доставка и оплата");
    assert_eq!(labels.contacts, "📞 Контакты");
    assert_eq!(labels.back, "🔙 Назад");
    assert_eq!(labels.classify("📞 Контакты"), Intent::Contacts);
}

#[test]
fn test_multiline_text_keeps_blank_lines() {
    let messages = Messages::load(&bundled_locales(), "ru").unwrap();
    let welcome = messages.text(MessageKey::Welcome);

    assert!(welcome.starts_with("🎾 Добро пожаловать!\n\n"));
    assert!(welcome.ends_with("Выберите нужный раздел ниже 👇"));
}

#[test]
fn test_arguments_are_not_isolated() {
    let messages = Messages::load(&bundled_locales(), "en").unwrap();
    let text = messages.text_with_args(
        MessageKey::OrderNotification,
        &[("handle", "@racket_fan"), ("text", "Head Speed MP"), ("id", "42")],
    );

    assert!(text.contains("@racket_fan"));
    assert!(text.contains("<code>42</code>"));
    assert!(!text.contains('\u{2068}'));
    assert!(!text.contains('\u{2069}'));
}

#[test]
fn test_missing_key_is_rejected() {
    let err = Messages::from_source("en", "welcome = Hi\n").unwrap_err();
    assert!(matches!(err, LocalizationError::MissingKey { key: "main-menu", .. }));
}

#[test]
fn test_syntax_error_is_rejected() {
    let full = fs::read_to_string(bundled_locales().join("en").join("main.ftl")).unwrap();
    let broken = format!("{full}\nbroken = {{ unterminated\n");

    let err = Messages::from_source("en", broken).unwrap_err();
    assert!(matches!(err, LocalizationError::Syntax { .. }));
}

#[test]
fn test_missing_locale_directory() {
    let dir = TempDir::new().unwrap();
    let err = Messages::load(dir.path(), "de").unwrap_err();
    assert!(matches!(err, LocalizationError::Read { .. }));
}

#[test]
fn test_invalid_locale_identifier() {
    let err = Messages::from_source("not a locale!", "welcome = Hi\n").unwrap_err();
    assert!(matches!(err, LocalizationError::InvalidLocale(_)));
}

#[test]
fn test_custom_content_directory() {
    let dir = TempDir::new().unwrap();
    let full = fs::read_to_string(bundled_locales().join("en").join("main.ftl")).unwrap();
    write_locale(&dir, "en", &full.replace("📞 Contacts", "📞 Reach us"));

    let messages = Messages::load(dir.path(), "en").unwrap();
    let labels = MenuLabels::from_messages(&messages);
    assert_eq!(labels.classify("📞 Reach us"), Intent::Contacts);
}

#[test]
fn test_config_surfaces_content_errors() {
    let dir = TempDir::new().unwrap();
    write_locale(&dir, "ru", "welcome = Hi\n");
    let dir_path = dir.path().to_string_lossy().to_string();

    let config = Config::from_lookup(|key| match key {
        "BOT_TOKEN" => Some("123:abc".to_string()),
        "ADMIN_ID" => Some("1".to_string()),
        "LOCALES_DIR" => Some(dir_path.clone()),
        _ => None,
    })
    .unwrap();

    let err = config.load_messages().unwrap_err();
    assert!(matches!(err, ConfigError::Localization(LocalizationError::MissingKey { .. })));
}
