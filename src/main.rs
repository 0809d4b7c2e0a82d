use anyhow::Result;
use std::sync::Arc;
use teloxide::error_handlers::LoggingErrorHandler;
use teloxide::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tennis_orders::bot::{self, OrderBot};
use tennis_orders::config::{Config, LogFormat};
use tennis_orders::dialogue::ConversationStore;
use tennis_orders::transport::TelegramTransport;

fn init_logging(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let config = Config::from_env()?;
    init_logging(config.log_format);

    info!("Starting Tennis Orders Telegram Bot");

    let messages = config.load_messages()?;
    info!(
        locale = messages.locale(),
        admin_id = %config.admin_chat_id,
        "Content loaded"
    );

    let tg = Bot::new(config.bot_token.clone());
    let transport = Arc::new(TelegramTransport::new(tg.clone()));
    let order_bot = Arc::new(OrderBot::new(
        ConversationStore::new(),
        transport,
        messages,
        config.admin_chat_id,
    ));

    info!("Bot initialized, starting dispatcher");

    // Updates are queued per chat, so one customer's messages are handled in order.
    let handler = dptree::entry().branch(Update::filter_message().endpoint(bot::message_handler));

    Dispatcher::builder(tg, handler)
        .dependencies(dptree::deps![order_bot])
        .error_handler(LoggingErrorHandler::with_custom_text(
            "An error has occurred while handling a message",
        ))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
