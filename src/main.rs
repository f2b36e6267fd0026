//! `taskbot` binary: a Telegram task tracker backed by `PostgreSQL`.
//!
//! Configuration is read from `.env`, `taskbot.toml` and the environment; see
//! [`taskbot::config`].

use std::sync::Arc;

use eyre::{Result, WrapErr};
use mockable::DefaultClock;
use taskbot::{
    config::BotConfig,
    conversation::{adapters::memory::InMemoryDraftStore, services::ConversationService},
    router::CommandRouter,
    task::{
        adapters::postgres::{PostgresTaskRepository, build_pool},
        services::TaskStoreService,
    },
    telemetry,
    transport::{adapters::telegram::TelegramTransport, services::BotRunner},
};

#[tokio::main]
async fn main() -> Result<()> {
    let config = BotConfig::load_with_dotenv().wrap_err("failed to load configuration")?;
    telemetry::init_tracing(&config.log_level).wrap_err("failed to initialise logging")?;

    let database_url = config.database.connection_url()?;
    let pool_size = config.database.pool_size;
    let pool = tokio::task::spawn_blocking(move || build_pool(&database_url, pool_size))
        .await
        .wrap_err("database pool task failed")?
        .wrap_err("failed to connect to the database")?;
    let repository = PostgresTaskRepository::new(pool);
    repository
        .apply_schema()
        .await
        .wrap_err("failed to apply the database schema")?;

    let clock = Arc::new(DefaultClock);
    let tasks = TaskStoreService::new(Arc::new(repository), Arc::clone(&clock));
    let mut conversations =
        ConversationService::new(Arc::new(InMemoryDraftStore::new()), tasks.clone(), clock);
    if let Some(ttl) = config.conversation.draft_ttl() {
        conversations = conversations.with_draft_ttl(ttl);
    }
    let router = CommandRouter::new(tasks, conversations);

    let transport = TelegramTransport::new(
        &config.telegram.api_base_url,
        &config.telegram.bot_token,
        config.telegram.poll_timeout(),
    )
    .wrap_err("failed to create the Telegram client")?;
    let runner = BotRunner::new(Arc::new(transport), router, config.telegram.error_pause());

    tracing::info!(
        pool_size,
        draft_ttl_secs = config.conversation.draft_ttl_secs,
        "taskbot starting"
    );
    runner.run_until(shutdown_signal()).await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
