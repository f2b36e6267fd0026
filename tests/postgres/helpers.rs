//! Shared helpers for `PostgreSQL` integration tests.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;
use taskbot::task::{
    adapters::postgres::{PostgresTaskRepository, build_pool},
    domain::OwnerId,
};

/// Variable naming the database used by these tests.
pub const DATABASE_URL_ENV: &str = "TASKBOT_TEST_DATABASE_URL";

static NEXT_OWNER: AtomicI64 = AtomicI64::new(0);

/// Connects to the test database and ensures the schema exists.
///
/// Callers are `#[ignore]`d and run with
/// `cargo test --test postgres -- --ignored`.
///
/// # Errors
///
/// Returns an error when no database is configured, or when the configured
/// database is unreachable.
pub async fn repository() -> Result<PostgresTaskRepository, eyre::Report> {
    let url = std::env::var(DATABASE_URL_ENV)
        .map_err(|_| eyre::eyre!("{DATABASE_URL_ENV} must name a disposable database"))?;
    let pool = tokio::task::spawn_blocking(move || build_pool(&url, 2)).await??;
    let repository = PostgresTaskRepository::new(pool);
    repository.apply_schema().await?;
    Ok(repository)
}

/// Returns an owner id no other test run has used.
///
/// Tests share one database, so isolation comes from distinct owners.
pub fn fresh_owner() -> OwnerId {
    let sequence = NEXT_OWNER.fetch_add(1, Ordering::Relaxed);
    let base = Utc::now().timestamp_micros().saturating_mul(1000);
    OwnerId::new(base.saturating_add(sequence))
}
