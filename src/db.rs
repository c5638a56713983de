//! Database pool initialization.
//!
//! The pool connects lazily: startup validates the connection string but
//! the first connection is opened on first use, matching the rest of the
//! fail-fast-on-configuration, lazy-on-resources startup behavior.

use std::str::FromStr;

use anyhow::Context;
use mettai_config::DatabaseConfig;
use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

pub fn init_db_pool(config: &DatabaseConfig) -> anyhow::Result<PgPool> {
    let options = PgConnectOptions::from_str(&config.url)
        .with_context(|| format!("invalid DATABASE_URL `{}`", config.redacted_url()))?;

    Ok(PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_lazy_with(options))
}

/// Apply embedded migrations. Callers gate this on the resolved
/// `run_migrations` flag; the testing profile bypasses it.
pub async fn run_migrations(pool: &PgPool) -> anyhow::Result<()> {
    sqlx::migrate!()
        .run(pool)
        .await
        .context("failed to run migrations")?;
    Ok(())
}
