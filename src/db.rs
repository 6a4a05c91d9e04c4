use std::str::FromStr;

use anyhow::Context;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::config::DbConfig;

pub async fn connect(cfg: &DbConfig) -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&cfg.url)
        .with_context(|| format!("parse database url {}", cfg.url))?
        .foreign_keys(true);

    let mut pool = SqlitePoolOptions::new().max_connections(cfg.max_connections);
    // an in-memory database lives only as long as its connection
    if cfg.url.contains(":memory:") {
        pool = pool.idle_timeout(None).max_lifetime(None);
    }

    pool.connect_with(options)
        .await
        .context("connect to database")
}

pub async fn migrate(db: &SqlitePool) -> anyhow::Result<()> {
    sqlx::migrate!("./migrations")
        .run(db)
        .await
        .context("run migrations")?;
    Ok(())
}

/// Round-trips a trivial query; used as a liveness probe.
pub async fn ping(db: &SqlitePool) -> anyhow::Result<()> {
    sqlx::query("SELECT 1")
        .execute(db)
        .await
        .context("ping database")?;
    Ok(())
}
