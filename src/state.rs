use crate::config::AppConfig;
use crate::db;
use sqlx::SqlitePool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        let db = db::connect(&config.db).await?;
        Ok(Self { db, config })
    }

    /// Fresh in-memory database with the schema applied.
    pub async fn in_memory() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::in_memory());
        let db = db::connect(&config.db).await?;
        db::migrate(&db).await?;
        Ok(Self { db, config })
    }
}
