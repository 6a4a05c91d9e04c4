use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct DbConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub db: DbConfig,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let db = DbConfig {
            url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://fsjstd-restapi.db?mode=rwc".into()),
            max_connections: std::env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse::<u32>().ok())
                .unwrap_or(5),
        };
        Ok(Self {
            db,
            host: std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: std::env::var("APP_PORT")
                .ok()
                .and_then(|v| v.parse::<u16>().ok())
                .unwrap_or(5000),
        })
    }

    /// In-memory store for tests. A single connection keeps every query on the same database.
    pub fn in_memory() -> Self {
        Self {
            db: DbConfig {
                url: "sqlite::memory:".into(),
                max_connections: 1,
            },
            host: "127.0.0.1".into(),
            port: 0,
        }
    }
}
