use anyhow::Result;

pub struct AppConfig {
    pub database: DatabaseConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let database = DatabaseConfig {
            filename: std::env::var("DATABASE_FILENAME")
                .unwrap_or_else(|_| "event_manager.db".into()),
        };
        Ok(Self { database })
    }
}

pub struct DatabaseConfig {
    pub filename: String,
}
