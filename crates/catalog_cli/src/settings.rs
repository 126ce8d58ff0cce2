//! Process configuration for the catalog CLI.
//!
//! Values come from built-in defaults, then `.env`, then `CATALOG_*`
//! environment variables (`CATALOG_DB_PATH`, `CATALOG_LOG_LEVEL`,
//! `CATALOG_LOG_DIR`).

use catalog_core::default_log_level;
use config::{Config, ConfigError, Environment};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct CliConfig {
    pub db_path: String,
    pub log_level: String,
    #[serde(default)]
    pub log_dir: Option<String>,
}

impl CliConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Config::builder()
            .set_default("db_path", "catalog.db")?
            .set_default("log_level", default_log_level())?
            .add_source(Environment::with_prefix("CATALOG"))
            .build()?
            .try_deserialize()
    }

    /// Absolute log directory; defaults to `<cwd>/logs`.
    pub fn log_dir(&self) -> Result<String, String> {
        let dir = match self.log_dir.as_deref().map(str::trim) {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => PathBuf::from("logs"),
        };
        let dir = if dir.is_absolute() {
            dir
        } else {
            std::env::current_dir()
                .map_err(|err| format!("failed to resolve working directory: {err}"))?
                .join(dir)
        };
        dir.to_str()
            .map(str::to_string)
            .ok_or_else(|| format!("log_dir `{}` is not valid UTF-8", dir.display()))
    }
}
