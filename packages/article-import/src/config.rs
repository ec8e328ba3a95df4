use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

pub use shop_schema::DatabaseConfig;

pub const DEFAULT_CSV_PATH: &str = "articles.csv";

#[derive(Debug, Deserialize, Clone)]
pub struct ImportConfig {
    /// CSV export to load. Default: "articles.csv", relative to the working
    /// directory.
    #[serde(default = "default_csv_path")]
    pub csv_path: PathBuf,
}

fn default_csv_path() -> PathBuf {
    PathBuf::from(DEFAULT_CSV_PATH)
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            csv_path: default_csv_path(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    #[serde(default)]
    pub import: ImportConfig,
}

impl AppConfig {
    /// Load from `config/config.toml` (or `$SHOP_CONFIG`), then `SHOP__*`
    /// variables, then `DATABASE_URL`.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path =
            std::env::var("SHOP_CONFIG").unwrap_or_else(|_| "config/config".to_string());
        Self::build(&config_path, std::env::var("DATABASE_URL").ok())
    }

    pub fn build(config_path: &str, database_url: Option<String>) -> Result<Self, ConfigError> {
        let s = Config::builder()
            .set_default("import.csv_path", DEFAULT_CSV_PATH)?
            .add_source(File::with_name(config_path).required(false))
            // e.g. SHOP__IMPORT__CSV_PATH
            .add_source(Environment::with_prefix("SHOP").separator("__"))
            .set_override_option("database.url", database_url)?
            .build()?;

        s.try_deserialize()
    }
}
