use crate::model::ConfigError;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::info;

pub const CONFIG_ENV: &str = "PRICE_SHEET_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP(S) URL or local path of the product feed.
    pub feed: String,
    pub export_dir: PathBuf,
    pub currency_symbol: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            feed: "produtos.json".to_string(),
            export_dir: PathBuf::from("."),
            currency_symbol: "R$".to_string(),
        }
    }
}

/// Loads the config file. A missing file yields the defaults.
pub fn load_config(path: &str) -> Result<AppConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!("No config at {}, using defaults", path);
            return Ok(AppConfig::default());
        }
        Err(e) => return Err(e.into()),
    };
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}

pub fn config_path() -> String {
    std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
}
