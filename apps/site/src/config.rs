use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// When set, the résumé document is fetched from this URL instead of `data_path`.
    pub data_url: Option<String>,
    pub data_path: PathBuf,
    pub theme_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            data_url: optional_env("DATA_URL"),
            data_path: optional_env("DATA_PATH")
                .unwrap_or_else(|| "data.json".to_string())
                .into(),
            theme_path: optional_env("THEME_PATH")
                .unwrap_or_else(|| ".resume-prefs.json".to_string())
                .into(),
        })
    }
}

/// Unset and empty variables both read as `None`.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
