use std::{net::SocketAddr, path::PathBuf, time::Duration};

use crate::server::error::config::ConfigError;

const DEFAULT_APPLICATIONS_FILE: &str = "data/applications.json";
const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";
const DEFAULT_NOTIFY_TIMEOUT_SECS: u64 = 10;

/// Storage mode override read from `STORAGE_MODE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMode {
    /// Use the relational store when one is configured, the file store otherwise.
    Auto,
    /// Always use the file store.
    Json,
}

impl StorageMode {
    fn from_env_value(value: Option<&str>) -> Self {
        match value {
            Some(mode) if mode.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Auto,
        }
    }
}

pub struct Config {
    pub storage_mode: StorageMode,
    pub database_url: Option<String>,
    pub applications_file: PathBuf,

    pub telegram_bot_token: Option<String>,
    pub telegram_chat_id: Option<String>,
    pub telegram_api_url: String,
    pub notify_timeout: Duration,

    pub bind_address: SocketAddr,
    pub log_json: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Blank values are treated the same as unset ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let bind_address = parse_var(
            "BIND_ADDRESS",
            var("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
        )?;
        let notify_timeout_secs: u64 = match var("NOTIFY_TIMEOUT_SECS") {
            Some(value) => parse_var("NOTIFY_TIMEOUT_SECS", value)?,
            None => DEFAULT_NOTIFY_TIMEOUT_SECS,
        };
        let log_json = match var("LOG_JSON") {
            Some(value) => parse_var("LOG_JSON", value.to_ascii_lowercase())?,
            None => false,
        };

        Ok(Self {
            storage_mode: StorageMode::from_env_value(var("STORAGE_MODE").as_deref()),
            database_url: var("DATABASE_URL"),
            applications_file: var("APPLICATIONS_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_APPLICATIONS_FILE)),
            telegram_bot_token: var("TELEGRAM_BOT_TOKEN"),
            telegram_chat_id: var("TELEGRAM_CHAT_ID"),
            telegram_api_url: var("TELEGRAM_API_URL")
                .unwrap_or_else(|| DEFAULT_TELEGRAM_API_URL.to_string()),
            notify_timeout: Duration::from_secs(notify_timeout_secs),
            bind_address,
            log_json,
        })
    }

    /// Connection target for the relational store, if it should be used at all.
    ///
    /// Returns `None` when file mode is forced or no database URL is configured.
    pub fn primary_database_url(&self) -> Option<&str> {
        match self.storage_mode {
            StorageMode::Json => None,
            StorageMode::Auto => self.database_url.as_deref(),
        }
    }
}

fn parse_var<T>(name: &str, value: String) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.parse::<T>().map_err(|e| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        reason: e.to_string(),
        value,
    })
}
