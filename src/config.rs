//! Application configuration loading and validation.
//!
//! Configuration is loaded from a TOML file with an environment variable
//! override for the listing API key (`OPENSEA_API_KEY`), which is never
//! required to live in the config file.

use serde::Deserialize;
use std::path::Path;
use tracing_subscriber::{fmt, EnvFilter};
use url::Url;

use crate::error::{ConfigError, Result};

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub network: NetworkConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct NetworkConfig {
    /// Base URL of the marketplace REST API.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Base URL of the staking-points REST API.
    #[serde(default = "default_staking_api_url")]
    pub staking_api_url: String,
    /// Listing API key. Overridden by `OPENSEA_API_KEY` when set.
    #[serde(default)]
    pub api_key: String,
}

fn default_api_url() -> String {
    "https://api.opensea.io/api/v2".into()
}

fn default_staking_api_url() -> String {
    "https://staking.youmio.ai/api".into()
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".into()
}

fn default_log_format() -> String {
    "pretty".into()
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;

        let mut config: Self = toml::from_str(&content).map_err(ConfigError::Parse)?;

        // The API key is a static credential; prefer the environment so it
        // never has to be committed alongside the config file.
        if let Ok(key) = std::env::var("OPENSEA_API_KEY") {
            config.network.api_key = key;
        }

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        validate_url("api_url", &self.network.api_url)?;
        validate_url("staking_api_url", &self.network.staking_api_url)?;
        Ok(())
    }

    pub fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.logging.level));

        match self.logging.format.as_str() {
            "json" => {
                fmt().json().with_env_filter(filter).init();
            }
            _ => {
                fmt().with_env_filter(filter).init();
            }
        }
    }
}

fn validate_url(field: &'static str, value: &str) -> Result<()> {
    Url::parse(value).map_err(|e| ConfigError::InvalidValue {
        field,
        reason: e.to_string(),
    })?;
    Ok(())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            network: NetworkConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            staking_api_url: default_staking_api_url(),
            api_key: String::new(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}
