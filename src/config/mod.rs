//! Configuration loading and validation.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::models::{LeagueConfig, ModelSettings};

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Player data fetch configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Largest player file accepted
    #[serde(default = "default_max_content_bytes")]
    pub max_content_bytes: usize,
}

fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("draft-assistant/{}", env!("CARGO_PKG_VERSION"))
}

fn default_max_content_bytes() -> usize {
    10 * 1024 * 1024
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout(),
            user_agent: default_user_agent(),
            max_content_bytes: default_max_content_bytes(),
        }
    }
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_cors_origin")]
    pub cors_origin: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_cors_origin() -> String {
    "*".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origin: default_cors_origin(),
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Player data: an http(s) URL or a local file path
    #[serde(default = "default_data_source")]
    pub data_source: String,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub fetch: FetchConfig,

    #[serde(default)]
    pub server: ServerConfig,

    /// Starting league configuration
    #[serde(default)]
    pub league: LeagueConfig,

    /// Starting model settings
    #[serde(default)]
    pub model: ModelSettings,
}

fn default_data_source() -> String {
    "data/players.json".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_source: default_data_source(),
            log_level: default_log_level(),
            fetch: FetchConfig::default(),
            server: ServerConfig::default(),
            league: LeagueConfig::default(),
            model: ModelSettings::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    ///
    /// Model weights are deliberately left unchecked; only values that
    /// would make the service unusable are rejected.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.data_source.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "data_source must not be empty".to_string(),
            ));
        }

        if self.fetch.timeout_seconds == 0 {
            return Err(ConfigError::ValidationError(
                "Fetch timeout must be greater than 0".to_string(),
            ));
        }

        if self.server.port == 0 {
            return Err(ConfigError::ValidationError(
                "Server port must be greater than 0".to_string(),
            ));
        }

        self.league
            .validate()
            .map_err(|e| ConfigError::ValidationError(e.to_string()))?;

        Ok(())
    }
}
