//! Server configuration.
//!
//! Values come from environment variables prefixed with `FIRST_API`, using
//! `__` as separator (`FIRST_API__PORT=9000`). A `.env` file in the working
//! directory is read first when present. Every field has a default, so an
//! empty environment yields a usable configuration.

use axum::http::HeaderValue;
use serde::Deserialize;
use thiserror::Error;

pub const ENV_PREFIX: &str = "FIRST_API";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid CORS origin: {0}")]
    InvalidOrigin(String),

    #[error("Wildcard CORS origin cannot be combined with credentials")]
    WildcardOrigin,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Browser origins allowed to call the API with credentials (comma-separated)
    #[serde(default = "default_cors_origins")]
    pub cors_origins: String,

    /// Filter directive used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ServerConfig {
    /// Load from `.env` and the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but cannot be parsed
    /// into its field type.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    /// Like [`ServerConfig::load`], without reading `.env`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable cannot be parsed into its field type.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = config::Config::builder()
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// `host:port`, suitable for `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn cors_origins_list(&self) -> Vec<String> {
        self.cors_origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        for origin in self.cors_origins_list() {
            if origin == "*" {
                return Err(ValidationError::WildcardOrigin);
            }
            if HeaderValue::from_str(&origin).is_err() {
                return Err(ValidationError::InvalidOrigin(origin));
            }
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: default_cors_origins(),
            log_level: default_log_level(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_cors_origins() -> String {
    "http://localhost:3000".to_string()
}

fn default_log_level() -> String {
    "info,first_api_server=debug,tower_http=debug".to_string()
}
