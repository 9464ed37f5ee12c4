//! Client configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file).

use chat_core::MAX_AVATAR_BYTES;
use serde::Deserialize;
use std::env;
use std::time::Duration;

/// Settings shared by every HTTP client
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_env")]
    pub env: Environment,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_avatar_max_bytes")]
    pub avatar_max_bytes: usize,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// Settings for the embedding backfill tool
#[derive(Debug, Clone, Deserialize)]
pub struct BackfillConfig {
    pub client: ClientConfig,
    pub email: String,
    pub password: String,
    pub workspace_id: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            env: default_env(),
            api_base_url: default_api_base_url(),
            timeout_secs: default_timeout_secs(),
            avatar_max_bytes: default_avatar_max_bytes(),
        }
    }
}

impl ClientConfig {
    /// Config pointing at a specific backend, defaults elsewhere
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: base_url.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if a variable is present but malformed
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let env = match env::var("APP_ENV") {
            Ok(s) => Environment::parse(&s).ok_or(ConfigError::InvalidValue("APP_ENV", s))?,
            Err(_) => default_env(),
        };

        let api_base_url = env::var("API_BASE_URL").unwrap_or_else(|_| default_api_base_url());
        if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue("API_BASE_URL", api_base_url));
        }

        Ok(Self {
            env,
            api_base_url,
            timeout_secs: parse_var("API_TIMEOUT_SECS")?.unwrap_or_else(default_timeout_secs),
            avatar_max_bytes: parse_var("AVATAR_MAX_BYTES")?
                .unwrap_or_else(default_avatar_max_bytes),
        })
    }
}

impl BackfillConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing
    pub fn from_env() -> Result<Self, ConfigError> {
        let client = ClientConfig::from_env()?;
        Ok(Self {
            client,
            email: required_var("BACKFILL_EMAIL")?,
            password: required_var("BACKFILL_PASSWORD")?,
            workspace_id: required_var("BACKFILL_WORKSPACE_ID")?,
        })
    }
}

fn required_var(name: &'static str) -> Result<String, ConfigError> {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::MissingVar(name))
}

fn parse_var<T: std::str::FromStr>(name: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue(name, raw)),
        Err(_) => Ok(None),
    }
}

// Default value functions
fn default_env() -> Environment {
    Environment::Development
}

fn default_api_base_url() -> String {
    "http://localhost:3000/api".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_avatar_max_bytes() -> usize {
    MAX_AVATAR_BYTES
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
