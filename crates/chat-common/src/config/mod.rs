//! Configuration structs

mod app_config;

pub use app_config::{BackfillConfig, ClientConfig, ConfigError, Environment};

impl From<ConfigError> for crate::error::AppError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
