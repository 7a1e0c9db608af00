//! Configuration management for the contact assistant.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file in the working directory.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default number of records per page for `show all`.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Configuration for the contact assistant.
#[derive(Debug, Clone)]
pub struct Config {
    /// Records per page when `show all` is given no size (default: 5)
    pub page_size: usize,

    /// Log filter used when `RUST_LOG` is not set (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ASSISTANT_PAGE_SIZE`: records per page (default: 5, must be > 0)
    /// - `LOG_LEVEL`: logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let page_size = Self::parse_env_page_size("ASSISTANT_PAGE_SIZE", DEFAULT_PAGE_SIZE)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            page_size,
            log_level,
        })
    }

    /// Parse a positive page size from an environment variable.
    fn parse_env_page_size(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => match val.trim().parse::<usize>() {
                Ok(size) if size > 0 => Ok(size),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be a positive number, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            page_size: DEFAULT_PAGE_SIZE,
            log_level: "error".to_string(),
        }
    }
}
