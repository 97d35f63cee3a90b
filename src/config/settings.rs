//! Application configuration settings
//!
//! Defines all configuration structures and loading logic

use crate::utils::error::helpers::{config_error, credential_error};
use crate::utils::error::NatarisResult;
use serde::{Deserialize, Serialize};

/// Environment variable holding the bearer token
pub const API_KEY_VAR: &str = "NATARIS_API_KEY";

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.nataris.ai/v1";

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Nataris API configuration
    pub api: ApiConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Nataris API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Bearer token
    pub api_key: String,
    /// API base URL (no trailing slash)
    pub base_url: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log filter directive (e.g. "info" or "nataris_example=debug")
    pub level: String,
    /// Log format (text/json)
    pub format: String,
}

impl Settings {
    /// Create a new configuration instance from the process environment
    pub fn new() -> NatarisResult<Self> {
        // Load .env file if it exists
        dotenv::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> NatarisResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get_or_default = |key: &str, default: &str| {
            lookup(key).unwrap_or_else(|| default.to_string())
        };

        let api_key = lookup(API_KEY_VAR)
            .ok_or_else(|| credential_error(format!("{} environment variable is required", API_KEY_VAR)))?;

        let settings = Self {
            api: ApiConfig {
                api_key,
                base_url: get_or_default("NATARIS_BASE_URL", DEFAULT_BASE_URL)
                    .trim_end_matches('/')
                    .to_string(),
            },
            logging: LoggingConfig {
                level: get_or_default("RUST_LOG", "info"),
                format: get_or_default("LOG_FORMAT", "text"),
            },
        };

        settings.validate()?;

        Ok(settings)
    }

    /// Validate configuration validity
    fn validate(&self) -> NatarisResult<()> {
        if self.api.api_key.is_empty() {
            return Err(credential_error(format!("{} cannot be empty", API_KEY_VAR)));
        }

        if self.api.api_key.contains(char::is_whitespace) {
            return Err(credential_error(format!("{} cannot contain whitespace characters", API_KEY_VAR)));
        }

        if !self.api.base_url.starts_with("http") {
            return Err(config_error("Invalid base URL format, should start with 'http'"));
        }

        if self.logging.level.trim().is_empty() {
            return Err(config_error("Log level cannot be empty"));
        }

        let valid_formats = ["text", "json"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            return Err(config_error(format!("Invalid log format: {}", self.logging.format)));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::from_lookup(lookup_from(&[(API_KEY_VAR, "nat_test_key")])).unwrap();
        assert_eq!(settings.api.api_key, "nat_test_key");
        assert_eq!(settings.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.logging.level, "info");
        assert_eq!(settings.logging.format, "text");
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let settings = Settings::from_lookup(lookup_from(&[
            (API_KEY_VAR, "nat_test_key"),
            ("NATARIS_BASE_URL", "http://localhost:9000/v1/"),
        ]))
        .unwrap();
        assert_eq!(settings.api.base_url, "http://localhost:9000/v1");
    }

    #[test]
    fn test_missing_key_is_config_error() {
        let err = Settings::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(err.is_credential());
        assert!(err.to_string().contains(API_KEY_VAR));
    }
}
