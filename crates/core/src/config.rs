//! Client configuration: TOML file with environment overrides.

use serde::{Deserialize, Serialize};
#[cfg(not(target_arch = "wasm32"))]
use std::path::Path;

use crate::errors::JournalError;

pub const ENV_API_URL: &str = "JOURNAL_API_URL";
pub const ENV_TIMEOUT_SECS: &str = "JOURNAL_TIMEOUT_SECS";
pub const ENV_LOG_LEVEL: &str = "JOURNAL_LOG_LEVEL";

/// Top-level configuration. Every section and key is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JournalConfig {
    pub api: ApiConfig,
    pub logging: LoggingConfig,
}

/// Where the trade store lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL including the API prefix, e.g. `http://localhost:8000/api`
    pub base_url: String,
    /// Per-request timeout (native targets only)
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/api".to_string(),
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Logging configuration. `RUST_LOG` takes precedence over `level`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

impl JournalConfig {
    /// Parse and validate a TOML document (no environment overrides).
    pub fn from_toml_str(text: &str) -> Result<Self, JournalError> {
        let mut config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file, then apply environment overrides (native only).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, JournalError> {
        let text = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&text)?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Defaults plus environment overrides, for running without a file.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self, JournalError> {
        let mut config = Self::default();
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply overrides from `lookup` (normally the process environment),
    /// then validate the result.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), JournalError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_API_URL) {
            self.api.base_url = url;
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            self.api.timeout_secs = raw.trim().parse().map_err(|_| {
                JournalError::Config(format!("{ENV_TIMEOUT_SECS} must be a whole number of seconds, got '{raw}'"))
            })?;
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.logging.level = level;
        }
        self.validate()
    }

    /// Check invariants and normalize the base URL (no trailing slash).
    pub fn validate(&mut self) -> Result<(), JournalError> {
        let url = self.api.base_url.trim().trim_end_matches('/');
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(JournalError::Config(format!(
                "api.base_url must start with http:// or https://, got '{}'",
                self.api.base_url
            )));
        }
        self.api.base_url = url.to_string();

        if self.api.timeout_secs == 0 {
            return Err(JournalError::Config(
                "api.timeout_secs must be greater than zero".into(),
            ));
        }
        if self.logging.level.trim().is_empty() {
            return Err(JournalError::Config("logging.level must not be empty".into()));
        }
        Ok(())
    }
}
