//! Configuration validation rules.
//!
//! This module provides validation logic for `AppConfig` values
//! after they have been loaded from environment, files, or defaults.

use crate::config::AppConfig;
use thiserror::Error;

/// Configuration validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    LoadFailed(String),

    #[error("invalid configuration: {field} - {reason}")]
    Invalid { field: String, reason: String },
}

impl AppConfig {
    /// Validate configuration values after loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if:
    /// - `base_url` is not an absolute http(s) URL with a host
    /// - `locale` or `user_agent` is empty
    /// - `timeout_ms` is less than 100ms or exceeds 5 minutes
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base = url::Url::parse(&self.base_url)
            .map_err(|e| ConfigError::Invalid { field: "base_url".into(), reason: e.to_string() })?;

        if !matches!(base.scheme(), "http" | "https") {
            return Err(ConfigError::Invalid {
                field: "base_url".into(),
                reason: format!("unsupported scheme: {}", base.scheme()),
            });
        }
        if base.host_str().is_none() {
            return Err(ConfigError::Invalid { field: "base_url".into(), reason: "must include a host".into() });
        }

        if self.locale.trim().is_empty() {
            return Err(ConfigError::Invalid { field: "locale".into(), reason: "must not be empty".into() });
        }

        if self.timeout_ms < 100 {
            return Err(ConfigError::Invalid { field: "timeout_ms".into(), reason: "must be at least 100ms".into() });
        }
        if self.timeout_ms > 300_000 {
            return Err(ConfigError::Invalid {
                field: "timeout_ms".into(),
                reason: "must not exceed 5 minutes (300000ms)".into(),
            });
        }

        if self.user_agent.is_empty() {
            return Err(ConfigError::Invalid { field: "user_agent".into(), reason: "must not be empty".into() });
        }

        if base.path() != "/" {
            tracing::warn!(
                base_url = %self.base_url,
                "base_url has a path component; absolute request paths will replace it"
            );
        }

        Ok(())
    }
}
