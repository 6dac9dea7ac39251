//! Application configuration with layered loading.
//!
//! This module provides configuration management using figment for layered
//! configuration loading from multiple sources:
//!
//! 1. Environment variables (MDN_MCP_*)
//! 2. TOML config file (if MDN_MCP_CONFIG_FILE set)
//! 3. Built-in defaults

use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

mod validation;

pub use validation::ConfigError;

/// Diagnostic log line format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// `[mdn-mcp] <message>` lines.
    #[default]
    Prefixed,
    /// One JSON object per line.
    Json,
}

/// Application configuration with layered loading.
///
/// Loading precedence (highest wins):
/// 1. Environment variables (MDN_MCP_*)
/// 2. TOML config file (if MDN_MCP_CONFIG_FILE set)
/// 3. Built-in defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Origin of the documentation site. Search and page paths resolve against it.
    ///
    /// Set via MDN_MCP_BASE_URL environment variable.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Locale sent with every search request.
    ///
    /// Set via MDN_MCP_LOCALE environment variable.
    #[serde(default = "default_locale")]
    pub locale: String,

    /// User-Agent string for HTTP requests.
    ///
    /// Set via MDN_MCP_USER_AGENT environment variable.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// HTTP request timeout in milliseconds.
    ///
    /// Set via MDN_MCP_TIMEOUT_MS environment variable.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Diagnostic log format.
    ///
    /// Set via MDN_MCP_LOG_FORMAT environment variable (`prefixed` or `json`).
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_base_url() -> String {
    "https://developer.mozilla.org".into()
}

fn default_locale() -> String {
    "en-US".into()
}

fn default_user_agent() -> String {
    "mdn-mcp/0.1".into()
}

fn default_timeout_ms() -> u64 {
    20_000
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            locale: default_locale(),
            user_agent: default_user_agent(),
            timeout_ms: default_timeout_ms(),
            log_format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    /// Timeout as Duration for use with reqwest.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Load configuration from all sources with layered precedence.
    ///
    /// Priority (highest wins):
    /// 1. Environment variables prefixed with `MDN_MCP_`
    /// 2. TOML file from `MDN_MCP_CONFIG_FILE` (if set)
    /// 3. Built-in defaults via `Default::default()`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Configuration file cannot be read
    /// - Environment variables cannot be parsed
    /// - Validation fails after loading
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Ok(config_path) = std::env::var("MDN_MCP_CONFIG_FILE") {
            figment = figment.merge(Toml::file(&config_path));
        }

        figment = figment.merge(Env::prefixed("MDN_MCP_").ignore(&["CONFIG_FILE"]));

        let config: Self = figment.extract().map_err(|e| ConfigError::LoadFailed(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.base_url, "https://developer.mozilla.org");
        assert_eq!(config.locale, "en-US");
        assert_eq!(config.user_agent, "mdn-mcp/0.1");
        assert_eq!(config.timeout_ms, 20_000);
        assert_eq!(config.log_format, LogFormat::Prefixed);
    }

    #[test]
    fn test_timeout_duration() {
        let config = AppConfig::default();
        assert_eq!(config.timeout(), Duration::from_millis(20_000));
    }

    #[test]
    fn test_load_defaults() {
        Jail::expect_with(|_jail| {
            let config = AppConfig::load().expect("defaults should load");
            assert_eq!(config.base_url, "https://developer.mozilla.org");
            assert_eq!(config.locale, "en-US");
            Ok(())
        });
    }

    #[test]
    fn test_load_env_overrides() {
        Jail::expect_with(|jail| {
            jail.set_env("MDN_MCP_BASE_URL", "http://127.0.0.1:8080");
            jail.set_env("MDN_MCP_LOCALE", "fr");
            jail.set_env("MDN_MCP_LOG_FORMAT", "json");
            jail.set_env("MDN_MCP_TIMEOUT_MS", "5000");

            let config = AppConfig::load().expect("env config should load");
            assert_eq!(config.base_url, "http://127.0.0.1:8080");
            assert_eq!(config.locale, "fr");
            assert_eq!(config.log_format, LogFormat::Json);
            assert_eq!(config.timeout_ms, 5000);
            Ok(())
        });
    }

    #[test]
    fn test_load_toml_file_then_env() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "mdn.toml",
                r#"
                    locale = "de"
                    user_agent = "from-file/1.0"
                "#,
            )?;
            jail.set_env("MDN_MCP_CONFIG_FILE", "mdn.toml");
            jail.set_env("MDN_MCP_USER_AGENT", "from-env/2.0");

            let config = AppConfig::load().expect("file config should load");
            assert_eq!(config.locale, "de");
            assert_eq!(config.user_agent, "from-env/2.0");
            Ok(())
        });
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        Jail::expect_with(|jail| {
            jail.set_env("MDN_MCP_BASE_URL", "ftp://example.com");

            let result = AppConfig::load();
            assert!(matches!(result, Err(ConfigError::Invalid { field, .. }) if field == "base_url"));
            Ok(())
        });
    }

    #[test]
    fn test_load_rejects_unknown_log_format() {
        Jail::expect_with(|jail| {
            jail.set_env("MDN_MCP_LOG_FORMAT", "xml");

            let result = AppConfig::load();
            assert!(matches!(result, Err(ConfigError::LoadFailed(_))));
            Ok(())
        });
    }
}
