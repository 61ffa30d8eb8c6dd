//! Configuration module for the BrandSnap backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Pre-shared key for API authentication (optional)
    pub api_psk: Option<String>,
    /// Path to the SQLite file backing the vault store
    pub db_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    pub log_format: LogFormat,
    /// Anthropic API key used by the generator
    pub anthropic_api_key: Option<String>,
    /// Base URL of the Anthropic API, without the `/v1/messages` suffix
    pub anthropic_api_url: String,
    pub anthropic_model: String,
    /// Timeout applied to every upstream request
    pub http_timeout: Duration,
}

/// Error raised when an environment variable holds an unusable value.
#[derive(Debug)]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid value for {}: {:?}", self.var, self.value)
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the configuration from `lookup`, which maps a variable name to its value.
    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var_or = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

        let api_psk = lookup("BRANDSNAP_API_PSK").filter(|s| !s.is_empty());

        let db_path = var_or("BRANDSNAP_DB_PATH", "./data/brandsnap.sqlite").into();

        let bind_raw = var_or("BRANDSNAP_BIND_ADDR", "127.0.0.1:8080");
        let bind_addr = bind_raw.parse().map_err(|_| ConfigError {
            var: "BRANDSNAP_BIND_ADDR",
            value: bind_raw.clone(),
        })?;

        let log_level = var_or("BRANDSNAP_LOG_LEVEL", "info");

        let log_format = match lookup("BRANDSNAP_LOG_FORMAT").as_deref() {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        let anthropic_api_key = lookup("ANTHROPIC_API_KEY").filter(|s| !s.is_empty());

        let anthropic_api_url = var_or("ANTHROPIC_API_URL", "https://api.anthropic.com")
            .trim_end_matches('/')
            .to_string();

        let anthropic_model = var_or("ANTHROPIC_MODEL", "claude-sonnet-4-20250514");

        let timeout_raw = var_or("BRANDSNAP_HTTP_TIMEOUT_SECS", "60");
        let http_timeout = timeout_raw
            .parse::<u64>()
            .map(Duration::from_secs)
            .map_err(|_| ConfigError {
                var: "BRANDSNAP_HTTP_TIMEOUT_SECS",
                value: timeout_raw.clone(),
            })?;

        Ok(Self {
            api_psk,
            db_path,
            bind_addr,
            log_level,
            log_format,
            anthropic_api_key,
            anthropic_api_url,
            anthropic_model,
            http_timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_config_defaults() {
        let config = config_from(&[]).unwrap();

        assert!(config.api_psk.is_none());
        assert_eq!(config.db_path, PathBuf::from("./data/brandsnap.sqlite"));
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert!(config.anthropic_api_key.is_none());
        assert_eq!(config.anthropic_api_url, "https://api.anthropic.com");
        assert_eq!(config.anthropic_model, "claude-sonnet-4-20250514");
        assert_eq!(config.http_timeout, Duration::from_secs(60));
    }

    #[test]
    fn test_config_overrides() {
        let config = config_from(&[
            ("BRANDSNAP_API_PSK", "secret"),
            ("BRANDSNAP_LOG_FORMAT", "json"),
            ("ANTHROPIC_API_KEY", ""),
            ("ANTHROPIC_API_URL", "http://localhost:9000/"),
            ("BRANDSNAP_HTTP_TIMEOUT_SECS", "5"),
        ])
        .unwrap();

        assert_eq!(config.api_psk.as_deref(), Some("secret"));
        assert_eq!(config.log_format, LogFormat::Json);
        assert!(config.anthropic_api_key.is_none());
        assert_eq!(config.anthropic_api_url, "http://localhost:9000");
        assert_eq!(config.http_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_config_rejects_bad_values() {
        let err = config_from(&[("BRANDSNAP_BIND_ADDR", "not-an-address")]).unwrap_err();
        assert_eq!(err.var, "BRANDSNAP_BIND_ADDR");

        let err = config_from(&[("BRANDSNAP_HTTP_TIMEOUT_SECS", "soon")]).unwrap_err();
        assert_eq!(err.var, "BRANDSNAP_HTTP_TIMEOUT_SECS");
        assert_eq!(err.value, "soon");
    }
}
