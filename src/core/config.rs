//! Configuration management for the FMP MCP server.
//!
//! This module provides a centralized configuration structure populated from
//! environment variables (with `.env` support via dotenvy). The one hard
//! requirement is `FMP_API_KEY`: without it the server refuses to start.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::error::{Error, Result};
use super::transport::TransportConfig;

/// Main configuration structure for the FMP MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Upstream API credentials.
    pub credentials: CredentialsConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Credentials for the Financial Modeling Prep API.
#[derive(Clone, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// FMP API key, passed to the upstream as the `apikey` query parameter.
    /// Get one at: https://site.financialmodelingprep.com/developer/docs
    pub fmp_api_key: String,
}

/// Custom Debug implementation to redact the key from logs.
impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field("fmp_api_key", &"[REDACTED]")
            .finish()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "fmp-mcp-server".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Create a configuration with the given API key and defaults everywhere
    /// else. Mainly useful for tests and embedding.
    pub fn new(fmp_api_key: impl Into<String>) -> Self {
        Self {
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
            transport: TransportConfig::default(),
            credentials: CredentialsConfig {
                fmp_api_key: fmp_api_key.into(),
            },
        }
    }

    /// Load configuration from environment variables.
    ///
    /// `FMP_API_KEY` is required; its absence is a fatal startup error.
    /// Optional overrides: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`, and the
    /// transport variables read by [`TransportConfig::from_env`].
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let fmp_api_key = std::env::var("FMP_API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                Error::config("FMP_API_KEY environment variable is not set")
            })?;

        let mut config = Self::new(fmp_api_key);
        info!("FMP API key loaded from environment");

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_api_key_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("FMP_API_KEY", "test_key_12345");
        }
        let config = Config::from_env().unwrap();
        assert_eq!(config.credentials.fmp_api_key, "test_key_12345");
        unsafe {
            std::env::remove_var("FMP_API_KEY");
        }
    }

    #[test]
    fn test_missing_api_key_is_fatal() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var("FMP_API_KEY");
        }
        let result = Config::from_env();
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_empty_api_key_is_fatal() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("FMP_API_KEY", "");
        }
        let result = Config::from_env();
        assert!(matches!(result, Err(Error::Config(_))));
        unsafe {
            std::env::remove_var("FMP_API_KEY");
        }
    }

    #[test]
    fn test_credentials_redacted_in_debug() {
        let creds = CredentialsConfig {
            fmp_api_key: "super_secret_key".to_string(),
        };
        let debug_str = format!("{:?}", creds);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_key"));
    }
}
