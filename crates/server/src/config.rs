//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `SHOPFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `SHOPFRONT_PORT` - Listen port (default: 3000)
//! - `SHOPFRONT_UPSTREAM_URL` - Base URL of the upstream product/identity API
//!   (default: <https://dummyjson.com>)
//! - `SHOPFRONT_UPSTREAM_TIMEOUT_SECS` - Upstream request timeout (default: 10)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use thiserror::Error;
use url::Url;

const DEFAULT_UPSTREAM_URL: &str = "https://dummyjson.com";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Server application configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Base URL of the upstream product/identity API
    pub upstream_url: Url,
    /// Timeout applied to every upstream request
    pub upstream_timeout: Duration,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("SHOPFRONT_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("SHOPFRONT_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("SHOPFRONT_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("SHOPFRONT_PORT".to_string(), e.to_string()))?;
        let upstream_url = Url::parse(&get_env_or_default(
            "SHOPFRONT_UPSTREAM_URL",
            DEFAULT_UPSTREAM_URL,
        ))
        .map_err(|e| {
            ConfigError::InvalidEnvVar("SHOPFRONT_UPSTREAM_URL".to_string(), e.to_string())
        })?;
        let upstream_timeout = get_env_or_default("SHOPFRONT_UPSTREAM_TIMEOUT_SECS", "10")
            .parse::<u64>()
            .map(Duration::from_secs)
            .map_err(|e| {
                ConfigError::InvalidEnvVar(
                    "SHOPFRONT_UPSTREAM_TIMEOUT_SECS".to_string(),
                    e.to_string(),
                )
            })?;
        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");

        Ok(Self {
            host,
            port,
            upstream_url,
            upstream_timeout,
            sentry_dsn,
            sentry_environment,
        })
    }

    /// Build a configuration pointing at an arbitrary upstream.
    ///
    /// Used by tests that run the server against a local stub upstream.
    #[must_use]
    pub fn with_upstream(upstream_url: Url) -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 0,
            upstream_url,
            upstream_timeout: Duration::from_secs(10),
            sentry_dsn: None,
            sentry_environment: None,
        }
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Get an environment variable, or a default if unset or empty.
fn get_env_or_default(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Get an optional environment variable, treating empty as unset.
fn get_optional_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_upstream_defaults() {
        let url = Url::parse("http://127.0.0.1:9999").expect("valid url");
        let config = ServerConfig::with_upstream(url.clone());
        assert_eq!(config.upstream_url, url);
        assert_eq!(config.port, 0);
        assert!(config.sentry_dsn.is_none());
    }

    #[test]
    fn test_socket_addr() {
        let mut config =
            ServerConfig::with_upstream(Url::parse("http://localhost").expect("valid url"));
        config.port = 3000;
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3000");
    }
}
