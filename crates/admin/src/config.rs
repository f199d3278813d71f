//! Admin configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `FOODCOURT_API_ORIGIN` - Backend origin (default: <http://localhost:5000>)
//! - `ADMIN_HOST` - Bind address (default: 127.0.0.1)
//! - `ADMIN_PORT` - Listen port (default: 3001)
//! - `ORDER_TRACKING_BASE_URL` - Prefix of order tracking links
//!   (default: <http://localhost:3000/tracking>)
//! - `RECENT_ORDERS_DAYS` - Window of the recent orders view (default: 7)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Sentry error sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Sentry traces sample rate (default: 1.0)

use std::net::{IpAddr, SocketAddr};

use foodcourt_core::RECENT_ORDERS_WINDOW_DAYS;
use thiserror::Error;
use url::Url;

const DEFAULT_API_ORIGIN: &str = "http://localhost:5000";
const DEFAULT_TRACKING_BASE_URL: &str = "http://localhost:3000/tracking";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Where the backend API lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Origin every backend request is resolved against.
    pub origin: Url,
}

impl ApiConfig {
    /// Parse and validate a backend origin.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` unless `origin` is an absolute http(s) URL.
    pub fn parse(origin: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            origin: parse_http_url("FOODCOURT_API_ORIGIN", origin)?,
        })
    }

    fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let origin = lookup("FOODCOURT_API_ORIGIN").unwrap_or_else(|| DEFAULT_API_ORIGIN.to_string());
        Self::parse(&origin)
    }

    /// Load the backend origin on its own, for surfaces without a server.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `FOODCOURT_API_ORIGIN` is invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(&env_lookup)
    }
}

/// Admin application configuration.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// Backend API configuration
    pub api: ApiConfig,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Prefix of the tracking link shown per recent order
    pub tracking_base_url: Url,
    /// Window of the recent orders view, in days
    pub recent_orders_days: u32,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g., "development", "staging", "production")
    pub sentry_environment: Option<String>,
    /// Sentry error sample rate (0.0 to 1.0)
    pub sentry_sample_rate: f32,
    /// Sentry traces sample rate for performance monitoring (0.0 to 1.0)
    pub sentry_traces_sample_rate: f32,
}

impl AdminConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(&env_lookup)
    }

    fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get_or_default = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let api = ApiConfig::from_lookup(lookup)?;
        let host = get_or_default("ADMIN_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("ADMIN_HOST".to_string(), e.to_string()))?;
        let port = get_or_default("ADMIN_PORT", "3001")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("ADMIN_PORT".to_string(), e.to_string()))?;
        let tracking_base_url = parse_http_url(
            "ORDER_TRACKING_BASE_URL",
            &get_or_default("ORDER_TRACKING_BASE_URL", DEFAULT_TRACKING_BASE_URL),
        )?;
        let recent_orders_days = parse_days(
            &get_or_default("RECENT_ORDERS_DAYS", &RECENT_ORDERS_WINDOW_DAYS.to_string()),
        )?;
        let sentry_dsn = lookup("SENTRY_DSN");
        let sentry_environment = lookup("SENTRY_ENVIRONMENT");
        let sentry_sample_rate = lookup("SENTRY_SAMPLE_RATE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(1.0);
        let sentry_traces_sample_rate = lookup("SENTRY_TRACES_SAMPLE_RATE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(1.0);

        Ok(Self {
            api,
            host,
            port,
            tracking_base_url,
            recent_orders_days,
            sentry_dsn,
            sentry_environment,
            sentry_sample_rate,
            sentry_traces_sample_rate,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Tracking link for an order.
    #[must_use]
    pub fn tracking_url(&self, order_id: &str) -> String {
        format!(
            "{}/{order_id}",
            self.tracking_base_url.as_str().trim_end_matches('/')
        )
    }
}

fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_http_url(key: &str, value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("unsupported scheme {other}, expected http or https"),
        )),
    }
}

/// Parse a day count for the recent orders window (at least one day).
///
/// # Errors
///
/// Returns `ConfigError` if `value` is not a positive integer.
pub fn parse_days(value: &str) -> Result<u32, ConfigError> {
    let days = value
        .trim()
        .parse::<u32>()
        .map_err(|e| ConfigError::InvalidEnvVar("RECENT_ORDERS_DAYS".to_string(), e.to_string()))?;
    if days == 0 {
        return Err(ConfigError::InvalidEnvVar(
            "RECENT_ORDERS_DAYS".to_string(),
            "must be at least 1".to_string(),
        ));
    }
    Ok(days)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<AdminConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        AdminConfig::from_lookup(&|key: &str| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.api.origin.as_str(), "http://localhost:5000/");
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3001");
        assert_eq!(config.recent_orders_days, 7);
        assert!(config.sentry_dsn.is_none());
        assert!((config.sentry_sample_rate - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("FOODCOURT_API_ORIGIN", "https://api.example.com"),
            ("ADMIN_PORT", "8080"),
            ("RECENT_ORDERS_DAYS", "30"),
            ("SENTRY_SAMPLE_RATE", "0.5"),
        ])
        .unwrap();
        assert_eq!(config.api.origin.host_str(), Some("api.example.com"));
        assert_eq!(config.port, 8080);
        assert_eq!(config.recent_orders_days, 30);
        assert!((config.sentry_sample_rate - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_rejects_non_http_origin() {
        let err = load(&[("FOODCOURT_API_ORIGIN", "ftp://files.example.com")]).unwrap_err();
        assert!(err.to_string().contains("FOODCOURT_API_ORIGIN"));
        assert!(load(&[("FOODCOURT_API_ORIGIN", "not a url")]).is_err());
    }

    #[test]
    fn test_rejects_invalid_port_and_host() {
        assert!(load(&[("ADMIN_PORT", "70000")]).is_err());
        assert!(load(&[("ADMIN_HOST", "localhost:80")]).is_err());
    }

    #[test]
    fn test_parse_days() {
        assert_eq!(parse_days("14").unwrap(), 14);
        assert!(parse_days("0").is_err());
        assert!(parse_days("-3").is_err());
        assert!(parse_days("week").is_err());
    }

    #[test]
    fn test_tracking_url() {
        let config = load(&[("ORDER_TRACKING_BASE_URL", "https://shop.example.com/track/")]).unwrap();
        assert_eq!(
            config.tracking_url("abc123"),
            "https://shop.example.com/track/abc123"
        );
    }
}
