//! CLI command implementations.

pub mod dashboard;
pub mod users;

use foodcourt_admin::api::{ApiClient, FetchError};
use foodcourt_admin::config::{ApiConfig, ConfigError};
use foodcourt_admin::dashboard::DashboardError;
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A backend request failed.
    #[error("Backend error: {0}")]
    Fetch(#[from] FetchError),

    /// The dashboard could not be loaded.
    #[error("{0}")]
    Dashboard(#[from] DashboardError),

    /// `--days` was zero.
    #[error("--days must be at least 1")]
    InvalidDays,

    /// The user was not deleted.
    #[error("User {0} was not deleted")]
    NotDeleted(String),
}

/// Build a backend client from `FOODCOURT_API_ORIGIN`.
fn api_client() -> Result<ApiClient, CommandError> {
    let config = ApiConfig::from_env()?;
    tracing::debug!(origin = %config.origin, "Using food-ordering backend");
    Ok(ApiClient::new(&config)?)
}
