//! Backend fetch errors.

use thiserror::Error;

/// Errors that can occur when calling the food-ordering backend.
///
/// Every failure is terminal for its call; nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request could not be sent or no response was received.
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("HTTP error {status}{}", http_detail(.message.as_deref()))]
    Http {
        status: u16,
        /// The `error` (or `message`) field of the response body, if any.
        message: Option<String>,
    },

    /// The response body was not the expected JSON.
    #[error("Decode error: {0}")]
    Decode(String),
}

fn http_detail(message: Option<&str>) -> String {
    message.map(|m| format!(": {m}")).unwrap_or_default()
}

impl FetchError {
    /// Short machine-readable failure category.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::Network(_) => "network",
            Self::Http { .. } => "http",
            Self::Decode(_) => "decode",
        }
    }

    /// Human-readable detail of the failure.
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Self::Network(detail) | Self::Decode(detail) => detail.clone(),
            Self::Http { status, message } => message
                .clone()
                .unwrap_or_else(|| format!("status {status}")),
        }
    }

    /// Message supplied by the backend in an error response.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Http { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}
