//! Request and response bodies for the backend API.

use serde::{Deserialize, Serialize};

/// Body of `DELETE /api/user`.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteUserRequest<'a> {
    pub email: &'a str,
}

/// The `{message}` / `{error}` envelope the backend answers mutations with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiMessage {
    /// The most specific error text in an error response.
    #[must_use]
    pub fn into_error_text(self) -> Option<String> {
        self.error.or(self.message)
    }
}
