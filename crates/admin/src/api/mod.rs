//! Client for the food-ordering backend REST API.
//!
//! Issues independent requests against one configured origin and surfaces
//! either a decoded payload or a [`FetchError`].
//!
//! # Endpoints
//!
//! ```text
//! GET    /api/users                    - All users
//! GET    /api/orders                   - All orders
//! GET    /api/add-new/category-stats   - {labels, data} per item category
//! DELETE /api/user                     - Body {email}; answers {message} or {error}
//! ```
//!
//! No authentication header is sent and nothing is retried.

mod error;
mod types;

pub use error::FetchError;
pub use types::{ApiMessage, DeleteUserRequest};

use std::sync::Arc;

use foodcourt_core::{CategoryStats, Order, User};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::config::ApiConfig;

/// Path of the user listing, relative to the origin.
pub const USERS_PATH: &str = "api/users";
/// Path of the order listing, relative to the origin.
pub const ORDERS_PATH: &str = "api/orders";
/// Path of the category statistics, relative to the origin.
pub const CATEGORY_STATS_PATH: &str = "api/add-new/category-stats";
/// Path of the user deletion endpoint, relative to the origin.
pub const USER_PATH: &str = "api/user";

/// Backend API client.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    client: reqwest::Client,
    origin: Url,
}

impl ApiClient {
    /// Create a client for the configured origin.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(config: &ApiConfig) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| FetchError::Network(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            inner: Arc::new(ApiClientInner {
                client,
                origin: base_url(&config.origin),
            }),
        })
    }

    /// Fetch all users.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, non-success status, or a body
    /// that is not a JSON array of users.
    #[instrument(skip(self))]
    pub async fn get_users(&self) -> Result<Vec<User>, FetchError> {
        self.get(USERS_PATH).await
    }

    /// Fetch all orders.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, non-success status, or a body
    /// that is not a JSON array of orders.
    #[instrument(skip(self))]
    pub async fn get_orders(&self) -> Result<Vec<Order>, FetchError> {
        self.get(ORDERS_PATH).await
    }

    /// Fetch item counts per category.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, non-success status, or a body
    /// whose `labels` and `data` are missing or of different lengths.
    #[instrument(skip(self))]
    pub async fn get_category_stats(&self) -> Result<CategoryStats, FetchError> {
        self.get(CATEGORY_STATS_PATH).await
    }

    /// Delete the user with the given email.
    ///
    /// A success response with an empty body yields a default [`ApiMessage`].
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, non-success status (carrying the
    /// backend's `error` text), or a non-empty body that is not JSON.
    #[instrument(skip(self))]
    pub async fn delete_user(&self, email: &str) -> Result<ApiMessage, FetchError> {
        let url = self.endpoint(USER_PATH)?;
        let response = self
            .inner
            .client
            .delete(url)
            .json(&DeleteUserRequest { email })
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "Backend rejected user deletion");
            return Err(http_error(status, &body));
        }

        if is_blank(&body) {
            return Ok(ApiMessage::default());
        }

        serde_json::from_slice(&body).map_err(|e| FetchError::Decode(e.to_string()))
    }

    /// Execute a GET request and decode the JSON body.
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = self.endpoint(path)?;
        let response = self
            .inner
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(http_error(status, &body));
        }

        debug!(path, bytes = body.len(), "Backend responded");

        serde_json::from_slice(&body).map_err(|e| FetchError::Decode(e.to_string()))
    }

    fn endpoint(&self, path: &str) -> Result<Url, FetchError> {
        self.inner
            .origin
            .join(path)
            .map_err(|e| FetchError::Network(format!("Invalid request URL for {path}: {e}")))
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("origin", &self.inner.origin.as_str())
            .finish_non_exhaustive()
    }
}

/// Build an HTTP error, lifting the backend's `{error}` text when present.
fn http_error(status: reqwest::StatusCode, body: &[u8]) -> FetchError {
    let message = serde_json::from_slice::<ApiMessage>(body)
        .ok()
        .and_then(ApiMessage::into_error_text);

    FetchError::Http {
        status: status.as_u16(),
        message,
    }
}

/// Ensure the origin ends with `/` so relative endpoint paths keep any
/// path prefix the origin carries.
fn base_url(origin: &Url) -> Url {
    let mut base = origin.clone();
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base
}

fn is_blank(body: &[u8]) -> bool {
    body.iter().all(u8::is_ascii_whitespace)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn client(origin: &str) -> ApiClient {
        ApiClient::new(&ApiConfig {
            origin: Url::parse(origin).unwrap(),
        })
        .unwrap()
    }

    #[test]
    fn test_endpoints_resolve_against_origin() {
        let api = client("http://localhost:5000");
        assert_eq!(
            api.endpoint(USERS_PATH).unwrap().as_str(),
            "http://localhost:5000/api/users"
        );
        assert_eq!(
            api.endpoint(CATEGORY_STATS_PATH).unwrap().as_str(),
            "http://localhost:5000/api/add-new/category-stats"
        );
    }

    #[test]
    fn test_origin_path_prefix_is_kept() {
        let api = client("https://example.com/backend");
        assert_eq!(
            api.endpoint(USER_PATH).unwrap().as_str(),
            "https://example.com/backend/api/user"
        );
    }

    #[test]
    fn test_http_error_lifts_server_text() {
        let err = http_error(
            reqwest::StatusCode::NOT_FOUND,
            br#"{"error": "User not found"}"#,
        );
        assert_eq!(
            err,
            FetchError::Http {
                status: 404,
                message: Some("User not found".to_string())
            }
        );

        let err = http_error(reqwest::StatusCode::BAD_GATEWAY, b"<html>oops</html>");
        assert_eq!(
            err,
            FetchError::Http {
                status: 502,
                message: None
            }
        );
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(b""));
        assert!(is_blank(b" \n"));
        assert!(!is_blank(b"{}"));
    }

    #[test]
    fn test_debug_shows_origin() {
        let api = client("http://localhost:5000");
        assert!(format!("{api:?}").contains("localhost:5000"));
    }
}
