//! HTTP route handlers for admin.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Health check
//!
//! # Dashboard
//! GET  /                       - Metrics cards, charts, users table, toasts
//!
//! # Orders
//! GET  /orders/recent          - Orders of the last N days (?days=N)
//!
//! # Users
//! POST /users/delete           - Delete a user (form: email, role)
//!
//! # JSON API
//! GET  /api/dashboard          - Derived dashboard view as JSON
//! ```

use axum::{
    Router,
    routing::{get, post},
};

use crate::{error::AppError, state::AppState};

pub mod api;
pub mod dashboard;
pub mod orders;
pub mod users;

/// Build the admin router.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Health
        .route("/health", get(health))
        // Dashboard
        .route("/", get(dashboard::dashboard))
        // Orders
        .route("/orders/recent", get(orders::recent))
        // Users
        .route("/users/delete", post(users::delete))
        // JSON API
        .merge(api::router())
        .fallback(not_found)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check the backend.
async fn health() -> &'static str {
    "ok"
}

/// Fallback for unknown paths.
async fn not_found(uri: axum::http::Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
