//! API route handlers for admin.
//!
//! JSON renditions of the dashboard for scripts and monitoring.

pub mod dashboard;

use axum::Router;

use crate::state::AppState;

/// Build the complete API router.
pub fn router() -> Router<AppState> {
    Router::new().merge(dashboard::router())
}
