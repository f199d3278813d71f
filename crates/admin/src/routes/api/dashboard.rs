//! Dashboard JSON API handler.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;
use tracing::instrument;

use crate::{
    dashboard::{DashboardState, DashboardView},
    state::AppState,
};

/// Build the dashboard API router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/dashboard", get(dashboard))
}

/// Error body returned while the dashboard cannot be shown.
#[derive(Debug, Serialize)]
pub struct DashboardErrorResponse {
    pub error: String,
}

/// Derived dashboard view as JSON.
///
/// Answers `502 Bad Gateway` with the first fatal fetch error when users or
/// orders could not be loaded.
#[instrument(skip(state))]
pub async fn dashboard(State(state): State<AppState>) -> Response {
    let dashboard = DashboardState::load(state.api()).await;

    if let Some(error) = dashboard.error() {
        return (
            StatusCode::BAD_GATEWAY,
            Json(DashboardErrorResponse {
                error: error.to_string(),
            }),
        )
            .into_response();
    }

    Json(DashboardView::from_state(&dashboard)).into_response()
}
