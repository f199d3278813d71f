//! Foodcourt Admin library.
//!
//! This crate provides the admin dashboard as a library, allowing it to be
//! tested and reused by the CLI.
//!
//! # Modules
//!
//! - [`api`] - Backend REST client (users, orders, category stats, delete)
//! - [`dashboard`] - Per-activation state, charts and the delete-user action
//! - [`notifications`] - Toast notifications and their delivery
//! - [`routes`] - Axum handlers for the server-rendered dashboard

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod notifications;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

use crate::middleware::create_session_layer;
use crate::state::AppState;

/// Build the admin application router with sessions and request tracing.
///
/// Sentry layers are added by the binary so tests run without them.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::routes())
        // The admin binds a private address and is served over plain HTTP
        .layer(create_session_layer(false))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record(
                            "latency_ms",
                            u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                        );
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .with_state(state)
}
