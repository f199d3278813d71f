//! Dashboard route handler.

use askama::Template;
use axum::{extract::State, response::Html};
use foodcourt_core::User;
use tower_sessions::Session;
use tracing::instrument;

use crate::{
    dashboard::{ChartData, DashboardState, DashboardView},
    error::AppError,
    filters,
    notifications::{Notification, SessionNotifier},
    state::AppState,
};

/// User row for the management table.
#[derive(Debug, Clone)]
pub struct UserRow {
    pub full_name: String,
    pub email: String,
    pub role: String,
    pub protected: bool,
}

impl From<&User> for UserRow {
    fn from(user: &User) -> Self {
        Self {
            full_name: user.full_name().to_string(),
            email: user.email().to_string(),
            role: user.role.as_str().to_string(),
            protected: user.role.is_protected(),
        }
    }
}

/// Toast shown on top of the page.
#[derive(Debug, Clone)]
pub struct ToastView {
    pub class: &'static str,
    pub message: String,
    pub dismiss_ms: u64,
}

impl From<Notification> for ToastView {
    fn from(notification: Notification) -> Self {
        Self {
            class: notification.level.css_class(),
            message: notification.message,
            dismiss_ms: notification.auto_dismiss_ms,
        }
    }
}

/// Dashboard template.
#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub current_path: String,
    pub view: DashboardView,
    pub users: Vec<UserRow>,
    pub toasts: Vec<ToastView>,
    pub items_chart: String,
    pub monthly_sales_chart: String,
    pub user_roles_chart: String,
}

impl DashboardTemplate {
    fn new(view: DashboardView, notifications: Vec<Notification>) -> Result<Self, AppError> {
        Ok(Self {
            current_path: "/".to_string(),
            users: view.users.iter().map(UserRow::from).collect(),
            toasts: notifications.into_iter().map(ToastView::from).collect(),
            items_chart: chart_json(&view.charts.items)?,
            monthly_sales_chart: chart_json(&view.charts.monthly_sales)?,
            user_roles_chart: chart_json(&view.charts.user_roles)?,
            view,
        })
    }
}

fn chart_json(chart: &ChartData) -> Result<String, AppError> {
    serde_json::to_string(chart).map_err(|e| AppError::Internal(format!("chart encoding: {e}")))
}

/// Dashboard page handler.
///
/// Every request is one activation: the three collections are fetched
/// concurrently and rendered once all have resolved.
#[instrument(skip(state, session))]
pub async fn dashboard(
    State(state): State<AppState>,
    session: Session,
) -> Result<Html<String>, AppError> {
    let dashboard = DashboardState::load(state.api()).await;
    let notifications = SessionNotifier::drain(&session).await;

    let template = DashboardTemplate::new(DashboardView::from_state(&dashboard), notifications)?;
    Ok(Html(template.render()?))
}
