//! User management route handlers.

use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect},
};
use foodcourt_core::Role;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::{
    dashboard::{self, DeleteOutcome},
    error::AppError,
    notifications::SessionNotifier,
    state::AppState,
};

/// Form input for deleting a user.
#[derive(Debug, Deserialize)]
pub struct DeleteUserForm {
    pub email: String,
    #[serde(default)]
    pub role: String,
}

/// Delete user handler.
///
/// The outcome is reported through a session notification and the redirect
/// reloads the dashboard, so a deleted user disappears from the table.
#[instrument(skip(state, session, form), fields(email = %form.email))]
pub async fn delete(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<DeleteUserForm>,
) -> Result<impl IntoResponse, AppError> {
    let email = form.email.trim();
    if email.is_empty() {
        return Err(AppError::BadRequest("email is required".to_string()));
    }

    let notifier = SessionNotifier::new(session);
    let role = Role::new(form.role.trim());
    let outcome = dashboard::delete_user(state.api(), &notifier, email, &role).await;

    if let DeleteOutcome::Deleted { email } = &outcome {
        tracing::info!(%email, "User removed from dashboard");
    }

    Ok(Redirect::to("/"))
}
