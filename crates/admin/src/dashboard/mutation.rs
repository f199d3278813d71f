//! The delete-user action.

use foodcourt_core::Role;
use serde::Serialize;
use tracing::{info, instrument, warn};

use super::source::DashboardSource;
use crate::api::FetchError;
use crate::notifications::{Notification, Notifier};

/// Shown when an admin deletion is attempted.
pub const ADMIN_PROTECTED_MESSAGE: &str = "Admin cannot be deleted!";
/// Shown on success when the backend supplies no message.
pub const DELETED_MESSAGE: &str = "User deleted successfully";
/// Shown on an HTTP failure when the backend supplies no error text.
pub const DELETE_FAILED_MESSAGE: &str = "Failed to delete user";
/// Shown when the request could not complete or the answer was unreadable.
pub const DELETE_ERROR_MESSAGE: &str = "An error occurred while deleting the user";

/// What a delete action did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DeleteOutcome {
    /// The role is protected; no request was sent.
    Refused,
    /// The backend deleted the user; callers drop it from their state.
    Deleted { email: String },
    /// The backend refused or the request failed; state is unchanged.
    Failed,
}

/// Delete the user with `email` unless `role` is protected.
///
/// Exactly one notification is emitted per call.
#[instrument(skip(source, notifier))]
pub async fn delete_user<S, N>(source: &S, notifier: &N, email: &str, role: &Role) -> DeleteOutcome
where
    S: DashboardSource,
    N: Notifier,
{
    if role.is_protected() {
        info!("Refusing to delete protected user");
        notifier
            .notify(Notification::warning(ADMIN_PROTECTED_MESSAGE))
            .await;
        return DeleteOutcome::Refused;
    }

    match source.delete_user(email).await {
        Ok(reply) => {
            info!("User deleted");
            let message = reply.message.unwrap_or_else(|| DELETED_MESSAGE.to_owned());
            notifier.notify(Notification::success(message)).await;
            DeleteOutcome::Deleted {
                email: email.to_owned(),
            }
        }
        Err(e) => {
            warn!(reason = e.reason(), error = %e, "User deletion failed");
            notifier.notify(Notification::error(failure_message(&e))).await;
            DeleteOutcome::Failed
        }
    }
}

fn failure_message(error: &FetchError) -> String {
    match error {
        FetchError::Http { message, .. } => message
            .clone()
            .unwrap_or_else(|| DELETE_FAILED_MESSAGE.to_owned()),
        FetchError::Network(_) | FetchError::Decode(_) => DELETE_ERROR_MESSAGE.to_owned(),
    }
}
