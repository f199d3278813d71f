//! User management commands.
//!
//! # Usage
//!
//! ```bash
//! fc-cli delete-user -e user@example.com -r Customer
//! ```

use foodcourt_admin::dashboard::{DeleteOutcome, delete_user as run_delete};
use foodcourt_admin::notifications::TracingNotifier;
use foodcourt_core::Role;

use super::{CommandError, api_client};

/// Delete a user, refusing protected roles.
///
/// The outcome notification is logged; a refused or failed deletion is an
/// error so the process exits non-zero.
pub async fn delete_user(email: &str, role: &str) -> Result<(), CommandError> {
    let api = api_client()?;

    match run_delete(&api, &TracingNotifier, email, &Role::new(role)).await {
        DeleteOutcome::Deleted { .. } => Ok(()),
        DeleteOutcome::Refused | DeleteOutcome::Failed => {
            Err(CommandError::NotDeleted(email.to_owned()))
        }
    }
}
