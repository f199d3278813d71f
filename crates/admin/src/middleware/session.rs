//! Session middleware configuration for admin.
//!
//! Sessions only carry queued notifications between a form post and the
//! page it redirects to, so they live in memory and expire quickly.

use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

/// Session cookie name for admin.
pub const SESSION_COOKIE_NAME: &str = "foodcourt_admin_session";

/// Session expiry time in seconds (1 hour of inactivity).
const SESSION_EXPIRY_SECONDS: i64 = 60 * 60;

/// Create the session layer with an in-memory store.
///
/// `secure` marks the cookie HTTPS-only.
#[must_use]
pub fn create_session_layer(secure: bool) -> SessionManagerLayer<MemoryStore> {
    SessionManagerLayer::new(MemoryStore::default())
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(secure)
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}
