//! Transient user-facing notifications.
//!
//! Notifications are fire-and-forget: emitting one never fails and never
//! changes control flow. The dashboard renders queued notifications as
//! toasts that remove themselves after [`AUTO_DISMISS`].

use std::future::Future;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::{error, info, warn};

/// How long a toast stays on screen.
pub const AUTO_DISMISS: Duration = Duration::from_millis(3000);

/// Session key holding queued notifications.
const NOTIFICATIONS_KEY: &str = "notifications";

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationLevel {
    Success,
    Warning,
    Error,
}

impl NotificationLevel {
    /// CSS modifier used by the toast markup.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Success => "toast-success",
            Self::Warning => "toast-warning",
            Self::Error => "toast-error",
        }
    }
}

/// A message shown to the admin for a short time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    pub auto_dismiss_ms: u64,
}

impl Notification {
    fn new(level: NotificationLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            auto_dismiss_ms: u64::try_from(AUTO_DISMISS.as_millis()).unwrap_or(u64::MAX),
        }
    }

    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Success, message)
    }

    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Warning, message)
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Error, message)
    }

    #[must_use]
    pub const fn auto_dismiss(&self) -> Duration {
        Duration::from_millis(self.auto_dismiss_ms)
    }
}

/// Receives notifications emitted by dashboard actions.
pub trait Notifier: Sync {
    fn notify(&self, notification: Notification) -> impl Future<Output = ()> + Send;
}

/// Queues notifications in the visitor's session for the next page render.
#[derive(Debug, Clone)]
pub struct SessionNotifier {
    session: Session,
}

impl SessionNotifier {
    #[must_use]
    pub const fn new(session: Session) -> Self {
        Self { session }
    }

    /// Remove and return all queued notifications.
    pub async fn drain(session: &Session) -> Vec<Notification> {
        match session.remove::<Vec<Notification>>(NOTIFICATIONS_KEY).await {
            Ok(queued) => queued.unwrap_or_default(),
            Err(e) => {
                warn!(error = %e, "Failed to read queued notifications");
                Vec::new()
            }
        }
    }
}

impl Notifier for SessionNotifier {
    async fn notify(&self, notification: Notification) {
        let mut queued: Vec<Notification> = self
            .session
            .get(NOTIFICATIONS_KEY)
            .await
            .ok()
            .flatten()
            .unwrap_or_default();
        queued.push(notification);

        if let Err(e) = self.session.insert(NOTIFICATIONS_KEY, queued).await {
            warn!(error = %e, "Failed to queue notification");
        }
    }
}

/// Emits notifications as tracing events, for surfaces without a browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    async fn notify(&self, notification: Notification) {
        match notification.level {
            NotificationLevel::Success => info!(text = %notification.message, "Notification"),
            NotificationLevel::Warning => warn!(text = %notification.message, "Notification"),
            NotificationLevel::Error => error!(text = %notification.message, "Notification"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use tower_sessions::MemoryStore;

    use super::*;

    #[test]
    fn test_notifications_auto_dismiss_after_three_seconds() {
        let notification = Notification::warning("Admin cannot be deleted!");
        assert_eq!(notification.level, NotificationLevel::Warning);
        assert_eq!(notification.auto_dismiss(), Duration::from_millis(3000));
        assert_eq!(notification.level.css_class(), "toast-warning");
    }

    #[tokio::test]
    async fn test_session_notifier_queues_and_drains() {
        let session = Session::new(None, Arc::new(MemoryStore::default()), None);
        let notifier = SessionNotifier::new(session.clone());

        notifier.notify(Notification::success("first")).await;
        notifier.notify(Notification::error("second")).await;

        let drained = SessionNotifier::drain(&session).await;
        assert_eq!(
            drained,
            vec![Notification::success("first"), Notification::error("second")]
        );
        assert!(SessionNotifier::drain(&session).await.is_empty());
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_tracing_notifier_keeps_event_message_and_text() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            futures::executor::block_on(TracingNotifier.notify(Notification::error("boom")));
        });

        let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("Notification"), "{output}");
        assert!(output.contains("text=boom"), "{output}");
    }
}
