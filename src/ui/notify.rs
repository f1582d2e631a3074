//! User-facing notifications. Messages must be safe to show and never contain
//! passwords or tokens.

use std::{
    fmt,
    sync::{Arc, Mutex},
};
use tracing::{error, info};

/// Supported notification styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Error,
    Success,
    Info,
}

impl NotificationKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Success => "success",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shows a message to the user, tagged with its kind.
pub trait Notifier {
    fn notify(&self, message: &str, kind: NotificationKind);
}

impl<T: Notifier + ?Sized> Notifier for &T {
    fn notify(&self, message: &str, kind: NotificationKind) {
        (**self).notify(message, kind);
    }
}

impl<T: Notifier + ?Sized> Notifier for Arc<T> {
    fn notify(&self, message: &str, kind: NotificationKind) {
        (**self).notify(message, kind);
    }
}

/// Prints notifications to the terminal: errors to stderr, everything else to
/// stdout.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str, kind: NotificationKind) {
        match kind {
            NotificationKind::Error => {
                error!(kind = %kind, "{message}");
                eprintln!("{message}");
            }
            NotificationKind::Success | NotificationKind::Info => {
                info!(kind = %kind, "{message}");
                println!("{message}");
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

/// Keeps every notification in order, for embedders that render them later.
#[derive(Clone, Debug, Default)]
pub struct RecordingNotifier {
    notifications: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the notifications seen so far.
    #[must_use]
    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications
            .lock()
            .map(|notifications| notifications.clone())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn last(&self) -> Option<Notification> {
        self.notifications().pop()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str, kind: NotificationKind) {
        if let Ok(mut notifications) = self.notifications.lock() {
            notifications.push(Notification {
                message: message.to_string(),
                kind,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_renders_lowercase_tag() {
        assert_eq!(NotificationKind::Error.to_string(), "error");
        assert_eq!(NotificationKind::Success.to_string(), "success");
        assert_eq!(NotificationKind::Info.as_str(), "info");
    }

    #[test]
    fn recorder_keeps_order_across_clones() {
        let recorder = RecordingNotifier::new();
        let shared = recorder.clone();

        recorder.notify("first", NotificationKind::Info);
        shared.notify("second", NotificationKind::Error);

        let seen = recorder.notifications();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].message, "first");
        assert_eq!(
            recorder.last(),
            Some(Notification {
                message: "second".to_string(),
                kind: NotificationKind::Error,
            })
        );
    }

    #[test]
    fn notifier_works_through_references() {
        let recorder = RecordingNotifier::new();
        let by_ref = &recorder;
        by_ref.notify("hello", NotificationKind::Success);
        assert_eq!(recorder.notifications().len(), 1);
    }
}
