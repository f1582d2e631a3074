//! Page surfaces the handlers write to: user notifications, the session store
//! and navigation. Each surface is a trait so the terminal front end, embedders
//! and tests can supply their own. Implementations must never print or log the
//! session token.

pub mod navigate;
pub mod notify;
pub mod session;

pub use self::navigate::{ConsoleNavigator, Navigator, RecordingNavigator};
pub use self::notify::{ConsoleNotifier, Notification, NotificationKind, Notifier, RecordingNotifier};
pub use self::session::{FileSession, MemorySession, Session, SessionBackend, SessionError, SessionStore};
