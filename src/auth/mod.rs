//! Auth feature: form validation, the HTTP client for the auth service, and the
//! submit handlers that tie them to the page surfaces in [`crate::ui`]. Code
//! here handles passwords and session tokens and must not log them.
//!
//! Flow Overview: a form is validated locally; only valid credentials reach
//! the network. A 2xx answer carries a token that is stored in the session
//! before the user is redirected. Every failure ends in one `error`
//! notification.

pub mod client;
pub mod errors;
pub mod handler;
pub mod types;

pub use self::client::AuthClient;
pub use self::errors::{RequestError, ValidationError};
pub use self::handler::{Handler, Outcome};
pub use self::types::{Credentials, LoginCredentials, LoginForm, RegistrationForm};
