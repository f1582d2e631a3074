use crate::ui::SessionError;
use thiserror::Error;

/// Local form checks; nothing has been sent when one of these is returned.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Username and password are required")]
    MissingFields,
    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// Anything that went wrong once a request was attempted.
///
/// `Display` is the bare message; handlers add the "Registration failed: " or
/// "Login failed: " prefix.
#[derive(Debug, Error)]
pub enum RequestError {
    /// Non-2xx answer. The message is the response body text as sent.
    #[error("{body}")]
    Status { status: u16, body: String },
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    #[error("{0}")]
    Decode(#[from] serde_json::Error),
    #[error("{0}")]
    Session(#[from] SessionError),
}

impl RequestError {
    /// HTTP status for [`RequestError::Status`], `None` otherwise.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
