//! Form input and wire payloads for the auth service. Password fields are
//! `SecretString` and the request bodies borrow them only while a request is
//! being encoded, so none of these values can end up in a log line.

use crate::auth::errors::ValidationError;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Raw registration form values, as typed by the user.
#[derive(Clone, Debug)]
pub struct RegistrationForm {
    pub username: String,
    pub email: String,
    pub password: SecretString,
    pub password_confirm: SecretString,
}

impl RegistrationForm {
    #[must_use]
    pub fn new(username: &str, email: &str, password: &str, password_confirm: &str) -> Self {
        Self {
            username: username.to_string(),
            email: email.to_string(),
            password: SecretString::from(password.to_string()),
            password_confirm: SecretString::from(password_confirm.to_string()),
        }
    }

    /// Trims every field and applies the two local checks, in order: username
    /// and password present, then password equal to its confirmation. The
    /// email format is left to the server.
    ///
    /// # Errors
    /// Returns the first check that fails.
    pub fn validate(&self) -> Result<Credentials, ValidationError> {
        let username = self.username.trim();
        let email = self.email.trim();
        let password = self.password.expose_secret().trim();
        let password_confirm = self.password_confirm.expose_secret().trim();

        if username.is_empty() || password.is_empty() {
            return Err(ValidationError::MissingFields);
        }

        if password != password_confirm {
            return Err(ValidationError::PasswordMismatch);
        }

        Ok(Credentials {
            username: username.to_string(),
            email: email.to_string(),
            password: SecretString::from(password.to_string()),
        })
    }
}

/// Validated registration credentials.
#[derive(Clone, Debug)]
pub struct Credentials {
    pub username: String,
    pub email: String,
    pub password: SecretString,
}

impl Credentials {
    pub(crate) fn request(&self) -> RegisterRequest<'_> {
        RegisterRequest {
            username: &self.username,
            email: &self.email,
            password: self.password.expose_secret(),
        }
    }
}

/// Raw login form values.
#[derive(Clone, Debug)]
pub struct LoginForm {
    pub username: String,
    pub password: SecretString,
}

impl LoginForm {
    #[must_use]
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: SecretString::from(password.to_string()),
        }
    }

    /// # Errors
    /// Returns [`ValidationError::MissingFields`] if either trimmed field is empty.
    pub fn validate(&self) -> Result<LoginCredentials, ValidationError> {
        let username = self.username.trim();
        let password = self.password.expose_secret().trim();

        if username.is_empty() || password.is_empty() {
            return Err(ValidationError::MissingFields);
        }

        Ok(LoginCredentials {
            username: username.to_string(),
            password: SecretString::from(password.to_string()),
        })
    }
}

#[derive(Clone, Debug)]
pub struct LoginCredentials {
    pub username: String,
    pub password: SecretString,
}

impl LoginCredentials {
    pub(crate) fn request(&self) -> LoginRequest<'_> {
        LoginRequest {
            username: &self.username,
            password: self.password.expose_secret(),
        }
    }
}

// Field order is the wire order.
#[derive(Serialize)]
pub(crate) struct RegisterRequest<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Success body of `/register` and `/login`. The service also sends
/// `username` and `message`; only the token is used.
#[derive(Deserialize)]
pub(crate) struct TokenResponse {
    pub token: String,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckUsernameResponse {
    pub exists: bool,
}
