//! # signup (registration client for the money-tracker auth service)
//!
//! `signup` submits a registration form to the auth service, stores the
//! returned session token and sends the user on to the landing page.
//!
//! ## Registration flow
//!
//! 1. **Validate:** the four form fields are trimmed. Username and password
//!    must be non-empty and the password must match its confirmation. A failed
//!    check is reported as an `error` notification and nothing is sent.
//! 2. **Submit:** one `POST {AUTH_API}/register` with the JSON body
//!    `{username, email, password}`.
//! 3. **Store:** on a 2xx response the `token` is written to the session
//!    store under `authToken`, together with `loggedIn` and `username`.
//! 4. **Redirect:** a success notification is shown and, after a fixed delay,
//!    the navigator is pointed at the landing page.
//!
//! The page surfaces (notifications, session storage, navigation) are traits in
//! [`ui`], so the same handler drives the terminal front end and tests.
//! Passwords and tokens are carried as [`secrecy::SecretString`] and are never
//! logged.

pub mod auth;
pub mod cli;
pub mod config;
pub mod ui;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
