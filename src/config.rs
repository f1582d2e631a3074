//! Resolved client configuration. Values come from CLI arguments or their
//! `SIGNUP_*` environment variables; nothing here is secret.

use std::{path::PathBuf, time::Duration};
use thiserror::Error;
use url::Url;

/// Page the user is sent to after a successful register or login.
pub const DEFAULT_LANDING_PAGE: &str = "index.html";
/// Pause between the success notification and the redirect.
pub const DEFAULT_REDIRECT_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("auth API URL is not configured")]
    MissingAuthApi,
    #[error("invalid auth API URL: {0}")]
    InvalidAuthApi(String),
    #[error("unsupported auth API scheme: {0}")]
    UnsupportedScheme(String),
}

#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub auth_api: String,
    pub landing_page: String,
    pub redirect_delay: Duration,
    pub timeout: Option<Duration>,
    pub session_file: Option<PathBuf>,
}

impl ClientConfig {
    /// Builds a config with defaults around a validated auth API base URL.
    ///
    /// # Errors
    /// Returns an error if `auth_api` is empty, unparsable, or not http(s).
    pub fn new(auth_api: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            auth_api: normalize_auth_api(auth_api)?,
            landing_page: DEFAULT_LANDING_PAGE.to_string(),
            redirect_delay: DEFAULT_REDIRECT_DELAY,
            timeout: None,
            session_file: None,
        })
    }

    /// Joins `path` onto the auth API base URL.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        join_url(&self.auth_api, path)
    }
}

/// Trims the base URL, checks it is an absolute http(s) URL with a host, and
/// strips trailing slashes so paths can be appended.
///
/// # Errors
/// Returns an error if the URL is empty, unparsable, or not http(s).
pub fn normalize_auth_api(value: &str) -> Result<String, ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::MissingAuthApi);
    }

    let url = Url::parse(trimmed).map_err(|e| ConfigError::InvalidAuthApi(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => return Err(ConfigError::UnsupportedScheme(scheme.to_string())),
    }

    if url.host().is_none() {
        return Err(ConfigError::InvalidAuthApi("no host specified".to_string()));
    }

    Ok(trimmed.trim_end_matches('/').to_string())
}

fn join_url(base: &str, path: &str) -> String {
    let path = path.trim();
    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_trailing_slashes() {
        assert_eq!(
            normalize_auth_api("  http://localhost:8080/auth// "),
            Ok("http://localhost:8080/auth".to_string())
        );
    }

    #[test]
    fn normalize_rejects_empty() {
        assert_eq!(normalize_auth_api("   "), Err(ConfigError::MissingAuthApi));
    }

    #[test]
    fn normalize_rejects_unsupported_scheme() {
        assert_eq!(
            normalize_auth_api("ftp://example.com"),
            Err(ConfigError::UnsupportedScheme("ftp".to_string()))
        );
    }

    #[test]
    fn normalize_rejects_relative_url() {
        assert!(matches!(
            normalize_auth_api("/auth"),
            Err(ConfigError::InvalidAuthApi(_))
        ));
    }

    #[test]
    fn endpoint_joins_paths() -> Result<(), ConfigError> {
        let config = ClientConfig::new("https://api.example.com/auth/")?;
        assert_eq!(
            config.endpoint("/register"),
            "https://api.example.com/auth/register"
        );
        assert_eq!(config.endpoint("login"), "https://api.example.com/auth/login");
        Ok(())
    }

    #[test]
    fn defaults_match_page_behaviour() -> Result<(), ConfigError> {
        let config = ClientConfig::new("http://localhost:8080/auth")?;
        assert_eq!(config.landing_page, "index.html");
        assert_eq!(config.redirect_delay, Duration::from_millis(1000));
        assert!(config.timeout.is_none());
        assert!(config.session_file.is_none());
        Ok(())
    }
}
