//! HTTP client for the auth service. Each call is one request with no retry;
//! a non-2xx status is returned as [`RequestError::Status`] carrying the raw
//! response body, which is what the user is shown.

use crate::{
    APP_USER_AGENT,
    auth::{
        errors::RequestError,
        types::{CheckUsernameResponse, Credentials, LoginCredentials, TokenResponse},
    },
    config::ClientConfig,
};
use reqwest::{Client, Response};
use secrecy::SecretString;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{Instrument, debug, info_span, instrument};

#[derive(Clone, Debug)]
pub struct AuthClient {
    http: Client,
    base_url: String,
}

impl AuthClient {
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self, RequestError> {
        Self::with_timeout(&config.auth_api, config.timeout)
    }

    /// Builds a client for an already normalized base URL.
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn with_timeout(base_url: &str, timeout: Option<Duration>) -> Result<Self, RequestError> {
        let mut builder = Client::builder().user_agent(APP_USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// `POST /register`; returns the session token.
    ///
    /// # Errors
    /// Returns an error on transport failure, a non-2xx status, or a body
    /// without a `token`.
    #[instrument(skip(self, credentials), fields(username = %credentials.username))]
    pub async fn register(&self, credentials: &Credentials) -> Result<SecretString, RequestError> {
        let url = self.endpoint("/register");

        let span = info_span!("auth.register", http.method = "POST", url = %url);
        let response = self
            .http
            .post(&url)
            .json(&credentials.request())
            .send()
            .instrument(span)
            .await?;

        let body: TokenResponse = read_json(response).await?;

        Ok(SecretString::from(body.token))
    }

    /// `POST /login`; returns the session token.
    ///
    /// # Errors
    /// Returns an error on transport failure, a non-2xx status, or a body
    /// without a `token`.
    #[instrument(skip(self, credentials), fields(username = %credentials.username))]
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<SecretString, RequestError> {
        let url = self.endpoint("/login");

        let span = info_span!("auth.login", http.method = "POST", url = %url);
        let response = self
            .http
            .post(&url)
            .json(&credentials.request())
            .send()
            .instrument(span)
            .await?;

        let body: TokenResponse = read_json(response).await?;

        Ok(SecretString::from(body.token))
    }

    /// `GET /check-username`; `true` when the name is already taken.
    ///
    /// # Errors
    /// Returns an error on transport failure, a non-2xx status, or a malformed body.
    #[instrument(skip(self))]
    pub async fn check_username(&self, username: &str) -> Result<bool, RequestError> {
        let url = self.endpoint("/check-username");

        let span = info_span!("auth.check_username", http.method = "GET", url = %url);
        let response = self
            .http
            .get(&url)
            .query(&[("username", username.trim())])
            .send()
            .instrument(span)
            .await?;

        let body: CheckUsernameResponse = read_json(response).await?;

        Ok(body.exists)
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, RequestError> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        debug!(status = status.as_u16(), "auth service rejected request");

        return Err(RequestError::Status {
            status: status.as_u16(),
            body,
        });
    }

    Ok(serde_json::from_str(&body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::types::{LoginForm, RegistrationForm};
    use anyhow::{Result, anyhow};
    use secrecy::ExposeSecret;
    use serde_json::json;
    use std::net::TcpListener;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn can_bind_localhost() -> bool {
        TcpListener::bind("127.0.0.1:0").is_ok()
    }

    fn credentials() -> Result<Credentials> {
        Ok(RegistrationForm::new("alice", "a@b.com", "pw123", "pw123").validate()?)
    }

    #[test]
    fn endpoint_joins_without_double_slash() -> Result<()> {
        let client = AuthClient::with_timeout("http://localhost:8080/auth/", None)?;
        assert_eq!(client.base_url(), "http://localhost:8080/auth");
        assert_eq!(
            client.endpoint("/register"),
            "http://localhost:8080/auth/register"
        );
        Ok(())
    }

    #[tokio::test]
    async fn register_posts_json_and_returns_token() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/register"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({
                "username": "alice",
                "email": "a@b.com",
                "password": "pw123"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "token": "abc",
                "username": "alice",
                "message": "Registration successful"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = AuthClient::with_timeout(&server.uri(), None)?;
        let token = client.register(&credentials()?).await?;
        assert_eq!(token.expose_secret(), "abc");
        Ok(())
    }

    #[tokio::test]
    async fn register_returns_body_text_on_failure_status() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/register"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_string("Registration failed: Username already exists"),
            )
            .mount(&server)
            .await;

        let client = AuthClient::with_timeout(&server.uri(), None)?;
        let err = client
            .register(&credentials()?)
            .await
            .err()
            .ok_or_else(|| anyhow!("expected error"))?;
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.to_string(), "Registration failed: Username already exists");
        Ok(())
    }

    #[tokio::test]
    async fn register_rejects_body_without_token() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/register"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
            .mount(&server)
            .await;

        let client = AuthClient::with_timeout(&server.uri(), None)?;
        let err = client
            .register(&credentials()?)
            .await
            .err()
            .ok_or_else(|| anyhow!("expected error"))?;
        assert!(matches!(err, RequestError::Decode(_)));
        assert!(err.to_string().contains("token"));
        Ok(())
    }

    #[tokio::test]
    async fn login_posts_username_and_password() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/login"))
            .and(body_json(json!({"username": "alice", "password": "pw123"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "xyz"})))
            .expect(1)
            .mount(&server)
            .await;

        let client = AuthClient::with_timeout(&server.uri(), None)?;
        let credentials = LoginForm::new("alice", "pw123").validate()?;
        let token = client.login(&credentials).await?;
        assert_eq!(token.expose_secret(), "xyz");
        Ok(())
    }

    #[tokio::test]
    async fn check_username_reads_exists_flag() -> Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/check-username"))
            .and(query_param("username", "alice"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"exists": true})))
            .mount(&server)
            .await;

        let client = AuthClient::with_timeout(&server.uri(), None)?;
        assert!(client.check_username(" alice ").await?);
        Ok(())
    }
}
