//! Submit handlers for the registration and login forms.
//!
//! A handler owns the auth client and the three page surfaces. `register` and
//! `login` each run one linear sequence: validate, request, store, notify,
//! wait, navigate. Concurrent calls are not coordinated; two submissions send
//! two requests and the last storage write wins.

use crate::{
    auth::{
        client::AuthClient,
        errors::{RequestError, ValidationError},
        types::{LoginForm, RegistrationForm},
    },
    config::{ClientConfig, DEFAULT_LANDING_PAGE, DEFAULT_REDIRECT_DELAY},
    ui::{NotificationKind, Navigator, Notifier, Session, SessionStore},
};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info, instrument, warn};

pub const REGISTER_SUCCESS_MESSAGE: &str = "✅ Registration successful! Redirecting...";
pub const REGISTER_FAILURE_PREFIX: &str = "Registration failed: ";
pub const LOGIN_SUCCESS_MESSAGE: &str = "✅ Login successful! Redirecting...";
pub const LOGIN_FAILURE_PREFIX: &str = "Login failed: ";

/// How a submission ended. The user has already been notified in every case.
#[derive(Debug)]
pub enum Outcome {
    /// A local check failed; no request was sent.
    Rejected(ValidationError),
    /// The request was sent and failed; nothing was stored.
    Failed(RequestError),
    /// The session was stored and the user redirected.
    Completed { username: String },
}

impl Outcome {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }
}

pub struct Handler<N, S, V> {
    client: AuthClient,
    notifier: N,
    session: S,
    navigator: V,
    landing_page: String,
    redirect_delay: Duration,
}

impl<N, S, V> Handler<N, S, V>
where
    N: Notifier,
    S: SessionStore,
    V: Navigator,
{
    pub fn new(client: AuthClient, notifier: N, session: S, navigator: V) -> Self {
        Self {
            client,
            notifier,
            session,
            navigator,
            landing_page: DEFAULT_LANDING_PAGE.to_string(),
            redirect_delay: DEFAULT_REDIRECT_DELAY,
        }
    }

    /// Builds a handler with the landing page and redirect delay from `config`.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(
        config: &ClientConfig,
        notifier: N,
        session: S,
        navigator: V,
    ) -> Result<Self, RequestError> {
        Ok(Self::new(AuthClient::new(config)?, notifier, session, navigator)
            .with_landing_page(&config.landing_page)
            .with_redirect_delay(config.redirect_delay))
    }

    #[must_use]
    pub fn with_landing_page(mut self, landing_page: &str) -> Self {
        self.landing_page = landing_page.to_string();
        self
    }

    #[must_use]
    pub fn with_redirect_delay(mut self, redirect_delay: Duration) -> Self {
        self.redirect_delay = redirect_delay;
        self
    }

    pub const fn client(&self) -> &AuthClient {
        &self.client
    }

    pub const fn notifier(&self) -> &N {
        &self.notifier
    }

    pub const fn session(&self) -> &S {
        &self.session
    }

    pub const fn navigator(&self) -> &V {
        &self.navigator
    }

    /// Handles a registration form submission.
    pub async fn register(&self, form: &RegistrationForm) -> Outcome {
        let credentials = match form.validate() {
            Ok(credentials) => credentials,
            Err(e) => return self.reject(e),
        };

        let result = async {
            let token = self.client.register(&credentials).await?;
            Session::store(&self.session, &token, &credentials.username)?;
            Ok::<(), RequestError>(())
        }
        .await;

        match result {
            Ok(()) => {
                info!(username = %credentials.username, "registration succeeded");
                self.complete(REGISTER_SUCCESS_MESSAGE, credentials.username)
                    .await
            }
            Err(e) => self.fail(REGISTER_FAILURE_PREFIX, e),
        }
    }

    /// Handles a login form submission.
    pub async fn login(&self, form: &LoginForm) -> Outcome {
        let credentials = match form.validate() {
            Ok(credentials) => credentials,
            Err(e) => return self.reject(e),
        };

        let result = async {
            let token = self.client.login(&credentials).await?;
            Session::store(&self.session, &token, &credentials.username)?;
            Ok::<(), RequestError>(())
        }
        .await;

        match result {
            Ok(()) => {
                info!(username = %credentials.username, "login succeeded");
                self.complete(LOGIN_SUCCESS_MESSAGE, credentials.username)
                    .await
            }
            Err(e) => self.fail(LOGIN_FAILURE_PREFIX, e),
        }
    }

    fn reject(&self, error: ValidationError) -> Outcome {
        debug!(%error, "form rejected before submission");
        self.notifier
            .notify(&error.to_string(), NotificationKind::Error);
        Outcome::Rejected(error)
    }

    fn fail(&self, prefix: &str, error: RequestError) -> Outcome {
        warn!(status = ?error.status(), "{prefix}{error}");
        self.notifier
            .notify(&format!("{prefix}{error}"), NotificationKind::Error);
        Outcome::Failed(error)
    }

    #[instrument(skip(self, message))]
    async fn complete(&self, message: &str, username: String) -> Outcome {
        self.notifier.notify(message, NotificationKind::Success);

        sleep(self.redirect_delay).await;
        self.navigator.navigate(&self.landing_page);

        Outcome::Completed { username }
    }
}
