//! Connection and page options shared by every subcommand.

use crate::config::{ClientConfig, DEFAULT_LANDING_PAGE};
use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command};
use std::{path::PathBuf, time::Duration};

pub const ARG_AUTH_API: &str = "auth-api";
pub const ARG_LANDING_PAGE: &str = "landing-page";
pub const ARG_REDIRECT_DELAY_MS: &str = "redirect-delay-ms";
pub const ARG_TIMEOUT_SECONDS: &str = "timeout-seconds";
pub const ARG_SESSION_FILE: &str = "session-file";

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_AUTH_API)
                .long(ARG_AUTH_API)
                .help("Auth service base URL, example: http://localhost:8080/auth")
                .env("SIGNUP_AUTH_API")
                .global(true),
        )
        .arg(
            Arg::new(ARG_LANDING_PAGE)
                .long(ARG_LANDING_PAGE)
                .help("Page to open after a successful register or login")
                .env("SIGNUP_LANDING_PAGE")
                .default_value(DEFAULT_LANDING_PAGE)
                .global(true),
        )
        .arg(
            Arg::new(ARG_REDIRECT_DELAY_MS)
                .long(ARG_REDIRECT_DELAY_MS)
                .help("Delay in milliseconds between the success message and the redirect")
                .env("SIGNUP_REDIRECT_DELAY_MS")
                .default_value("1000")
                .value_parser(clap::value_parser!(u64))
                .global(true),
        )
        .arg(
            Arg::new(ARG_TIMEOUT_SECONDS)
                .long(ARG_TIMEOUT_SECONDS)
                .help("Request timeout in seconds (default: no timeout)")
                .env("SIGNUP_TIMEOUT_SECONDS")
                .value_parser(clap::value_parser!(u64).range(1..))
                .global(true),
        )
        .arg(
            Arg::new(ARG_SESSION_FILE)
                .long(ARG_SESSION_FILE)
                .help("Keep the session in this JSON file instead of in memory")
                .env("SIGNUP_SESSION_FILE")
                .value_parser(clap::value_parser!(PathBuf))
                .global(true),
        )
}

#[derive(Debug, Clone)]
pub struct Options {
    pub auth_api: Option<String>,
    pub landing_page: String,
    pub redirect_delay_ms: u64,
    pub timeout_seconds: Option<u64>,
    pub session_file: Option<PathBuf>,
}

impl Options {
    /// # Errors
    /// Returns an error if an argument with a default is missing.
    pub fn parse(matches: &ArgMatches) -> Result<Self> {
        Ok(Self {
            auth_api: matches.get_one::<String>(ARG_AUTH_API).cloned(),
            landing_page: matches
                .get_one::<String>(ARG_LANDING_PAGE)
                .cloned()
                .context("missing argument: --landing-page")?,
            redirect_delay_ms: matches
                .get_one::<u64>(ARG_REDIRECT_DELAY_MS)
                .copied()
                .unwrap_or(1000),
            timeout_seconds: matches.get_one::<u64>(ARG_TIMEOUT_SECONDS).copied(),
            session_file: matches.get_one::<PathBuf>(ARG_SESSION_FILE).cloned(),
        })
    }

    /// Resolves the options into a client config; the auth API is required here.
    ///
    /// # Errors
    /// Returns an error if `--auth-api` is missing or invalid.
    pub fn client_config(&self) -> Result<ClientConfig> {
        let auth_api = self
            .auth_api
            .as_deref()
            .context("missing required argument: --auth-api (or SIGNUP_AUTH_API)")?;

        let mut config = ClientConfig::new(auth_api).context("invalid SIGNUP_AUTH_API")?;
        config.landing_page.clone_from(&self.landing_page);
        config.redirect_delay = Duration::from_millis(self.redirect_delay_ms);
        config.timeout = self.timeout_seconds.map(Duration::from_secs);
        config.session_file.clone_from(&self.session_file);

        Ok(config)
    }
}
