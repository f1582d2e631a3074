use crate::{
    auth::{Handler, RegistrationForm},
    cli::actions::exit_code,
    config::ClientConfig,
    ui::{ConsoleNavigator, ConsoleNotifier, SessionBackend},
};
use anyhow::{Context, Result};
use std::process::ExitCode;
use tracing::debug;

#[derive(Debug)]
pub struct Args {
    pub config: ClientConfig,
    pub form: RegistrationForm,
}

/// Submit the registration form once.
/// # Errors
/// Returns an error if the HTTP client cannot be built.
pub async fn execute(args: Args) -> Result<ExitCode> {
    let session = SessionBackend::from_path(args.config.session_file.clone());
    debug!(persistent = session.is_persistent(), "session store selected");

    let handler = Handler::from_config(&args.config, ConsoleNotifier, session, ConsoleNavigator)
        .context("Failed to build auth client")?;

    let outcome = handler.register(&args.form).await;

    Ok(exit_code(&outcome))
}
