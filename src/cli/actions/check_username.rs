use crate::{
    auth::AuthClient,
    config::ClientConfig,
    ui::{ConsoleNotifier, NotificationKind, Notifier},
};
use anyhow::{Context, Result};
use std::process::ExitCode;

#[derive(Debug)]
pub struct Args {
    pub config: ClientConfig,
    pub username: String,
}

/// Exits 0 when the name is free, 1 when it is taken or the lookup failed.
/// # Errors
/// Returns an error if the HTTP client cannot be built.
pub async fn execute(args: Args) -> Result<ExitCode> {
    let client = AuthClient::new(&args.config).context("Failed to build auth client")?;

    Ok(report(&client, &ConsoleNotifier, &args.username).await)
}

async fn report<N: Notifier>(client: &AuthClient, notifier: &N, username: &str) -> ExitCode {
    let username = username.trim();

    match client.check_username(username).await {
        Ok(false) => {
            notifier.notify(
                &format!("Username {username} is available"),
                NotificationKind::Success,
            );
            ExitCode::SUCCESS
        }
        Ok(true) => {
            notifier.notify(
                &format!("Username {username} is already taken"),
                NotificationKind::Error,
            );
            ExitCode::FAILURE
        }
        Err(e) => {
            notifier.notify(
                &format!("Error checking username: {e}"),
                NotificationKind::Error,
            );
            ExitCode::FAILURE
        }
    }
}
