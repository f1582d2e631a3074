use crate::ui::{ConsoleNotifier, NotificationKind, Notifier, Session, SessionBackend, SessionStore};
use anyhow::{Context, Result};
use std::{path::PathBuf, process::ExitCode};

#[derive(Debug)]
pub struct Args {
    pub session_file: Option<PathBuf>,
}

/// Print who the stored session belongs to.
/// # Errors
/// Returns an error if the session store cannot be read.
pub fn whoami(args: Args) -> Result<ExitCode> {
    let store = SessionBackend::from_path(args.session_file);
    let (message, code) = describe(&store)?;

    ConsoleNotifier.notify(&message, NotificationKind::Info);

    Ok(code)
}

/// Clear the stored session.
/// # Errors
/// Returns an error if the session store cannot be written.
pub fn logout(args: Args) -> Result<ExitCode> {
    let store = SessionBackend::from_path(args.session_file);

    Session::clear(&store).context("Failed to clear session")?;

    ConsoleNotifier.notify("Logged out", NotificationKind::Info);

    Ok(ExitCode::SUCCESS)
}

fn describe<S: SessionStore>(store: &S) -> Result<(String, ExitCode)> {
    let session = Session::load(store).context("Failed to read session")?;

    Ok(match session.username {
        Some(username) if session.is_authenticated() => {
            (format!("Logged in as {username}"), ExitCode::SUCCESS)
        }
        _ => ("Not logged in".to_string(), ExitCode::FAILURE),
    })
}
