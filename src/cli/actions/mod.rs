pub mod check_username;
pub mod login;
pub mod register;
pub mod session;

// Internal "interpreter" for `Action`.
mod run;

use crate::auth::Outcome;
use std::process::ExitCode;

#[derive(Debug)]
pub enum Action {
    Register(register::Args),
    Login(login::Args),
    CheckUsername(check_username::Args),
    Whoami(session::Args),
    Logout(session::Args),
}

impl Action {
    /// Execute the action.
    /// # Errors
    /// Returns an error if the action cannot be set up; request failures are
    /// reported to the user and turned into a non-zero exit code instead.
    pub async fn execute(self) -> anyhow::Result<ExitCode> {
        run::execute(self).await
    }
}

/// Exit status for a submit outcome: 2 for a rejected form, 1 for a failed request.
#[must_use]
pub fn exit_code(outcome: &Outcome) -> ExitCode {
    match outcome {
        Outcome::Completed { .. } => ExitCode::SUCCESS,
        Outcome::Rejected(_) => ExitCode::from(2),
        Outcome::Failed(_) => ExitCode::FAILURE,
    }
}
