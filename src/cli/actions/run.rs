use super::{Action, check_username, login, register, session};
use anyhow::Result;
use std::process::ExitCode;

pub(super) async fn execute(action: Action) -> Result<ExitCode> {
    match action {
        Action::Register(args) => register::execute(args).await,
        Action::Login(args) => login::execute(args).await,
        Action::CheckUsername(args) => check_username::execute(args).await,
        Action::Whoami(args) => session::whoami(args),
        Action::Logout(args) => session::logout(args),
    }
}
