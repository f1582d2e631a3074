//! Command-line argument dispatch.
//!
//! Maps the parsed subcommand and its options to an [`Action`]. Network
//! actions need a valid auth API URL; session actions only need the session
//! file option.

use crate::cli::actions::{Action, check_username, login, register, session};
use crate::cli::commands::{account, client};
use anyhow::{Context, Result, anyhow};

/// Map validated CLI matches to an action.
///
/// # Errors
/// Returns an error if no subcommand was given or the auth API URL is missing
/// or invalid for a network action.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let (name, sub_m) = matches
        .subcommand()
        .context("missing subcommand, see --help")?;

    let options = client::Options::parse(sub_m)?;

    match name {
        account::CMD_REGISTER => Ok(Action::Register(register::Args {
            config: options.client_config()?,
            form: account::registration_form(sub_m),
        })),
        account::CMD_LOGIN => Ok(Action::Login(login::Args {
            config: options.client_config()?,
            form: account::login_form(sub_m),
        })),
        account::CMD_CHECK_USERNAME => Ok(Action::CheckUsername(check_username::Args {
            config: options.client_config()?,
            username: sub_m
                .get_one::<String>(account::ARG_USERNAME)
                .cloned()
                .context("missing required argument: <username>")?,
        })),
        account::CMD_WHOAMI => Ok(Action::Whoami(session::Args {
            session_file: options.session_file,
        })),
        account::CMD_LOGOUT => Ok(Action::Logout(session::Args {
            session_file: options.session_file,
        })),
        other => Err(anyhow!("unknown subcommand: {other}")),
    }
}
