use crate::auth::{LoginForm, RegistrationForm};
use clap::{Arg, ArgMatches, Command};

pub const CMD_REGISTER: &str = "register";
pub const CMD_LOGIN: &str = "login";
pub const CMD_CHECK_USERNAME: &str = "check-username";
pub const CMD_WHOAMI: &str = "whoami";
pub const CMD_LOGOUT: &str = "logout";

pub const ARG_USERNAME: &str = "username";
pub const ARG_EMAIL: &str = "email";
pub const ARG_PASSWORD: &str = "password";
pub const ARG_PASSWORD_CONFIRM: &str = "password-confirm";

// Empty defaults let the form checks report missing values instead of clap.
fn username_arg() -> Arg {
    Arg::new(ARG_USERNAME)
        .short('u')
        .long(ARG_USERNAME)
        .help("Username")
        .env("SIGNUP_USERNAME")
        .default_value("")
}

fn password_arg() -> Arg {
    Arg::new(ARG_PASSWORD)
        .long(ARG_PASSWORD)
        .help("Password")
        .env("SIGNUP_PASSWORD")
        .hide_env_values(true)
        .default_value("")
}

#[must_use]
pub fn with_subcommands(command: Command) -> Command {
    command
        .subcommand(
            Command::new(CMD_REGISTER)
                .about("Create an account and start a session")
                .arg(username_arg())
                .arg(
                    Arg::new(ARG_EMAIL)
                        .short('e')
                        .long(ARG_EMAIL)
                        .help("Email address")
                        .env("SIGNUP_EMAIL")
                        .default_value(""),
                )
                .arg(password_arg())
                .arg(
                    Arg::new(ARG_PASSWORD_CONFIRM)
                        .long(ARG_PASSWORD_CONFIRM)
                        .help("Password again, must match --password")
                        .env("SIGNUP_PASSWORD_CONFIRM")
                        .hide_env_values(true)
                        .default_value(""),
                ),
        )
        .subcommand(
            Command::new(CMD_LOGIN)
                .about("Sign in and start a session")
                .arg(username_arg())
                .arg(password_arg()),
        )
        .subcommand(
            Command::new(CMD_CHECK_USERNAME)
                .about("Check whether a username is already taken")
                .arg(
                    Arg::new(ARG_USERNAME)
                        .help("Username to look up")
                        .required(true),
                ),
        )
        .subcommand(Command::new(CMD_WHOAMI).about("Show the current session"))
        .subcommand(Command::new(CMD_LOGOUT).about("Clear the current session"))
}

fn value<'a>(matches: &'a ArgMatches, id: &str) -> &'a str {
    matches.get_one::<String>(id).map_or("", String::as_str)
}

#[must_use]
pub fn registration_form(matches: &ArgMatches) -> RegistrationForm {
    RegistrationForm::new(
        value(matches, ARG_USERNAME),
        value(matches, ARG_EMAIL),
        value(matches, ARG_PASSWORD),
        value(matches, ARG_PASSWORD_CONFIRM),
    )
}

#[must_use]
pub fn login_form(matches: &ArgMatches) -> LoginForm {
    LoginForm::new(value(matches, ARG_USERNAME), value(matches, ARG_PASSWORD))
}
