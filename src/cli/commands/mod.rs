pub mod account;
pub mod client;
pub mod logging;

use clap::{
    ColorChoice, Command,
    builder::styling::{AnsiColor, Effects, Styles},
};

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("signup")
        .about("Register and sign in against the money-tracker auth service")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true);

    let command = account::with_subcommands(command);
    let command = client::with_args(command);
    logging::with_args(command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use client::ARG_AUTH_API;

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "signup");
        assert_eq!(
            command.get_about().map(ToString::to_string),
            Some("Register and sign in against the money-tracker auth service".to_string())
        );
        assert_eq!(
            command.get_version().map(ToString::to_string),
            Some(env!("CARGO_PKG_VERSION").to_string())
        );
    }

    #[test]
    fn test_global_args_after_subcommand() -> Result<(), Box<dyn std::error::Error>> {
        let matches = new().try_get_matches_from(vec![
            "signup",
            "whoami",
            "--auth-api",
            "http://localhost:8080/auth",
        ])?;
        let sub = matches
            .subcommand_matches(account::CMD_WHOAMI)
            .ok_or("whoami subcommand")?;
        assert_eq!(
            sub.get_one::<String>(ARG_AUTH_API).cloned(),
            Some("http://localhost:8080/auth".to_string())
        );
        Ok(())
    }

    #[test]
    fn test_subcommand_required() {
        let result = new().try_get_matches_from(vec!["signup"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_check_log_level_env() {
        let levels = ["error", "warn", "info", "debug", "trace"];
        for (index, &level) in levels.iter().enumerate() {
            temp_env::with_vars([("SIGNUP_LOG_LEVEL", Some(level))], || {
                let matches = new().get_matches_from(vec!["signup", "whoami"]);
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    u8::try_from(index).ok()
                );
            });
        }
    }

    #[test]
    fn test_check_log_level_verbosity() {
        let levels = ["error", "warn", "info", "debug", "trace"];
        for (index, _) in levels.iter().enumerate() {
            temp_env::with_vars([("SIGNUP_LOG_LEVEL", None::<String>)], || {
                let mut args = vec!["signup".to_string(), "whoami".to_string()];

                // Add the appropriate number of "-v" flags based on the index
                if index > 0 {
                    args.push(format!("-{}", "v".repeat(index)));
                }

                let matches = new().get_matches_from(args);

                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    u8::try_from(index).ok()
                );
            });
        }
    }

    #[test]
    fn test_unknown_arg_fails() {
        let result = new().try_get_matches_from(vec!["signup", "register", "--token", "x"]);
        assert_eq!(
            result.map_err(|e| e.kind()).err(),
            Some(clap::error::ErrorKind::UnknownArgument)
        );
    }
}
