//! Minimum argument count checks

use super::CommandName;
use crate::error::ReminderError;

/// The only argument that bypasses the minimum count
pub const HELP_FLAG: &str = "--help";

/// Whether the arguments after the command name are exactly `--help`
#[must_use]
#[inline]
pub fn is_help_request(args: &[String]) -> bool {
    matches!(args, [only] if only == HELP_FLAG)
}

/// Whether a health check names its own target with `--host`
///
/// Such an invocation never reaches the configured backend URI.
#[must_use]
#[inline]
pub fn names_own_host(command: CommandName, args: &[String]) -> bool {
    command == CommandName::Health
        && args
            .iter()
            .any(|arg| arg == "--host" || arg.starts_with("--host="))
}

/// Check that at least `min_args` arguments follow the command name
///
/// # Errors
///
/// Returns `InsufficientArguments` if fewer than `min_args` arguments were
/// supplied, unless the invocation is exactly `<command> --help`.
#[inline]
pub fn check_arg_count(
    command: CommandName,
    args: &[String],
    min_args: usize,
) -> Result<(), ReminderError> {
    if is_help_request(args) || args.len() >= min_args {
        return Ok(());
    }

    Err(ReminderError::InsufficientArguments {
        command,
        expected: min_args,
        provided: args.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_owned()).collect()
    }

    #[test]
    fn enough_arguments_pass() {
        assert!(check_arg_count(CommandName::Create, &args(&["-t", "a", "-m"]), 3).is_ok());
        assert!(check_arg_count(CommandName::Health, &[], 0).is_ok());
    }

    #[test]
    fn too_few_arguments_fail() {
        let err = check_arg_count(CommandName::Create, &args(&["-t", "a"]), 3).unwrap_err();
        assert!(matches!(
            err,
            ReminderError::InsufficientArguments {
                command: CommandName::Create,
                expected: 3,
                provided: 2
            }
        ));
    }

    #[test]
    fn lone_help_flag_bypasses_the_check() {
        assert!(check_arg_count(CommandName::Create, &args(&["--help"]), 3).is_ok());
        assert!(check_arg_count(CommandName::Create, &args(&["-h"]), 3).is_err());
        assert!(check_arg_count(CommandName::Create, &args(&["--help", "x"]), 3).is_err());
    }

    #[test]
    fn only_health_names_its_own_host() {
        assert!(names_own_host(CommandName::Health, &args(&["--host=http://x"])));
        assert!(names_own_host(CommandName::Health, &args(&["--host", "http://x"])));
        assert!(!names_own_host(CommandName::Health, &[]));
        assert!(!names_own_host(CommandName::Fetch, &args(&["--id", "--host"])));
    }
}
