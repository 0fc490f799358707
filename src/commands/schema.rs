//! Per-command flag schemas
//!
//! Every invocation builds a fresh `clap::Command`; nothing is shared
//! between commands.

use core::time::Duration;

use clap::{Arg, ArgAction, ArgMatches, ColorChoice, Command};

use super::CommandName;
use crate::utils::parse_duration;

pub const TITLE: &str = "title";
pub const MESSAGE: &str = "message";
pub const DURATION: &str = "duration";
pub const ID: &str = "id";
pub const HOST: &str = "host";

/// Title, message and duration shared by create and edit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReminderFields {
    pub title: String,
    pub message: String,
    pub duration: Duration,
}

impl ReminderFields {
    /// Extract the final values from a schema built by [`reminder_flags`]
    #[must_use]
    #[inline]
    pub fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            title: matches.get_one::<String>(TITLE).cloned().unwrap_or_default(),
            message: matches
                .get_one::<String>(MESSAGE)
                .cloned()
                .unwrap_or_default(),
            duration: matches
                .get_one::<Duration>(DURATION)
                .copied()
                .unwrap_or_default(),
        }
    }
}

/// Empty schema for `name`; repeated single-value flags keep the last value
fn base_schema(name: CommandName, about: &'static str) -> Command {
    Command::new(name.as_str())
        .about(about)
        .no_binary_name(true)
        .args_override_self(true)
        .disable_version_flag(true)
        .color(ColorChoice::Never)
}

/// Add `--title/-t`, `--message/-m` and `--duration/-d`
#[must_use]
#[inline]
pub fn reminder_flags(command: Command) -> Command {
    command
        .arg(
            Arg::new(TITLE)
                .long("title")
                .short('t')
                .value_name("TITLE")
                .allow_hyphen_values(true)
                .default_value("")
                .hide_default_value(true)
                .help("Reminder title"),
        )
        .arg(
            Arg::new(MESSAGE)
                .long("message")
                .short('m')
                .value_name("MESSAGE")
                .allow_hyphen_values(true)
                .default_value("")
                .hide_default_value(true)
                .help("Reminder message"),
        )
        .arg(
            Arg::new(DURATION)
                .long("duration")
                .short('d')
                .value_name("DURATION")
                .default_value("0")
                .value_parser(parse_duration)
                .help("Reminder time, e.g. 90s, 15m, 1h30m"),
        )
}

/// Repeatable `--id`, collected in command-line order
fn id_flag(help: &'static str) -> Arg {
    Arg::new(ID)
        .long("id")
        .value_name("ID")
        .allow_hyphen_values(true)
        .action(ArgAction::Append)
        .required(true)
        .help(help)
}

#[must_use]
#[inline]
pub fn create_schema() -> Command {
    reminder_flags(base_schema(CommandName::Create, "Create a reminder"))
}

#[must_use]
#[inline]
pub fn edit_schema() -> Command {
    let command = base_schema(CommandName::Edit, "Edit a reminder")
        .arg(id_flag("The ID of the reminder to edit; the last one given is used"));
    reminder_flags(command)
}

#[must_use]
#[inline]
pub fn fetch_schema() -> Command {
    base_schema(CommandName::Fetch, "Fetch reminders")
        .arg(id_flag("ID of a reminder to fetch (repeatable)"))
}

#[must_use]
#[inline]
pub fn delete_schema() -> Command {
    base_schema(CommandName::Delete, "Delete reminders")
        .arg(id_flag("ID of a reminder to delete (repeatable)"))
}

/// Health schema; `default_host` is only shown in the usage text
#[must_use]
#[inline]
pub fn health_schema(default_host: &str) -> Command {
    base_schema(CommandName::Health, "Check whether the reminder service is up").arg(
        Arg::new(HOST)
            .long("host")
            .value_name("URI")
            .allow_hyphen_values(true)
            .help(format!("Host to ping for health [default: {default_host}]")),
    )
}
