use clap::{Parser, Subcommand};

use crate::config::{BACKEND_ENV_VAR, DEFAULT_BACKEND_URI};

/// Command-line arguments for the reminder client
///
/// Only the top-level flags are parsed here. The command name and
/// everything after it are captured raw and handed to the dispatcher, so
/// `<command> --help` reaches the command rather than the top level.
#[derive(Parser, Debug, Clone)]
#[command(name = "reminder")]
#[command(about = "A command-line client for a remote reminder service")]
#[command(long_about = None)]
#[command(version)]
#[command(disable_help_flag = true, disable_help_subcommand = true)]
pub struct Args {
    /// Backend API URL
    #[arg(long, value_name = "URI", env = BACKEND_ENV_VAR, default_value = DEFAULT_BACKEND_URI)]
    pub backend: String,

    /// Display all the commands and their usage
    #[arg(long)]
    pub help: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Command to run, followed by its own flags
    #[command(subcommand)]
    pub invocation: Option<Invocation>,
}

/// Raw command invocation: the command name followed by its arguments
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    #[command(external_subcommand)]
    Command(Vec<String>),
}

impl Args {
    /// Command name and the arguments following it, if a command was given
    #[must_use]
    #[inline]
    pub fn command(&self) -> Option<(&str, &[String])> {
        let Some(Invocation::Command(tokens)) = self.invocation.as_ref() else {
            return None;
        };
        let (name, rest) = tokens.split_first()?;
        Some((name.as_str(), rest))
    }

    /// Whether the help screen should be shown instead of running a command
    #[must_use]
    #[inline]
    pub fn wants_help(&self) -> bool {
        self.help || self.invocation.is_none()
    }
}
