//! `reminder` - A command-line client for a remote reminder service
//!
//! This library turns an operator's subcommand into a validated, typed
//! request, routes it to the matching handler and makes a single call
//! against the reminder service.

pub mod backend;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod utils;

use std::io::Write;

use anyhow::Result;
use backend::Backend;
use cli::{Args, render_help};
use commands::{CommandName, Context, Registry, names_own_host};
use config::Config;

/// Main entry point for the reminder library
///
/// Shows the help screen when `--help` or no command was given, otherwise
/// dispatches the command against `backend`, writing its output to `out`.
///
/// # Errors
///
/// Returns a [`ReminderError`](error::ReminderError) if the command is
/// unknown, the backend URI it relies on is invalid, its arguments are
/// rejected or the backend call fails.
#[inline]
pub fn run(args: &Args, program: &str, backend: &dyn Backend, out: &mut dyn Write) -> Result<()> {
    let registry = Registry::new();

    let invocation = args.command().filter(|_| !args.wants_help());
    let Some((name, command_args)) = invocation else {
        write!(out, "{}", render_help(program, &registry))?;
        return Ok(());
    };

    // Unknown commands are reported before any configuration problem.
    let command = name.parse::<CommandName>()?;
    let config = Config::new(args.backend.as_str());
    if !names_own_host(command, command_args) {
        config.validate()?;
    }

    let ctx = Context {
        program,
        backend_uri: &config.backend_uri,
        backend,
    };
    registry.dispatch(name, command_args, &ctx, out)?;
    Ok(())
}
