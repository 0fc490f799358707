//! Command dispatch module
//!
//! Resolves a command name to its handler and runs the handler pipeline:
//! flag schema, argument count check, flag parsing, one backend call.

pub mod accumulator;
pub mod handlers;
pub mod registry;
pub mod schema;
pub mod validate;

pub use accumulator::{Accumulator, IdList};
pub use handlers::{CreateHandler, DeleteHandler, EditHandler, FetchHandler, HealthHandler};
pub use registry::{HandlerFactory, Registry};
pub use schema::ReminderFields;
pub use validate::{check_arg_count, is_help_request, names_own_host};

use core::fmt;
use core::str::FromStr;
use std::io::Write;

use clap::error::ErrorKind;
use clap::{ArgMatches, Command};
use tracing::debug;

use crate::backend::Backend;
use crate::error::ReminderError;

/// Names of the commands the client understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CommandName {
    Create,
    Edit,
    Fetch,
    Delete,
    Health,
}

impl CommandName {
    /// Every command, in registration order
    pub const ALL: [Self; 5] = [
        Self::Create,
        Self::Edit,
        Self::Fetch,
        Self::Delete,
        Self::Health,
    ];

    #[must_use]
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Edit => "edit",
            Self::Fetch => "fetch",
            Self::Delete => "delete",
            Self::Health => "health",
        }
    }

    /// Minimum number of arguments after the command name
    #[must_use]
    #[inline]
    pub const fn min_args(self) -> usize {
        match self {
            Self::Create => 3,
            Self::Edit => 2,
            Self::Fetch | Self::Delete => 1,
            Self::Health => 0,
        }
    }
}

impl fmt::Display for CommandName {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommandName {
    type Err = ReminderError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| ReminderError::unknown_command(s))
    }
}

/// Everything a handler needs besides its own arguments
#[derive(Clone, Copy)]
pub struct Context<'ctx> {
    /// Program name used in usage hints
    pub program: &'ctx str,
    /// Configured backend URI, the default target for health checks
    pub backend_uri: &'ctx str,
    pub backend: &'ctx dyn Backend,
}

/// Behavior bound to one command name
pub trait Handler {
    /// Command this handler was registered for
    fn name(&self) -> CommandName;

    /// Fresh flag schema for one invocation
    fn schema(&self, ctx: &Context<'_>) -> Command;

    /// Call the backend with the parsed flags and report the outcome
    ///
    /// # Errors
    ///
    /// Returns an error if the backend call fails or the output cannot be written
    fn execute(
        &self,
        ctx: &Context<'_>,
        matches: &ArgMatches,
        out: &mut dyn Write,
    ) -> Result<(), ReminderError>;

    /// Run the full pipeline against the arguments following the command name
    ///
    /// `<command> --help` (or `-h` once the minimum is met) prints the
    /// command's usage and succeeds without touching the backend.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Fewer arguments than the command's minimum were given
    /// - A flag or its value is malformed
    /// - The backend call fails
    #[inline]
    fn run(
        &self,
        ctx: &Context<'_>,
        args: &[String],
        out: &mut dyn Write,
    ) -> Result<(), ReminderError> {
        let name = self.name();
        let schema = self.schema(ctx);

        if let Err(err) = check_arg_count(name, args, name.min_args()) {
            writeln!(out, "Incorrect use of {name}\n{} {name} --help", ctx.program)?;
            return Err(err);
        }

        let matches = match schema.try_get_matches_from(args) {
            Ok(matches) => matches,
            Err(err) if err.kind() == ErrorKind::DisplayHelp => {
                write!(out, "{}", err.render())?;
                return Ok(());
            }
            Err(err) => return Err(ReminderError::flag_parse(name, describe_parse_error(&err))),
        };

        debug!("Executing '{}' with {} argument(s)", name, args.len());
        self.execute(ctx, &matches, out)
    }
}

/// First line of a clap error without its `error: ` prefix
fn describe_parse_error(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let first = rendered.lines().next().unwrap_or_default();
    first.strip_prefix("error: ").unwrap_or(first).trim().to_owned()
}
