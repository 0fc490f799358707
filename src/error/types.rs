//! Custom error types with exit codes

use core::fmt;
use std::io;

use thiserror::Error;

use crate::commands::CommandName;

/// Exit code shared by every dispatch, validation, parse and backend failure
pub const FAILURE_EXIT_CODE: i32 = 2;

/// Backend operation a failure is attributed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Operation {
    Create,
    Edit,
    Fetch,
    Delete,
}

impl Operation {
    /// Context message prefixed to the underlying backend error
    #[must_use]
    #[inline]
    pub const fn failure_message(self) -> &'static str {
        match self {
            Self::Create => "Could not create reminder",
            Self::Edit => "Could not edit reminder",
            Self::Fetch => "Could not fetch reminder",
            Self::Delete => "Could not delete reminder",
        }
    }
}

impl fmt::Display for Operation {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.failure_message())
    }
}

/// Failure reported by a [`Backend`](crate::backend::Backend) implementation
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum BackendError {
    /// The request never produced a response (connection refused, DNS, ...)
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-success status
    #[error("service responded with status {status}: {body}")]
    Status { status: u16, body: String },

    /// The backend refused the call without a transport involved
    #[error("{message}")]
    Rejected { message: String },
}

impl BackendError {
    /// Create a rejection error
    #[inline]
    pub fn rejected<S: Into<String>>(message: S) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }
}

/// Main error type for reminder client operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReminderError {
    /// The first argument does not name a registered command
    #[error("Invalid command '{name}'")]
    UnknownCommand { name: String },

    /// Fewer arguments than the command's minimum were supplied
    #[error("{command} expects at least {expected} arg(s), {provided} provided")]
    InsufficientArguments {
        command: CommandName,
        expected: usize,
        provided: usize,
    },

    /// A flag or flag value could not be parsed
    #[error("Could not parse '{command}' command flags : {message}")]
    FlagParse {
        command: CommandName,
        message: String,
    },

    /// The backend call behind a command failed
    #[error("{operation} : {source}")]
    BackendOperation {
        operation: Operation,
        #[source]
        source: BackendError,
    },

    /// Invalid client configuration
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Writing the command output failed
    #[error("Could not write output: {source}")]
    Output {
        #[from]
        source: io::Error,
    },
}

impl ReminderError {
    /// Get the appropriate exit code for this error type
    #[must_use]
    #[inline]
    pub const fn exit_code(&self) -> i32 {
        match *self {
            Self::UnknownCommand { .. }
            | Self::InsufficientArguments { .. }
            | Self::FlagParse { .. }
            | Self::BackendOperation { .. }
            | Self::Configuration { .. }
            | Self::Output { .. } => FAILURE_EXIT_CODE,
        }
    }

    /// Create an unknown command error
    #[inline]
    pub fn unknown_command<S: Into<String>>(name: S) -> Self {
        Self::UnknownCommand { name: name.into() }
    }

    /// Create a flag parse error for `command`
    #[inline]
    pub fn flag_parse<S: Into<String>>(command: CommandName, message: S) -> Self {
        Self::FlagParse {
            command,
            message: message.into(),
        }
    }

    /// Wrap a backend failure with the operation's context message
    #[inline]
    pub fn backend(operation: Operation, source: BackendError) -> Self {
        Self::BackendOperation { operation, source }
    }

    /// Create a configuration error
    #[inline]
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}
