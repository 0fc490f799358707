//! # `reminder`
//!
//! `reminder` is a command-line client for a remote reminder service. Each
//! invocation runs exactly one command and prints the service's response or
//! a single diagnostic line.
//!
//! ## Usage
//!
//! ```sh
//! reminder create --title "Stand-up" --message "Daily sync" --duration 15m
//! reminder edit --id 42 --title "Stand-up" --message "Moved" -d 30m
//! reminder fetch --id 42 --id 43
//! reminder delete --id 42
//! reminder --backend=http://remote:5000 health --host=http://other:5000
//! ```
//!
//! Exit codes: `0` on success or help, `2` on any failure.

use std::io::{self, Write as _};
use std::path::Path;

use clap::Parser as _;
use reminder_cli::backend::HttpBackend;
use reminder_cli::cli::Args;
use reminder_cli::error::{FAILURE_EXIT_CODE, ReminderError};
use tracing::{Level, error};
use tracing_subscriber::{EnvFilter, fmt};

fn main() {
    let args = Args::parse();

    // Initialize tracing subscriber based on verbose flag
    let log_level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_target(false).with_env_filter(filter).init();

    let program = program_name();
    let backend = HttpBackend::new(args.backend.as_str());

    let result = {
        let mut stdout = io::stdout().lock();
        reminder_cli::run(&args, &program, &backend, &mut stdout)
            .and_then(|()| stdout.flush().map_err(Into::into))
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(err) => {
            // The diagnostic line is part of the interface; keep it when
            // RUST_LOG filters error events out.
            if tracing::enabled!(Level::ERROR) {
                error!("{}", err);
            } else {
                println!("{err}");
            }
            std::process::exit(
                err.downcast_ref::<ReminderError>()
                    .map_or(FAILURE_EXIT_CODE, ReminderError::exit_code),
            );
        }
    }
}

/// Program name as invoked, for usage text
fn program_name() -> String {
    std::env::args_os()
        .next()
        .as_deref()
        .and_then(|arg| Path::new(arg).file_name())
        .map_or_else(
            || "reminder".to_owned(),
            |name| name.to_string_lossy().into_owned(),
        )
}
