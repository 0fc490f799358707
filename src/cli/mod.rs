//! Command-line interface module
//!
//! Handles top-level argument parsing and the help screen

pub mod args;
pub mod help;

pub use args::*;
pub use help::render_help;
