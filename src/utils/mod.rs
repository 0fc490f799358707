//! Shared parsing utilities

pub mod duration;

pub use duration::{DurationError, parse_duration};
