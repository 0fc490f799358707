//! Error handling module
//!
//! Typed failures for dispatch, validation, flag parsing and backend calls

pub mod types;

pub use types::*;
