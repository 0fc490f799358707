//! Reminder service abstraction
//!
//! This module provides the trait every command handler talks to,
//! allowing the dispatch core to be tested with an in-memory backend.

use core::time::Duration;

pub mod http;
pub mod mock;

pub use http::HttpBackend;
pub use mock::{BackendCall, MockBackend};

pub use crate::error::BackendError;

/// Operations exposed by the remote reminder service
///
/// Payloads are returned as the raw response body; the client never
/// interprets them.
///
/// # Implementations
/// - `HttpBackend`: Production implementation speaking JSON over HTTP
/// - `MockBackend`: Test implementation recording calls in memory
pub trait Backend: Send + Sync {
    /// Create a reminder
    ///
    /// # Errors
    ///
    /// Returns an error if the service cannot be reached or rejects the reminder
    fn create(&self, title: &str, message: &str, duration: Duration)
    -> Result<Vec<u8>, BackendError>;

    /// Edit the reminder identified by `id`
    ///
    /// # Errors
    ///
    /// Returns an error if the service cannot be reached or rejects the edit
    fn edit(
        &self,
        id: &str,
        title: &str,
        message: &str,
        duration: Duration,
    ) -> Result<Vec<u8>, BackendError>;

    /// Fetch the reminders identified by `ids`
    ///
    /// # Errors
    ///
    /// Returns an error if the service cannot be reached or rejects the lookup
    fn fetch(&self, ids: &[String]) -> Result<Vec<u8>, BackendError>;

    /// Delete the reminders identified by `ids`
    ///
    /// # Errors
    ///
    /// Returns an error if the service cannot be reached or rejects the deletion
    fn delete(&self, ids: &[String]) -> Result<(), BackendError>;

    /// Whether `host` answers its health endpoint
    fn health(&self, host: &str) -> bool;
}
