//! Mock backend implementation for testing

#![expect(clippy::module_name_repetitions)]

use core::time::Duration;
use std::sync::{Arc, RwLock};

use super::{Backend, BackendError};

/// A call received by [`MockBackend`]
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BackendCall {
    Create {
        title: String,
        message: String,
        duration: Duration,
    },
    Edit {
        id: String,
        title: String,
        message: String,
        duration: Duration,
    },
    Fetch {
        ids: Vec<String>,
    },
    Delete {
        ids: Vec<String>,
    },
    Health {
        host: String,
    },
}

/// In-memory implementation of the [`Backend`] trait for testing
///
/// Every call is recorded in order. Reminder operations answer with the
/// configured payload, or fail with the configured message.
///
/// # Example
/// ```
/// use reminder_cli::backend::{Backend, BackendCall, MockBackend};
///
/// let backend = MockBackend::new().with_payload(b"{\"id\":\"1\"}");
/// assert_eq!(backend.fetch(&["1".to_owned()]).unwrap(), b"{\"id\":\"1\"}");
/// assert_eq!(
///     backend.calls(),
///     vec![BackendCall::Fetch { ids: vec!["1".to_owned()] }]
/// );
/// ```
#[derive(Clone)]
pub struct MockBackend {
    state: Arc<RwLock<MockBackendState>>,
}

#[derive(Default)]
struct MockBackendState {
    payload: Vec<u8>,
    failure: Option<String>,
    healthy: bool,
    calls: Vec<BackendCall>,
}

impl MockBackend {
    /// Create a healthy `MockBackend` answering with an empty payload
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(MockBackendState {
                healthy: true,
                ..MockBackendState::default()
            })),
        }
    }

    /// Payload returned by create, edit and fetch (builder pattern)
    #[must_use]
    #[inline]
    pub fn with_payload(self, payload: &[u8]) -> Self {
        if let Ok(mut state) = self.state.write() {
            state.payload = payload.to_vec();
        }
        self
    }

    /// Make every reminder operation fail with `message` (builder pattern)
    #[must_use]
    #[inline]
    pub fn failing(self, message: &str) -> Self {
        if let Ok(mut state) = self.state.write() {
            state.failure = Some(message.to_owned());
        }
        self
    }

    /// Answer health checks with `healthy` (builder pattern)
    #[must_use]
    #[inline]
    pub fn with_health(self, healthy: bool) -> Self {
        if let Ok(mut state) = self.state.write() {
            state.healthy = healthy;
        }
        self
    }

    /// Calls received so far, oldest first
    #[must_use]
    #[inline]
    pub fn calls(&self) -> Vec<BackendCall> {
        self.state
            .read()
            .map(|state| state.calls.clone())
            .unwrap_or_default()
    }

    fn record(&self, call: BackendCall) -> Result<Vec<u8>, BackendError> {
        let mut state = self
            .state
            .write()
            .map_err(|e| BackendError::rejected(e.to_string()))?;
        state.calls.push(call);
        if let Some(message) = state.failure.as_ref() {
            return Err(BackendError::rejected(message.clone()));
        }
        Ok(state.payload.clone())
    }
}

impl Default for MockBackend {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for MockBackend {
    #[inline]
    fn create(
        &self,
        title: &str,
        message: &str,
        duration: Duration,
    ) -> Result<Vec<u8>, BackendError> {
        self.record(BackendCall::Create {
            title: title.to_owned(),
            message: message.to_owned(),
            duration,
        })
    }

    #[inline]
    fn edit(
        &self,
        id: &str,
        title: &str,
        message: &str,
        duration: Duration,
    ) -> Result<Vec<u8>, BackendError> {
        self.record(BackendCall::Edit {
            id: id.to_owned(),
            title: title.to_owned(),
            message: message.to_owned(),
            duration,
        })
    }

    #[inline]
    fn fetch(&self, ids: &[String]) -> Result<Vec<u8>, BackendError> {
        self.record(BackendCall::Fetch { ids: ids.to_vec() })
    }

    #[inline]
    fn delete(&self, ids: &[String]) -> Result<(), BackendError> {
        self.record(BackendCall::Delete { ids: ids.to_vec() })
            .map(|_| ())
    }

    #[inline]
    fn health(&self, host: &str) -> bool {
        let Ok(mut state) = self.state.write() else {
            return false;
        };
        state.calls.push(BackendCall::Health {
            host: host.to_owned(),
        });
        state.healthy
    }
}
