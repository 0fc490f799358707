//! HTTP implementation of the reminder service backend

use core::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};
use serde::Serialize;
use tracing::debug;

use super::{Backend, BackendError};

/// JSON body shared by create and edit requests
#[derive(Debug, Serialize)]
struct ReminderBody<'req> {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<&'req str>,
    title: &'req str,
    message: &'req str,
    /// Whole nanoseconds
    duration: u64,
}

#[derive(Debug, Serialize)]
struct IdsBody<'req> {
    ids: &'req [String],
}

/// Production implementation of the [`Backend`] trait
///
/// Each call issues exactly one blocking request. No client-side timeout is
/// configured, so a service that never answers blocks the caller.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_uri: String,
}

impl HttpBackend {
    /// Create a backend talking to the service at `base_uri`
    #[must_use]
    #[inline]
    pub fn new<S: Into<String>>(base_uri: S) -> Self {
        Self {
            client: Client::builder()
                .timeout(None)
                .build()
                .unwrap_or_else(|_| Client::new()),
            base_uri: base_uri.into(),
        }
    }

    /// Base URI every reminder endpoint is resolved against
    #[must_use]
    #[inline]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    fn url_for(&self, path: &str) -> String {
        join_url(&self.base_uri, path)
    }

    fn send(request: RequestBuilder, url: &str) -> Result<Vec<u8>, BackendError> {
        let transport = |source| BackendError::Transport {
            url: url.to_owned(),
            source,
        };

        let response = request.send().map_err(transport)?;
        let status = response.status();
        let body = response.bytes().map_err(transport)?;
        debug!("{} answered {}", url, status);

        if !status.is_success() {
            return Err(BackendError::Status {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).trim().to_owned(),
            });
        }

        Ok(body.to_vec())
    }
}

impl Backend for HttpBackend {
    fn create(
        &self,
        title: &str,
        message: &str,
        duration: Duration,
    ) -> Result<Vec<u8>, BackendError> {
        let url = self.url_for("reminders/create");
        let body = ReminderBody {
            id: None,
            title,
            message,
            duration: as_nanos(duration),
        };
        debug!("POST {}", url);
        Self::send(self.client.post(&url).json(&body), &url)
    }

    fn edit(
        &self,
        id: &str,
        title: &str,
        message: &str,
        duration: Duration,
    ) -> Result<Vec<u8>, BackendError> {
        let url = self.url_for("reminders/edit");
        let body = ReminderBody {
            id: Some(id),
            title,
            message,
            duration: as_nanos(duration),
        };
        debug!("PATCH {} (id {})", url, id);
        Self::send(self.client.patch(&url).json(&body), &url)
    }

    fn fetch(&self, ids: &[String]) -> Result<Vec<u8>, BackendError> {
        let url = self.url_for("reminders/fetch");
        debug!("POST {} ({} id(s))", url, ids.len());
        Self::send(self.client.post(&url).json(&IdsBody { ids }), &url)
    }

    fn delete(&self, ids: &[String]) -> Result<(), BackendError> {
        let url = self.url_for("reminders/delete");
        debug!("DELETE {} ({} id(s))", url, ids.len());
        Self::send(self.client.delete(&url).json(&IdsBody { ids }), &url).map(|_| ())
    }

    fn health(&self, host: &str) -> bool {
        let url = join_url(host, "health");
        match self.client.get(&url).send() {
            Ok(response) => {
                debug!("GET {} answered {}", url, response.status());
                response.status().is_success()
            }
            Err(err) => {
                debug!("GET {} failed: {}", url, err);
                false
            }
        }
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path)
}

fn as_nanos(duration: Duration) -> u64 {
    u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX)
}
