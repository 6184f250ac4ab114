//! Submission transport.
//!
//! A [`Transport`] delivers [`SubmissionData`] to the configured endpoint.
//! The form never waits for delivery: [`dispatch`] spawns the POST on the
//! current tokio runtime and logs failures instead of returning them.
//!
//! Two implementations are provided:
//!
//! - [`HttpTransport`] posts JSON with `reqwest`
//! - [`MemoryTransport`] records submissions in memory (useful for tests)

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use gridform_core::error::{FormError, FormResult};

use crate::submission::SubmissionData;

/// Delivers submitted data to an endpoint.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Posts `data` to `url`.
    async fn post(&self, url: &str, data: &SubmissionData) -> FormResult<()>;
}

/// Posts submissions as JSON over HTTP.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Creates a transport with a default client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a transport using an existing client.
    pub const fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post(&self, url: &str, data: &SubmissionData) -> FormResult<()> {
        let response = self
            .client
            .post(url)
            .json(data)
            .send()
            .await
            .map_err(|e| FormError::TransportFailure(e.to_string()))?;

        response
            .error_for_status()
            .map_err(|e| FormError::TransportFailure(e.to_string()))?;
        Ok(())
    }
}

/// A posted submission captured by [`MemoryTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostedSubmission {
    /// The endpoint it was posted to.
    pub url: String,
    /// The submitted data.
    pub data: SubmissionData,
}

/// Captures submissions instead of sending them.
///
/// Clones share the same outbox.
#[derive(Debug, Clone, Default)]
pub struct MemoryTransport {
    outbox: Arc<Mutex<Vec<PostedSubmission>>>,
    fail: bool,
}

impl MemoryTransport {
    /// Creates an empty outbox.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an outbox whose posts all fail after being recorded.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Returns everything posted so far.
    pub fn posted(&self) -> Vec<PostedSubmission> {
        self.outbox.lock().map(|o| o.clone()).unwrap_or_default()
    }

    /// Returns the number of posts so far.
    pub fn len(&self) -> usize {
        self.outbox.lock().map(|o| o.len()).unwrap_or(0)
    }

    /// Returns `true` if nothing was posted.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl Transport for MemoryTransport {
    async fn post(&self, url: &str, data: &SubmissionData) -> FormResult<()> {
        if let Ok(mut outbox) = self.outbox.lock() {
            outbox.push(PostedSubmission {
                url: url.to_string(),
                data: data.clone(),
            });
        }
        if self.fail {
            return Err(FormError::TransportFailure("memory transport set to fail".into()));
        }
        Ok(())
    }
}

/// Spawns a fire-and-forget POST on the current tokio runtime.
///
/// Failures are logged at `warn` and otherwise ignored. Without a runtime the
/// POST is skipped and `None` is returned.
pub fn dispatch(
    transport: Arc<dyn Transport>,
    url: impl Into<String>,
    data: SubmissionData,
) -> Option<JoinHandle<()>> {
    let url = url.into();
    let Ok(handle) = Handle::try_current() else {
        tracing::warn!(%url, "no tokio runtime; submission not posted");
        return None;
    };

    Some(handle.spawn(async move {
        match transport.post(&url, &data).await {
            Ok(()) => tracing::debug!(%url, "submission posted"),
            Err(e) => tracing::warn!(%url, error = %e, "submission post failed"),
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SubmissionData {
        [("name", "Ada")].into_iter().collect()
    }

    #[tokio::test]
    async fn test_memory_transport_records() {
        let transport = MemoryTransport::new();
        transport.post("http://x/y", &sample()).await.unwrap();
        assert_eq!(
            transport.posted(),
            vec![PostedSubmission {
                url: "http://x/y".into(),
                data: sample(),
            }]
        );
    }

    #[tokio::test]
    async fn test_dispatch_runs_in_background() {
        let transport = MemoryTransport::new();
        let handle = dispatch(Arc::new(transport.clone()), "http://x/y", sample()).unwrap();
        handle.await.unwrap();
        assert_eq!(transport.len(), 1);
    }

    #[tokio::test]
    async fn test_dispatch_swallows_failures() {
        let transport = MemoryTransport::failing();
        let handle = dispatch(Arc::new(transport.clone()), "http://x/y", sample()).unwrap();
        // The task completes normally even though the post failed.
        handle.await.unwrap();
        assert_eq!(transport.len(), 1);
    }

    #[test]
    fn test_dispatch_without_runtime_is_skipped() {
        let transport = MemoryTransport::new();
        assert!(dispatch(Arc::new(transport.clone()), "http://x/y", sample()).is_none());
        assert!(transport.is_empty());
    }

    #[tokio::test]
    async fn test_http_transport_connection_refused() {
        // Grab a free port, then close it so nothing is listening.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = reqwest::Client::builder().no_proxy().build().unwrap();
        let transport = HttpTransport::with_client(client);
        let err = transport
            .post(&format!("http://{addr}/contact"), &sample())
            .await
            .unwrap_err();
        assert_eq!(err.code(), "transport");
    }
}
