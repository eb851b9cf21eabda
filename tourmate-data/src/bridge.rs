//! Blocking bridge between the synchronous provider traits and `reqwest`.
//!
//! [`Translator`](tourmate_core::Translator) and
//! [`RouteProvider`](tourmate_core::RouteProvider) are synchronous so the core
//! stays embeddable in synchronous callers. Each HTTP adapter owns a
//! [`Bridge`]: an async client plus a single-threaded Tokio runtime reused
//! across calls.
//!
//! When called from within a multi-threaded Tokio runtime the bridge borrows
//! that runtime's handle through [`tokio::task::block_in_place`]. A
//! `current_thread` runtime cannot be blocked on, so calls made from one fail
//! with a network error instead of sending the request. Adapters may be
//! created and dropped anywhere, including inside async code.

use std::future::Future;
use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use thiserror::Error;
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};

/// Default user agent sent by the HTTP adapters.
pub const DEFAULT_USER_AGENT: &str = "tourmate/0.1";

/// Default request timeout for the HTTP adapters.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Error returned when an HTTP adapter cannot be constructed.
#[derive(Debug, Error)]
pub enum ProviderBuildError {
    /// Failed to build the HTTP client.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
    /// Failed to build the Tokio runtime.
    #[error("failed to build Tokio runtime: {0}")]
    Runtime(#[source] std::io::Error),
}

/// Why a request failed before a response body could be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TransportFailure {
    Timeout,
    Network(String),
}

impl TransportFailure {
    pub(crate) fn classify(error: &reqwest::Error) -> Self {
        if error.is_timeout() {
            return Self::Timeout;
        }
        Self::Network(error.to_string())
    }
}

/// Raw HTTP exchange result: status code and body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawResponse {
    pub(crate) status: u16,
    pub(crate) body: String,
}

impl RawResponse {
    pub(crate) const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Message carried by [`TransportFailure::Network`] when the caller runs on a
/// `current_thread` runtime.
pub(crate) const CURRENT_THREAD_UNSUPPORTED: &str =
    "blocking HTTP adapters cannot run on a current_thread Tokio runtime; \
     call them from a multi-thread runtime or outside Tokio";

pub(crate) struct Bridge {
    client: Client,
    // Always `Some` until drop.
    runtime: Option<Runtime>,
}

impl std::fmt::Debug for Bridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bridge")
            .field("client", &self.client)
            .field("runtime", &"<tokio::runtime::Runtime>")
            .finish()
    }
}

impl Bridge {
    pub(crate) fn new(user_agent: &str, timeout: Duration) -> Result<Self, ProviderBuildError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()
            .map_err(ProviderBuildError::HttpClient)?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(ProviderBuildError::Runtime)?;
        Ok(Self {
            client,
            runtime: Some(runtime),
        })
    }

    pub(crate) const fn client(&self) -> &Client {
        &self.client
    }

    /// Send `request` and collect the status and body, blocking the caller.
    pub(crate) fn execute(&self, request: RequestBuilder) -> Result<RawResponse, TransportFailure> {
        self.block_on(async move {
            let response = request
                .send()
                .await
                .map_err(|err| TransportFailure::classify(&err))?;
            let status = response.status().as_u16();
            let body = response
                .text()
                .await
                .map_err(|err| TransportFailure::classify(&err))?;
            Ok(RawResponse { status, body })
        })
    }

    fn block_on<T, F>(&self, future: F) -> Result<T, TransportFailure>
    where
        F: Future<Output = Result<T, TransportFailure>>,
    {
        match (Handle::try_current(), self.runtime.as_ref()) {
            (Ok(handle), _) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(|| handle.block_on(future))
            }
            (Ok(_), _) | (Err(_), None) => Err(TransportFailure::Network(
                CURRENT_THREAD_UNSUPPORTED.to_owned(),
            )),
            (Err(_), Some(runtime)) => runtime.block_on(future),
        }
    }
}

impl Drop for Bridge {
    fn drop(&mut self) {
        // Dropping a runtime blocks, which panics inside async code.
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown_background();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(200, true)]
    #[case(204, true)]
    #[case(302, false)]
    #[case(400, false)]
    #[case(500, false)]
    fn success_covers_2xx_only(#[case] status: u16, #[case] expected: bool) {
        let response = RawResponse {
            status,
            body: String::new(),
        };
        assert_eq!(response.is_success(), expected);
    }

    #[rstest]
    fn bridge_builds_outside_a_runtime() {
        let bridge = Bridge::new(DEFAULT_USER_AGENT, DEFAULT_TIMEOUT).expect("bridge should build");
        assert!(format!("{bridge:?}").contains("Bridge"));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn bridge_drops_inside_a_runtime() {
        let bridge = Bridge::new(DEFAULT_USER_AGENT, DEFAULT_TIMEOUT).expect("bridge should build");
        drop(bridge);
    }

    #[rstest]
    fn current_thread_runtime_is_refused_without_sending() {
        let bridge = Bridge::new(DEFAULT_USER_AGENT, DEFAULT_TIMEOUT).expect("bridge should build");
        let caller = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("caller runtime");
        let failure = caller
            .block_on(async {
                let request = bridge.client().get("http://127.0.0.1:9/unreachable");
                bridge.execute(request)
            })
            .expect_err("current_thread callers should be refused");
        assert_eq!(
            failure,
            TransportFailure::Network(CURRENT_THREAD_UNSUPPORTED.to_owned())
        );
    }

    #[rstest]
    fn unreachable_host_is_a_network_failure() {
        let bridge =
            Bridge::new(DEFAULT_USER_AGENT, Duration::from_secs(2)).expect("bridge should build");
        let request = bridge.client().get("http://127.0.0.1:9/unreachable");
        let failure = bridge.execute(request).expect_err("nothing listens on port 9");
        assert!(
            matches!(failure, TransportFailure::Network(_) | TransportFailure::Timeout),
            "unexpected failure {failure:?}"
        );
    }
}
