//! Network collaborator used by the provider adapters.
//!
//! Adapters only need "GET this URL and give me the body". Anything that
//! implements [`Transport`] works, including in-memory doubles in tests.

use crate::error::TransportError;
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use std::time::Duration;

pub trait Transport: Send + Sync {
    /// Perform a GET and return the full response body.
    fn get(&self, url: &str) -> Result<Vec<u8>, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &str) -> Result<Vec<u8>, TransportError> {
        (**self).get(url)
    }
}

impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    fn get(&self, url: &str) -> Result<Vec<u8>, TransportError> {
        (**self).get(url)
    }
}

/// Blocking HTTP transport backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: HttpClient,
}

impl HttpTransport {
    /// Wrap a caller-configured client (timeouts, proxies, TLS...).
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Client with the crate's default timeouts and user agent.
    pub fn try_default() -> Result<Self, reqwest::Error> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30)) // total request timeout
            .connect_timeout(Duration::from_secs(10))
            .redirect(Policy::limited(5))
            .user_agent(concat!("wb-population/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<Vec<u8>, TransportError> {
        let resp = self
            .http
            .get(url)
            .send()
            .map_err(|source| TransportError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                url: url.to_string(),
                status,
            });
        }

        // `bytes` consumes the response; the connection is released on every path.
        let body = resp.bytes().map_err(|source| TransportError::Request {
            url: url.to_string(),
            source,
        })?;
        Ok(body.to_vec())
    }
}
