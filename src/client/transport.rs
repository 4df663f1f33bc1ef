//! HTTP transport for talking to the platform API.
//!
//! One narrow seam: a single call with an expected status code, raw body
//! out. Decoding stays with the caller; retries and timeouts stay here.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use tracing::debug;

use crate::errors::SdkError;

/// One HTTP round trip against the platform API.
///
/// Implementations enforce the expected status code and hand back the raw
/// body. They never reinterpret payloads.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn invoke(
        &self,
        method: Method,
        url: &str,
        valid_status: StatusCode,
    ) -> Result<String, SdkError>;
}

/// Production transport over a shared `reqwest` client.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Build a transport with a per-request timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self, SdkError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn invoke(
        &self,
        method: Method,
        url: &str,
        valid_status: StatusCode,
    ) -> Result<String, SdkError> {
        debug!(%method, url, "Issuing API request");

        let response = self.client.request(method, url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status != valid_status {
            debug!(%status, "Unexpected response status");
            return Err(SdkError::UnexpectedStatus { status, body });
        }

        Ok(body)
    }
}
