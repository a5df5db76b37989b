//! Network transport backed by reqwest.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::redirect::Policy;
use tracing::debug;

use super::{Request, Response, Transport, TransportConfig};
use crate::errors::{Result, TransportError};

/// Sends requests over the network with a `reqwest::Client`.
///
/// This is the transport production code normally wraps with
/// [`configure_for_stubbing`](super::configure_for_stubbing).
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a transport with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new() -> Result<Self> {
        Self::from_config(&TransportConfig::default())
    }

    /// Creates a transport from a configuration.
    ///
    /// # Errors
    ///
    /// Returns `Configuration` for an unusable timeout, `InvalidHeader` for a
    /// malformed default header, or `Network` if the HTTP client cannot be
    /// built.
    pub fn from_config(config: &TransportConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout()?)
            .redirect(Policy::limited(config.max_redirects))
            .user_agent(config.user_agent.clone())
            .default_headers(default_headers(config)?)
            .build()?;

        Ok(Self { client })
    }

    /// Wraps an existing client.
    #[must_use]
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Returns the underlying client.
    #[must_use]
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }
}

fn default_headers(config: &TransportConfig) -> Result<HeaderMap> {
    let mut headers = HeaderMap::with_capacity(config.headers.len());
    for (name, value) in &config.headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| TransportError::InvalidHeader(format!("{name}: {e}")))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| TransportError::InvalidHeader(format!("{name}: {e}")))?;
        headers.insert(name, value);
    }
    Ok(headers)
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn round_trip(&self, request: Request) -> Result<Response> {
        let (method, url, headers, body, _context) = request.into_parts();

        let mut builder = self.client.request(method, url).headers(headers);
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();

        debug!(status = status.as_u16(), body_len = body.len(), "Received network response");
        Ok(Response::from_parts(status, headers, body))
    }
}
