//! A small HTTP client on top of any [`Transport`].
//!
//! The client only builds requests and hands them to its transport. Which
//! requests are stubbed is decided entirely by the context each request
//! carries, so the same client serves production and test code.
//!
//! ```rust,ignore
//! use pouch::prelude::*;
//!
//! let transport = configure_for_stubbing(ReqwestTransport::new()?);
//! let client = Client::new(transport);
//!
//! let response = client
//!     .get("http://localhost/pouch/00/basic")
//!     .context(new_stubbed_context())
//!     .send()
//!     .await?;
//! assert_eq!(response.status().as_u16(), 418);
//! ```

use reqwest::header::{HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::Method;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

use crate::context::Context;
use crate::errors::{Result, TransportError};
use crate::transport::{Request, Response, Transport};

/// An HTTP client that sends every request through one transport.
#[derive(Clone)]
pub struct Client {
    transport: Arc<dyn Transport>,
}

impl Client {
    /// Creates a client over `transport`.
    #[must_use]
    pub fn new<T: Transport + 'static>(transport: T) -> Self {
        Self {
            transport: Arc::new(transport),
        }
    }

    /// Creates a client over a shared transport.
    #[must_use]
    pub fn from_shared(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Sends a prepared request.
    ///
    /// # Errors
    ///
    /// Returns whatever error the transport produced.
    pub async fn execute(&self, request: Request) -> Result<Response> {
        self.transport.round_trip(request).await
    }

    /// Starts building a request.
    #[must_use]
    pub fn request(&self, method: Method, url: &str) -> RequestBuilder {
        RequestBuilder {
            client: self.clone(),
            request: Request::parse(method, url),
        }
    }

    /// Starts building a GET request.
    #[must_use]
    pub fn get(&self, url: &str) -> RequestBuilder {
        self.request(Method::GET, url)
    }

    /// Starts building a POST request.
    #[must_use]
    pub fn post(&self, url: &str) -> RequestBuilder {
        self.request(Method::POST, url)
    }

    /// Starts building a PUT request.
    #[must_use]
    pub fn put(&self, url: &str) -> RequestBuilder {
        self.request(Method::PUT, url)
    }

    /// Starts building a DELETE request.
    #[must_use]
    pub fn delete(&self, url: &str) -> RequestBuilder {
        self.request(Method::DELETE, url)
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client").finish_non_exhaustive()
    }
}

/// A request under construction.
///
/// Construction errors are kept until [`send`](Self::send) or
/// [`build`](Self::build) is called.
#[derive(Debug)]
pub struct RequestBuilder {
    client: Client,
    request: Result<Request>,
}

impl RequestBuilder {
    /// Sets the execution context the request is issued under.
    #[must_use]
    pub fn context(mut self, context: Context) -> Self {
        self.request = self.request.map(|r| r.with_context(context));
        self
    }

    /// Adds a header.
    #[must_use]
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.request = self.request.and_then(|r| {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| TransportError::InvalidHeader(format!("{name}: {e}")))?;
            let header_value = HeaderValue::from_str(value)
                .map_err(|e| TransportError::InvalidHeader(format!("{name}: {e}")))?;
            Ok(r.with_header(header_name, header_value))
        });
        self
    }

    /// Sets a raw body.
    #[must_use]
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        let body = body.into();
        self.request = self.request.map(|r| r.with_body(body));
        self
    }

    /// Serializes `value` as a JSON body.
    #[must_use]
    pub fn json<T: Serialize + ?Sized>(mut self, value: &T) -> Self {
        self.request = self.request.and_then(|r| {
            let body = serde_json::to_vec(value)?;
            Ok(r
                .with_header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
                .with_body(body))
        });
        self
    }

    /// Finishes building without sending.
    ///
    /// # Errors
    ///
    /// Returns the first construction error.
    pub fn build(self) -> Result<Request> {
        self.request
    }

    /// Sends the request.
    ///
    /// # Errors
    ///
    /// Returns the first construction error or the transport's error.
    pub async fn send(self) -> Result<Response> {
        let request = self.request?;
        self.client.execute(request).await
    }
}
