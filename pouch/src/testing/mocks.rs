//! Mock transports for testing.

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::errors::{Result, TransportError};
use crate::transport::{Request, Response, Transport};

/// A mock transport that records calls and returns a configurable response.
#[derive(Debug)]
pub struct MockTransport {
    response: Mutex<Response>,
    call_count: Mutex<usize>,
    urls: Mutex<Vec<String>>,
}

impl MockTransport {
    /// Creates a mock transport returning `response`.
    #[must_use]
    pub fn new(response: Response) -> Self {
        Self {
            response: Mutex::new(response),
            call_count: Mutex::new(0),
            urls: Mutex::new(Vec::new()),
        }
    }

    /// Sets the response to return.
    pub fn set_response(&self, response: Response) {
        *self.response.lock() = response;
    }

    /// Returns the number of round trips performed.
    #[must_use]
    pub fn call_count(&self) -> usize {
        *self.call_count.lock()
    }

    /// Returns the URL of each request, in call order.
    #[must_use]
    pub fn recorded_urls(&self) -> Vec<String> {
        self.urls.lock().clone()
    }

    /// Resets call tracking.
    pub fn reset(&self) {
        *self.call_count.lock() = 0;
        self.urls.lock().clear();
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn round_trip(&self, request: Request) -> Result<Response> {
        *self.call_count.lock() += 1;
        self.urls.lock().push(request.url().to_string());
        Ok(self.response.lock().clone())
    }
}

/// A transport that always fails with a connection error.
#[derive(Debug)]
pub struct FailingTransport {
    message: String,
    call_count: Mutex<usize>,
}

impl FailingTransport {
    /// Creates a failing transport.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            call_count: Mutex::new(0),
        }
    }

    /// Returns the number of round trips attempted.
    #[must_use]
    pub fn call_count(&self) -> usize {
        *self.call_count.lock()
    }
}

#[async_trait]
impl Transport for FailingTransport {
    async fn round_trip(&self, _request: Request) -> Result<Response> {
        *self.call_count.lock() += 1;
        Err(TransportError::connection(self.message.clone()))
    }
}
