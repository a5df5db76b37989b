//! Stub response generators.

use reqwest::StatusCode;

use super::StubStorage;
use crate::errors::Result;
use crate::transport::{Request, Response};

/// Produces a synthetic response for an intercepted request.
///
/// Generators run synchronously and must not touch the network. The storage
/// is the one attached to the request's context.
pub trait StubGenerator: Send + Sync {
    /// Generates the response for `request`.
    fn generate(&self, request: &Request, storage: &StubStorage) -> Result<Response>;
}

impl<F> StubGenerator for F
where
    F: Fn(&Request, &StubStorage) -> Result<Response> + Send + Sync,
{
    fn generate(&self, request: &Request, storage: &StubStorage) -> Result<Response> {
        self(request, storage)
    }
}

/// The default generator: answers every request with `418 I'm a teapot`.
///
/// Placeholder until a real stub source is plugged in.
#[derive(Debug, Clone, Copy, Default)]
pub struct TeapotGenerator;

impl StubGenerator for TeapotGenerator {
    fn generate(&self, _request: &Request, _storage: &StubStorage) -> Result<Response> {
        Ok(Response::new(StatusCode::IM_A_TEAPOT))
    }
}

/// Answers every request with a copy of the same response.
#[derive(Debug, Clone)]
pub struct FixedResponseGenerator {
    response: Response,
}

impl FixedResponseGenerator {
    /// Creates a generator returning `response`.
    #[must_use]
    pub fn new(response: Response) -> Self {
        Self { response }
    }

    /// Returns the configured response.
    #[must_use]
    pub fn response(&self) -> &Response {
        &self.response
    }
}

impl StubGenerator for FixedResponseGenerator {
    fn generate(&self, _request: &Request, _storage: &StubStorage) -> Result<Response> {
        Ok(self.response.clone())
    }
}
