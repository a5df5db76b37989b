//! The stubbing transport decorator.

use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use tracing::trace;

use super::{Request, Response, Transport};
use crate::errors::{Result, TransportError};
use crate::stubs::{stub_storage, StubGenerator, TeapotGenerator};

/// Wraps a transport and diverts requests from stubbed contexts.
///
/// Requests whose context was marked with
/// [`enable_stubs`](crate::stubs::enable_stubs) (or one of its siblings) are
/// answered by the stub generator and never reach the wrapped transport.
/// All other requests are forwarded unchanged. Results from either side are
/// returned as-is.
#[derive(Clone)]
pub struct StubInterceptor {
    inner: Option<Arc<dyn Transport>>,
    generator: Arc<dyn StubGenerator>,
}

/// Wraps `transport` so that requests from stubbed contexts are intercepted.
#[must_use]
pub fn configure_for_stubbing<T: Transport + 'static>(transport: T) -> StubInterceptor {
    StubInterceptor::new(Arc::new(transport))
}

impl StubInterceptor {
    /// Creates an interceptor around a shared transport.
    #[must_use]
    pub fn new(inner: Arc<dyn Transport>) -> Self {
        Self {
            inner: Some(inner),
            generator: Arc::new(TeapotGenerator),
        }
    }

    /// Creates an interceptor with nothing to forward to.
    ///
    /// Only usable when every request is stubbed; forwarding fails with a
    /// configuration error.
    #[must_use]
    pub fn without_transport() -> Self {
        Self {
            inner: None,
            generator: Arc::new(TeapotGenerator),
        }
    }

    /// Sets the stub generator.
    #[must_use]
    pub fn with_generator(mut self, generator: impl StubGenerator + 'static) -> Self {
        self.generator = Arc::new(generator);
        self
    }

    /// Sets a shared stub generator.
    #[must_use]
    pub fn with_shared_generator(mut self, generator: Arc<dyn StubGenerator>) -> Self {
        self.generator = generator;
        self
    }

    /// Returns true if a transport is configured for forwarding.
    #[must_use]
    pub fn has_transport(&self) -> bool {
        self.inner.is_some()
    }
}

impl fmt::Debug for StubInterceptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StubInterceptor")
            .field("has_transport", &self.inner.is_some())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Transport for StubInterceptor {
    async fn round_trip(&self, request: Request) -> Result<Response> {
        if let Some(storage) = stub_storage(request.context()) {
            trace!(
                method = %request.method(),
                url = %request.url(),
                "Stubbing request"
            );
            return self.generator.generate(&request, &storage);
        }

        let Some(inner) = &self.inner else {
            return Err(TransportError::configuration(
                "request is not stubbed and no transport is configured to forward it",
            ));
        };

        trace!(
            method = %request.method(),
            url = %request.url(),
            "Forwarding request"
        );
        inner.round_trip(request).await
    }
}
