//! The round-trip capability shared by every transport.

use async_trait::async_trait;
use std::sync::Arc;

use super::{Request, Response};
use crate::errors::Result;

/// Protocol for sending one request and receiving one response.
///
/// Decorators such as [`StubInterceptor`](super::StubInterceptor) implement
/// the same trait as the transport they wrap, so they can be used anywhere a
/// transport is expected.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Performs a single round trip.
    async fn round_trip(&self, request: Request) -> Result<Response>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn round_trip(&self, request: Request) -> Result<Response> {
        (**self).round_trip(request).await
    }
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Box<T> {
    async fn round_trip(&self, request: Request) -> Result<Response> {
        (**self).round_trip(request).await
    }
}
