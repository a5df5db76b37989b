//! Transports and the stubbing interceptor.
//!
//! This module provides:
//! - Request and response types that carry an execution context
//! - The `Transport` round-trip trait
//! - A network transport backed by reqwest
//! - `StubInterceptor`, which diverts requests from stubbed contexts

mod config;
mod interceptor;
mod message;
mod network;
mod protocols;

pub use config::TransportConfig;
pub use interceptor::{configure_for_stubbing, StubInterceptor};
pub use message::{Request, Response};
pub use network::ReqwestTransport;
pub use protocols::Transport;
