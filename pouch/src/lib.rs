//! # Pouch
//!
//! Context-driven request stubbing for HTTP clients.
//!
//! Production code keeps its client, its transport and its request
//! construction. Tests mark the execution context a request is issued
//! under, and the intercepting transport answers that request with a stub
//! instead of sending it over the network.
//!
//! - **Execution contexts**: immutable chains of typed bindings
//! - **Stub marking**: flag a context as stub-eligible and attach shared data
//! - **Interception**: a transport decorator that stubs or forwards
//! - **Pluggable generators**: decide what a stubbed response looks like
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pouch::prelude::*;
//!
//! let transport = configure_for_stubbing(ReqwestTransport::new()?);
//! let client = Client::new(transport);
//!
//! // Unmarked: goes to the network.
//! let real = client.get("https://example.com/").send().await?;
//!
//! // Marked: answered by the stub generator.
//! let stubbed = client
//!     .get("https://example.com/")
//!     .context(new_stubbed_context())
//!     .send()
//!     .await?;
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod client;
pub mod context;
pub mod errors;
pub mod observability;
pub mod stubs;
pub mod testing;
pub mod transport;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::client::{Client, RequestBuilder};
    pub use crate::context::{Context, ContextKey};
    pub use crate::errors::{Result, TransportError};
    pub use crate::stubs::{
        enable_stubs, enable_stubs_with_data, is_stub_eligible, new_stubbed_context,
        stub_storage, FixedResponseGenerator, StubGenerator, StubStorage, TeapotGenerator,
    };
    pub use crate::transport::{
        configure_for_stubbing, Request, ReqwestTransport, Response, StubInterceptor, Transport,
        TransportConfig,
    };
}
