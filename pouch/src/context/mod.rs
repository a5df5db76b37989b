//! Execution contexts carried by outgoing requests.
//!
//! A [`Context`] is an immutable chain of bindings keyed by type. Callers
//! derive new contexts from existing ones, and transports read from them.

mod chain;

pub use chain::{Context, ContextKey};
