//! Observability utilities.

mod setup;

pub use setup::{init_tracing, LogFormat, TracingConfig};
