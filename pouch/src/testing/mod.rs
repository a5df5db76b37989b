//! Testing utilities for code that uses pouch transports.
//!
//! This module provides:
//! - A mock transport that counts and records round trips
//! - A transport that always fails

mod mocks;

pub use mocks::{FailingTransport, MockTransport};
