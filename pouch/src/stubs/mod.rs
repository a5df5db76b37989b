//! Stub marking, stub data and stub generation.
//!
//! This module provides:
//! - Operations that mark an execution context as eligible for stubbing
//! - Shared storage for values a stub generator can read
//! - The generator trait and its built-in implementations

mod generator;
mod marker;
mod storage;

pub use generator::{FixedResponseGenerator, StubGenerator, TeapotGenerator};
pub use marker::{
    enable_stubs, enable_stubs_with_data, is_stub_eligible, new_stubbed_context, stub_storage,
};
pub use storage::StubStorage;
