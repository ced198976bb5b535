//! Shared utilities for scriptgate
//!
//! Currently only logging setup for binaries and tests embedding the engine.

pub mod tracing;

pub use self::tracing::*;
