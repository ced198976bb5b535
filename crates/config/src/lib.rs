//! Configuration sources for scriptgate
//!
//! The policy engine reads every setting through the [`ConfigSource`] trait.
//! This crate provides the trait, an in-memory implementation, and a loader
//! that pulls one section out of a JSON document.

pub mod loader;
pub mod source;

pub use loader::*;
pub use source::*;
