//! Core domain types, errors, and constants for `scriptgate`.
//!
//! This crate holds the building blocks shared by the configuration and
//! policy crates:
//!
//! - **`errors`**: the infrastructure `Error` enum and `Result` alias.
//! - **`types`**: identities, the threat scale, and script permission masks.
//! - **`constants`**: configuration key names and their defaults.

pub mod constants;
pub mod errors;
pub mod types;

pub use self::{
    constants::*,
    errors::{Error, Result},
    types::*,
};
