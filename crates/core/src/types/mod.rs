//! Core domain types for `scriptgate`.
//!
//! - **`identity`**: UUID-backed identities for avatars, groups and objects
//! - **`threat`**: the ordered threat scale used by operations and the global ceiling
//! - **`permissions`**: inventory permission masks carried by a running script
//! - **`position`**: region-local coordinates used to resolve parcels

pub mod identity;
pub mod permissions;
pub mod position;
pub mod threat;

pub use identity::*;
pub use permissions::*;
pub use position::*;
pub use threat::*;
