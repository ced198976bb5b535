//! Authorization for privileged script functions
//!
//! Scripts running in a shared region can call a large set of privileged
//! functions. Each function carries a [`ThreatLevel`]; before doing anything
//! it asks the [`PolicyEngine`] whether the calling script may use it:
//!
//! - with no override configured, the function runs when its rating is at or
//!   below the region's `OSFunctionThreatLevel`
//! - `Allow_<function>` can switch it on or off for everyone, or name the
//!   roles and owners allowed to use it
//! - `Creators_<function>` names script authors whose scripts may use it
//!
//! Overrides are compiled once per function into a [`PolicyDescriptor`] and
//! cached for the life of the engine.
//!
//! ```no_run
//! use scriptgate_config::MapConfigSource;
//! use scriptgate_policy::PolicyEngine;
//! use std::sync::Arc;
//!
//! let config = MapConfigSource::new()
//!     .with("OSFunctionThreatLevel", "Moderate")
//!     .with("Allow_osTeleportAgent", "ESTATE_OWNER, ESTATE_MANAGER");
//! let engine = PolicyEngine::shared(|| Arc::new(config));
//! assert!(engine.state().functions_enabled);
//! ```

pub mod cache;
pub mod catalog;
pub mod compiler;
pub mod context;
pub mod descriptor;
pub mod engine;
pub mod error;
pub mod evaluator;
pub mod global;
pub mod grant;

pub use cache::PolicyCache;
pub use compiler::{compile, CompiledPolicy, ConfigWarning};
pub use context::{CallContext, HostObject, ParcelInfo, PresenceInfo, RegionView, ScriptItem};
pub use descriptor::PolicyDescriptor;
pub use engine::PolicyEngine;
pub use error::{Denial, ScriptFault};
pub use evaluator::evaluate;
pub use global::GlobalPolicyState;
pub use grant::Grants;
pub use scriptgate_core::ThreatLevel;
