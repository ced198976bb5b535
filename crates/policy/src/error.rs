//! Denials and script-facing faults

use scriptgate_core::ThreatLevel;
use thiserror::Error;

/// Why an operation may not run
///
/// `Display` yields the reason string shown to the script or its owner.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Denial {
    /// The whole privileged-function subsystem is switched off
    #[error("All unsafe OSSL functions disabled")]
    GloballyDisabled { operation: String },

    /// Default policy and the operation is rated above the ceiling
    #[error(
        "{operation} permission denied. Allowed threat level is {ceiling} but function threat level is {level}."
    )]
    ThresholdExceeded {
        operation: String,
        ceiling: ThreatLevel,
        level: ThreatLevel,
    },

    /// Override resolved to an empty grant set
    #[error("{operation} disabled in region configuration")]
    ConfiguredDisabled { operation: String },

    /// No grant matched and there is no creator list to fall back on
    #[error("{operation} permission denied.")]
    GenericDenied { operation: String },

    /// Creator list exists but does not name the script's creator
    #[error(
        "{operation} permission denied. Script creator is not in the list of users allowed to execute this function and prim owner also has no permission."
    )]
    CreatorNotAllowed { operation: String },

    /// Creator is listed but someone else owns a still-modifiable copy
    #[error("{operation} permission denied. Script creator is not prim owner.")]
    CreatorNotOwner { operation: String },
}

impl Denial {
    /// Operation the denial is about
    #[must_use]
    pub fn operation(&self) -> &str {
        match self {
            Denial::GloballyDisabled { operation }
            | Denial::ThresholdExceeded { operation, .. }
            | Denial::ConfiguredDisabled { operation }
            | Denial::GenericDenied { operation }
            | Denial::CreatorNotAllowed { operation }
            | Denial::CreatorNotOwner { operation } => operation,
        }
    }
}

/// Runtime fault raised into the calling script
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScriptFault {
    /// The authorization engine refused the call
    #[error("{}OSSL Permission Error: {denial}", owner_prefix(.to_owner))]
    Permission { denial: Denial, to_owner: bool },

    /// Generic runtime failure
    #[error("OSSL Runtime Error: {message}")]
    Runtime { message: String },

    /// The operation has no threat rating in the catalog
    #[error("OSSL Runtime Error: {operation} is not a known function")]
    UnknownOperation { operation: String },
}

fn owner_prefix(to_owner: &bool) -> &'static str {
    if *to_owner {
        "(OWNER)"
    } else {
        ""
    }
}

impl ScriptFault {
    /// Wrap a denial, phrased for the owner when `to_owner` is set
    #[must_use]
    pub fn permission(denial: Denial, to_owner: bool) -> Self {
        ScriptFault::Permission { denial, to_owner }
    }

    /// Create a runtime fault
    #[must_use]
    pub fn runtime(message: impl Into<String>) -> Self {
        ScriptFault::Runtime {
            message: message.into(),
        }
    }

    /// Underlying denial, for permission faults
    #[must_use]
    pub fn denial(&self) -> Option<&Denial> {
        match self {
            ScriptFault::Permission { denial, .. } => Some(denial),
            _ => None,
        }
    }
}
