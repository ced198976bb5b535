//! Process-wide switches read from configuration

use scriptgate_config::ConfigSource;
use scriptgate_core::{
    constants::{
        ALLOW_FUNCTIONS_KEY, DEFAULT_FUNCTIONS_ENABLED, DEFAULT_PERMISSION_ERROR_TO_OWNER,
        PERMISSION_ERROR_TO_OWNER_KEY, THREAT_LEVEL_KEY,
    },
    ThreatLevel,
};
use tracing::warn;

/// Global policy switches, fixed for the life of an engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlobalPolicyState {
    /// Privileged functions may run at all
    pub functions_enabled: bool,
    /// Ceiling for operations on the default policy
    pub max_threat_level: ThreatLevel,
    /// Faults are phrased for the object owner
    pub denial_addressed_to_owner: bool,
}

impl Default for GlobalPolicyState {
    fn default() -> Self {
        Self {
            functions_enabled: DEFAULT_FUNCTIONS_ENABLED,
            max_threat_level: ThreatLevel::DEFAULT_CEILING,
            denial_addressed_to_owner: DEFAULT_PERMISSION_ERROR_TO_OWNER,
        }
    }
}

impl GlobalPolicyState {
    /// Read the global switches from `source`, falling back to defaults
    pub fn from_source(source: &dyn ConfigSource) -> Self {
        let max_threat_level = match source.get_string(THREAT_LEVEL_KEY) {
            None => ThreatLevel::DEFAULT_CEILING,
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                warn!(
                    key = THREAT_LEVEL_KEY,
                    value = %raw,
                    default = %ThreatLevel::DEFAULT_CEILING,
                    "Unknown threat level, using default"
                );
                ThreatLevel::DEFAULT_CEILING
            }),
        };

        Self {
            functions_enabled: source.get_bool(ALLOW_FUNCTIONS_KEY, DEFAULT_FUNCTIONS_ENABLED),
            max_threat_level,
            denial_addressed_to_owner: source
                .get_bool(PERMISSION_ERROR_TO_OWNER_KEY, DEFAULT_PERMISSION_ERROR_TO_OWNER),
        }
    }
}
