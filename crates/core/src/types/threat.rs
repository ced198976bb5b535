//! The threat scale
//!
//! Every privileged operation is rated on this scale and the region
//! configuration sets a ceiling on it. Ratings, lowest first:
//!
//! | level | meaning |
//! |-------|---------|
//! | `NoAccess` | ceiling only: nothing rated above it runs |
//! | `None` | harmless, read-only |
//! | `Nuisance` | can annoy other users |
//! | `VeryLow` | small, easily undone effects |
//! | `Low` | may reveal limited information |
//! | `Moderate` | may reveal sensitive information or affect others |
//! | `High` | can modify the region or affect other users directly |
//! | `VeryHigh` | can disrupt the region or other users' experience |
//! | `Severe` | can compromise the simulator or user data |

use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

/// Ordered risk rating; comparison follows declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ThreatLevel {
    NoAccess,
    None,
    Nuisance,
    VeryLow,
    Low,
    Moderate,
    High,
    VeryHigh,
    Severe,
}

impl ThreatLevel {
    /// All levels in ascending order
    pub const ALL: [ThreatLevel; 9] = [
        ThreatLevel::NoAccess,
        ThreatLevel::None,
        ThreatLevel::Nuisance,
        ThreatLevel::VeryLow,
        ThreatLevel::Low,
        ThreatLevel::Moderate,
        ThreatLevel::High,
        ThreatLevel::VeryHigh,
        ThreatLevel::Severe,
    ];

    /// Ceiling used when the configuration names no level or an unknown one
    pub const DEFAULT_CEILING: ThreatLevel = ThreatLevel::VeryLow;

    /// Configuration name of this level
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ThreatLevel::NoAccess => "NoAccess",
            ThreatLevel::None => "None",
            ThreatLevel::Nuisance => "Nuisance",
            ThreatLevel::VeryLow => "VeryLow",
            ThreatLevel::Low => "Low",
            ThreatLevel::Moderate => "Moderate",
            ThreatLevel::High => "High",
            ThreatLevel::VeryHigh => "VeryHigh",
            ThreatLevel::Severe => "Severe",
        }
    }

    /// Whether an operation rated `self` fits under `ceiling`
    #[must_use]
    pub fn within(self, ceiling: ThreatLevel) -> bool {
        self <= ceiling
    }
}

impl Display for ThreatLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThreatLevel {
    type Err = Error;

    /// Names are matched exactly, as they appear in region configuration
    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|level| level.as_str() == s.trim())
            .ok_or_else(|| Error::unknown_threat_level(s))
    }
}
