//! Identity newtype shared by avatars, groups and scripted objects

use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;
use uuid::Uuid;

/// A UUID naming an avatar, group or object
///
/// The nil identity means "nobody"; it never matches an allow-list entry and
/// a parcel whose group is nil has no group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(Uuid);

impl Identity {
    /// The nil identity
    pub const NIL: Identity = Identity(Uuid::nil());

    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Generate a random identity
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an identity literal, accepting the hyphenated, simple, braced
    /// and URN forms in either case
    pub fn parse(value: &str) -> Result<Self> {
        Uuid::parse_str(value.trim())
            .map(Self)
            .map_err(|e| Error::invalid_identity(value, e.to_string()))
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }

    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Identity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<Uuid> for Identity {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}
