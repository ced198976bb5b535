//! Compiled per-operation policy

use crate::grant::Grants;
use scriptgate_core::Identity;
use std::collections::HashSet;

/// Immutable access rule for one operation
///
/// Built by the compiler and shared through the cache as an
/// `Arc<PolicyDescriptor>`. The owner and creator sets are empty unless the
/// matching list flag is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyDescriptor {
    grants: Grants,
    allowed_owners: HashSet<Identity>,
    allowed_creators: HashSet<Identity>,
}

impl PolicyDescriptor {
    /// Default policy: governed by the global threat ceiling
    #[must_use]
    pub fn by_threat_level() -> Self {
        Self::with_grants(Grants::BY_THREAT_LEVEL)
    }

    /// Always allowed
    #[must_use]
    pub fn allow_all() -> Self {
        Self::with_grants(Grants::ALLOW_ALL)
    }

    /// Never allowed
    #[must_use]
    pub fn disabled() -> Self {
        Self::with_grants(Grants::empty())
    }

    fn with_grants(grants: Grants) -> Self {
        Self {
            grants,
            allowed_owners: HashSet::new(),
            allowed_creators: HashSet::new(),
        }
    }

    pub(crate) fn add_role(&mut self, role: Grants) {
        self.grants |= role;
    }

    pub(crate) fn add_owner(&mut self, owner: Identity) {
        self.grants |= Grants::OWNER_LIST;
        self.allowed_owners.insert(owner);
    }

    pub(crate) fn add_creator(&mut self, creator: Identity) {
        self.grants |= Grants::CREATOR_LIST;
        self.allowed_creators.insert(creator);
    }

    #[must_use]
    pub fn grants(&self) -> Grants {
        self.grants
    }

    #[must_use]
    pub fn allowed_owners(&self) -> &HashSet<Identity> {
        &self.allowed_owners
    }

    #[must_use]
    pub fn allowed_creators(&self) -> &HashSet<Identity> {
        &self.allowed_creators
    }

    #[must_use]
    pub fn is_threat_level(&self) -> bool {
        self.grants == Grants::BY_THREAT_LEVEL
    }

    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.grants.is_empty()
    }

    #[must_use]
    pub fn is_allow_all(&self) -> bool {
        self.grants.contains(Grants::ALLOW_ALL)
    }

    #[must_use]
    pub fn has(&self, grant: Grants) -> bool {
        self.grants.contains(grant)
    }

    #[must_use]
    pub fn allows_owner(&self, owner: &Identity) -> bool {
        self.has(Grants::OWNER_LIST) && self.allowed_owners.contains(owner)
    }

    #[must_use]
    pub fn allows_creator(&self, creator: &Identity) -> bool {
        self.has(Grants::CREATOR_LIST) && self.allowed_creators.contains(creator)
    }
}

impl Default for PolicyDescriptor {
    fn default() -> Self {
        Self::by_threat_level()
    }
}
