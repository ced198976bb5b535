//! Grant categories an operation policy can combine

use bitflags::bitflags;

bitflags! {
    /// Set of conditions under which a policy lets an operation run.
    ///
    /// The role flags and the identity-list flags may be freely combined; any
    /// one of them holding is enough. [`BY_THREAT_LEVEL`](Self::BY_THREAT_LEVEL)
    /// and [`ALLOW_ALL`](Self::ALLOW_ALL) only ever appear alone. The empty set
    /// is a valid policy meaning "disabled".
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Grants: u32 {
        /// Script owner owns the parcel the object stands on
        const PARCEL_OWNER        = 1 << 0;
        /// Script group is the parcel's group
        const PARCEL_GROUP_MEMBER = 1 << 1;
        /// Script owner manages the estate (estate owner excluded)
        const ESTATE_MANAGER      = 1 << 2;
        /// Script owner owns the estate
        const ESTATE_OWNER        = 1 << 3;
        /// Script owner is logged in with god powers switched on
        const ACTIVE_GOD          = 1 << 4;
        /// Script owner is a region administrator
        const GOD                 = 1 << 5;
        /// Script owner is a grid administrator
        const GRID_GOD            = 1 << 6;

        /// Compare the operation's threat level against the global ceiling
        const BY_THREAT_LEVEL     = 1 << 28;
        /// Object owner appears in the policy's owner list
        const OWNER_LIST          = 1 << 29;
        /// Script creator appears in the policy's creator list
        const CREATOR_LIST        = 1 << 30;
        /// Always allowed
        const ALLOW_ALL           = 1 << 31;

        /// Every role keyword accepted in an owner rule
        const ROLES = Self::PARCEL_OWNER.bits()
            | Self::PARCEL_GROUP_MEMBER.bits()
            | Self::ESTATE_MANAGER.bits()
            | Self::ESTATE_OWNER.bits()
            | Self::ACTIVE_GOD.bits()
            | Self::GOD.bits()
            | Self::GRID_GOD.bits();
    }
}

impl Grants {
    /// Role flag named by an (already uppercased) owner-rule keyword
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Grants> {
        let grant = match keyword {
            "PARCEL_OWNER" => Grants::PARCEL_OWNER,
            "PARCEL_GROUP_MEMBER" => Grants::PARCEL_GROUP_MEMBER,
            "ESTATE_MANAGER" => Grants::ESTATE_MANAGER,
            "ESTATE_OWNER" => Grants::ESTATE_OWNER,
            "ACTIVE_GOD" => Grants::ACTIVE_GOD,
            "GOD" => Grants::GOD,
            "GRID_GOD" => Grants::GRID_GOD,
            _ => return None,
        };
        Some(grant)
    }
}
