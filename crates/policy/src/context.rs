//! Per-call evaluation context and the region services it reads

use scriptgate_core::{Identity, PermissionMask, Position};

/// The in-world object whose script is calling
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HostObject {
    /// Current owner of the object
    pub owner_id: Identity,
    /// Absolute position, used to find the enclosing parcel
    pub position: Position,
}

/// The script's inventory item inside the host object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptItem {
    /// Owner of the script item
    pub owner_id: Identity,
    /// Group the item is set to
    pub group_id: Identity,
    /// Author of the script
    pub creator_id: Identity,
    /// Permissions currently granted on the item
    pub current_permissions: PermissionMask,
}

/// Ownership attributes of a parcel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParcelInfo {
    pub owner_id: Identity,
    pub group_id: Identity,
}

/// Live presence of a connected avatar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PresenceInfo {
    /// Avatar has god powers switched on
    pub is_active_god: bool,
    /// Presence is being torn down
    pub is_deleted: bool,
}

/// Read-only view of the region the script runs in
///
/// Every method must be a fast in-memory lookup; the evaluator calls them
/// while deciding a single script call and holds no lock while doing so.
pub trait RegionView: Send + Sync {
    /// Parcel containing `position`, if any
    fn parcel_at(&self, position: Position) -> Option<ParcelInfo>;

    /// Owner of the estate the region belongs to
    fn estate_owner(&self) -> Identity;

    /// Whether `id` is an estate manager or the estate owner
    fn is_estate_manager_or_owner(&self, id: Identity) -> bool;

    /// Whether `id` holds region administrator rights
    fn is_administrator(&self, id: Identity) -> bool;

    /// Whether `id` holds grid administrator rights
    fn is_grid_god(&self, id: Identity) -> bool;

    /// Presence of `id` if currently connected to the region
    fn presence_of(&self, id: Identity) -> Option<PresenceInfo>;
}

/// Everything the evaluator needs to decide one call
#[derive(Clone, Copy)]
pub struct CallContext<'a> {
    pub host: HostObject,
    pub item: ScriptItem,
    pub region: &'a dyn RegionView,
}

impl<'a> CallContext<'a> {
    pub fn new(region: &'a dyn RegionView, host: HostObject, item: ScriptItem) -> Self {
        Self { host, item, region }
    }

    /// Identity the role checks are made against
    #[must_use]
    pub fn script_owner(&self) -> Identity {
        self.item.owner_id
    }

    /// Parcel under the host object
    #[must_use]
    pub fn parcel(&self) -> Option<ParcelInfo> {
        self.region.parcel_at(self.host.position)
    }
}

impl std::fmt::Debug for CallContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallContext")
            .field("host", &self.host)
            .field("item", &self.item)
            .finish_non_exhaustive()
    }
}
