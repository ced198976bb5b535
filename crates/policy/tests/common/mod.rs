//! Shared test helpers: an in-memory region and context builders

#![allow(dead_code)]

use scriptgate_config::MapConfigSource;
use scriptgate_core::{Identity, PermissionMask, Position};
use scriptgate_policy::{
    CallContext, HostObject, ParcelInfo, PolicyEngine, PresenceInfo, RegionView, ScriptItem,
};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Region with a single parcel covering everything
#[derive(Debug, Clone, Default)]
pub struct FakeRegion {
    pub parcel: Option<ParcelInfo>,
    pub estate_owner: Identity,
    pub estate_managers: HashSet<Identity>,
    pub administrators: HashSet<Identity>,
    pub grid_gods: HashSet<Identity>,
    pub presences: HashMap<Identity, PresenceInfo>,
}

impl FakeRegion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parcel(mut self, owner_id: Identity, group_id: Identity) -> Self {
        self.parcel = Some(ParcelInfo { owner_id, group_id });
        self
    }

    pub fn with_estate_owner(mut self, owner: Identity) -> Self {
        self.estate_owner = owner;
        self
    }

    pub fn with_estate_manager(mut self, manager: Identity) -> Self {
        self.estate_managers.insert(manager);
        self
    }

    pub fn with_administrator(mut self, id: Identity) -> Self {
        self.administrators.insert(id);
        self
    }

    pub fn with_grid_god(mut self, id: Identity) -> Self {
        self.grid_gods.insert(id);
        self
    }

    pub fn with_presence(mut self, id: Identity, presence: PresenceInfo) -> Self {
        self.presences.insert(id, presence);
        self
    }
}

impl RegionView for FakeRegion {
    fn parcel_at(&self, _position: Position) -> Option<ParcelInfo> {
        self.parcel
    }

    fn estate_owner(&self) -> Identity {
        self.estate_owner
    }

    fn is_estate_manager_or_owner(&self, id: Identity) -> bool {
        id == self.estate_owner || self.estate_managers.contains(&id)
    }

    fn is_administrator(&self, id: Identity) -> bool {
        self.administrators.contains(&id)
    }

    fn is_grid_god(&self, id: Identity) -> bool {
        self.grid_gods.contains(&id)
    }

    fn presence_of(&self, id: Identity) -> Option<PresenceInfo> {
        self.presences.get(&id).copied()
    }
}

/// Script owned and created by `owner`, not modifiable, in no group
pub fn script_of(owner: Identity) -> (HostObject, ScriptItem) {
    let host = HostObject {
        owner_id: owner,
        position: Position::new(128.0, 128.0, 25.0),
    };
    let item = ScriptItem {
        owner_id: owner,
        group_id: Identity::NIL,
        creator_id: owner,
        current_permissions: PermissionMask::COPY | PermissionMask::TRANSFER,
    };
    (host, item)
}

pub fn context<'a>(region: &'a FakeRegion, host: HostObject, item: ScriptItem) -> CallContext<'a> {
    CallContext::new(region, host, item)
}

pub fn engine(config: MapConfigSource) -> PolicyEngine {
    PolicyEngine::new(Arc::new(config))
}
