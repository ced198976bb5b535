//! Inventory permission masks

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Permission bits an inventory item grants its next owner.
    ///
    /// Only [`MODIFY`](Self::MODIFY) matters to authorization: a script whose
    /// item is still modifiable can be edited by someone other than its
    /// creator, so creator-based trust does not carry over to it.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct PermissionMask: u32 {
        const TRANSFER = 1 << 13;
        const MODIFY   = 1 << 14;
        const COPY     = 1 << 15;
        const MOVE     = 1 << 19;

        const ALL = Self::TRANSFER.bits()
            | Self::MODIFY.bits()
            | Self::COPY.bits()
            | Self::MOVE.bits();
    }
}

impl PermissionMask {
    #[must_use]
    pub fn is_modifiable(&self) -> bool {
        self.contains(Self::MODIFY)
    }
}
