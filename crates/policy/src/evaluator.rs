//! Authorization evaluator
//!
//! Decides one call against an already compiled [`PolicyDescriptor`]. The
//! order of the checks below is part of the observable security behaviour:
//!
//! 1. default policy: threat level against the ceiling
//! 2. empty policy: disabled
//! 3. allow-all
//! 4. role and owner grants, first match wins:
//!    owner list, parcel owner, parcel group, estate manager, estate owner,
//!    grid god, god, active god
//! 5. creator list fallback

use crate::context::CallContext;
use crate::descriptor::PolicyDescriptor;
use crate::error::Denial;
use crate::grant::Grants;
use scriptgate_core::ThreatLevel;
use tracing::trace;

/// Evaluate `operation` rated `level` for the caller described by `ctx`
pub fn evaluate(
    operation: &str,
    level: ThreatLevel,
    ceiling: ThreatLevel,
    policy: &PolicyDescriptor,
    ctx: &CallContext<'_>,
) -> Result<(), Denial> {
    if policy.is_threat_level() {
        if level.within(ceiling) {
            return Ok(());
        }
        return Err(Denial::ThresholdExceeded {
            operation: operation.to_string(),
            ceiling,
            level,
        });
    }

    if policy.is_disabled() {
        return Err(Denial::ConfiguredDisabled {
            operation: operation.to_string(),
        });
    }

    if policy.is_allow_all() {
        return Ok(());
    }

    if let Some(grant) = matching_grant(policy, ctx) {
        trace!(operation = %operation, grant = ?grant, "Granted");
        return Ok(());
    }

    creator_fallback(operation, policy, ctx)
}

/// First role or owner-list grant that holds for the caller
fn matching_grant(policy: &PolicyDescriptor, ctx: &CallContext<'_>) -> Option<Grants> {
    let owner = ctx.script_owner();
    let region = ctx.region;

    if policy.allows_owner(&ctx.host.owner_id) {
        return Some(Grants::OWNER_LIST);
    }

    if policy.has(Grants::PARCEL_OWNER)
        && ctx.parcel().is_some_and(|parcel| parcel.owner_id == owner)
    {
        return Some(Grants::PARCEL_OWNER);
    }

    if policy.has(Grants::PARCEL_GROUP_MEMBER)
        && ctx.parcel().is_some_and(|parcel| {
            !parcel.group_id.is_nil() && parcel.group_id == ctx.item.group_id
        })
    {
        return Some(Grants::PARCEL_GROUP_MEMBER);
    }

    // The estate owner is also a manager, but only ESTATE_OWNER admits them.
    if policy.has(Grants::ESTATE_MANAGER)
        && region.is_estate_manager_or_owner(owner)
        && region.estate_owner() != owner
    {
        return Some(Grants::ESTATE_MANAGER);
    }

    if policy.has(Grants::ESTATE_OWNER) && region.estate_owner() == owner {
        return Some(Grants::ESTATE_OWNER);
    }

    if policy.has(Grants::GRID_GOD) && region.is_grid_god(owner) {
        return Some(Grants::GRID_GOD);
    }

    if policy.has(Grants::GOD) && region.is_administrator(owner) {
        return Some(Grants::GOD);
    }

    if policy.has(Grants::ACTIVE_GOD)
        && region
            .presence_of(owner)
            .is_some_and(|presence| !presence.is_deleted && presence.is_active_god)
    {
        return Some(Grants::ACTIVE_GOD);
    }

    None
}

fn creator_fallback(
    operation: &str,
    policy: &PolicyDescriptor,
    ctx: &CallContext<'_>,
) -> Result<(), Denial> {
    if !policy.has(Grants::CREATOR_LIST) {
        return Err(Denial::GenericDenied {
            operation: operation.to_string(),
        });
    }

    let creator = ctx.item.creator_id;
    if !policy.allows_creator(&creator) {
        return Err(Denial::CreatorNotAllowed {
            operation: operation.to_string(),
        });
    }

    if creator != ctx.script_owner() && ctx.item.current_permissions.is_modifiable() {
        return Err(Denial::CreatorNotOwner {
            operation: operation.to_string(),
        });
    }

    trace!(operation = %operation, creator = %creator, "Granted by creator list");
    Ok(())
}
