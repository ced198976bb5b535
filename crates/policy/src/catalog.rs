//! Threat ratings of the known privileged operations
//!
//! Operations normally pass their own rating to
//! [`PolicyEngine::ensure_authorized`](crate::PolicyEngine::ensure_authorized).
//! The catalog lets an embedding look the rating up by name instead.

use scriptgate_core::ThreatLevel;

/// Known operations, sorted by name
static OPERATIONS: &[(&str, ThreatLevel)] = &[
    ("osAgentSaveAppearance", ThreatLevel::VeryHigh),
    ("osAvatarName2Key", ThreatLevel::Low),
    ("osAvatarPlayAnimation", ThreatLevel::VeryHigh),
    ("osAvatarStopAnimation", ThreatLevel::VeryHigh),
    ("osCauseDamage", ThreatLevel::High),
    ("osCauseHealing", ThreatLevel::High),
    ("osConsoleCommand", ThreatLevel::Severe),
    ("osDetectedCountry", ThreatLevel::Moderate),
    ("osDie", ThreatLevel::Low),
    ("osDrawText", ThreatLevel::None),
    ("osDropAttachment", ThreatLevel::Moderate),
    ("osDropAttachmentAt", ThreatLevel::Moderate),
    ("osEjectFromGroup", ThreatLevel::VeryLow),
    ("osForceAttachToAvatar", ThreatLevel::High),
    ("osForceAttachToAvatarFromInventory", ThreatLevel::High),
    ("osForceAttachToOtherAvatarFromInventory", ThreatLevel::VeryHigh),
    ("osForceBreakAllLinks", ThreatLevel::VeryLow),
    ("osForceBreakLink", ThreatLevel::VeryLow),
    ("osForceCreateLink", ThreatLevel::VeryLow),
    ("osForceDetachFromAvatar", ThreatLevel::High),
    ("osForceDropAttachment", ThreatLevel::High),
    ("osForceDropAttachmentAt", ThreatLevel::High),
    ("osForceOtherSit", ThreatLevel::VeryHigh),
    ("osFormatString", ThreatLevel::VeryLow),
    ("osGetAgentCountry", ThreatLevel::Moderate),
    ("osGetAgentIP", ThreatLevel::Severe),
    ("osGetAgents", ThreatLevel::None),
    ("osGetAvatarHomeURI", ThreatLevel::Low),
    ("osGetAvatarList", ThreatLevel::None),
    ("osGetGender", ThreatLevel::None),
    ("osGetGridCustom", ThreatLevel::Moderate),
    ("osGetGridGatekeeperURI", ThreatLevel::Moderate),
    ("osGetGridHomeURI", ThreatLevel::Moderate),
    ("osGetGridLoginURI", ThreatLevel::Moderate),
    ("osGetHealRate", ThreatLevel::None),
    ("osGetHealth", ThreatLevel::None),
    ("osGetLinkPrimitiveParams", ThreatLevel::High),
    ("osGetNPCList", ThreatLevel::None),
    ("osGetNotecard", ThreatLevel::VeryHigh),
    ("osGetNotecardLine", ThreatLevel::VeryHigh),
    ("osGetNumberOfAttachments", ThreatLevel::Moderate),
    ("osGetNumberOfNotecardLines", ThreatLevel::VeryHigh),
    ("osGetRegionMapTexture", ThreatLevel::High),
    ("osGetRegionStats", ThreatLevel::Moderate),
    ("osGetRezzingObject", ThreatLevel::None),
    ("osGetScriptEngineName", ThreatLevel::High),
    ("osGetSimulatorMemory", ThreatLevel::Moderate),
    ("osGetSimulatorMemoryKB", ThreatLevel::Moderate),
    ("osGetSimulatorVersion", ThreatLevel::High),
    ("osGetWindParam", ThreatLevel::VeryLow),
    ("osInviteToGroup", ThreatLevel::VeryLow),
    ("osKey2Name", ThreatLevel::Low),
    ("osKickAvatar", ThreatLevel::Severe),
    ("osListenRegex", ThreatLevel::Low),
    ("osLoadedCreationDate", ThreatLevel::Low),
    ("osLoadedCreationID", ThreatLevel::Low),
    ("osLoadedCreationTime", ThreatLevel::Low),
    ("osMakeNotecard", ThreatLevel::High),
    ("osMatchString", ThreatLevel::VeryLow),
    ("osMessageAttachments", ThreatLevel::Moderate),
    ("osMessageObject", ThreatLevel::Low),
    ("osNpcCreate", ThreatLevel::High),
    ("osNpcGetOwner", ThreatLevel::None),
    ("osNpcGetPos", ThreatLevel::High),
    ("osNpcGetRot", ThreatLevel::High),
    ("osNpcLoadAppearance", ThreatLevel::High),
    ("osNpcMoveTo", ThreatLevel::High),
    ("osNpcMoveToTarget", ThreatLevel::High),
    ("osNpcPlayAnimation", ThreatLevel::High),
    ("osNpcRemove", ThreatLevel::High),
    ("osNpcSaveAppearance", ThreatLevel::High),
    ("osNpcSay", ThreatLevel::High),
    ("osNpcSayTo", ThreatLevel::High),
    ("osNpcSetProfileAbout", ThreatLevel::Low),
    ("osNpcSetProfileImage", ThreatLevel::Low),
    ("osNpcSetRot", ThreatLevel::High),
    ("osNpcShout", ThreatLevel::High),
    ("osNpcSit", ThreatLevel::High),
    ("osNpcStand", ThreatLevel::High),
    ("osNpcStopAnimation", ThreatLevel::High),
    ("osNpcStopMoveToTarget", ThreatLevel::High),
    ("osNpcTouch", ThreatLevel::High),
    ("osNpcWhisper", ThreatLevel::High),
    ("osOwnerSaveAppearance", ThreatLevel::High),
    ("osParcelJoin", ThreatLevel::High),
    ("osParcelSubdivide", ThreatLevel::High),
    ("osRegexIsMatch", ThreatLevel::Low),
    ("osRegionNotice", ThreatLevel::High),
    ("osRegionRestart", ThreatLevel::High),
    ("osReplaceString", ThreatLevel::VeryLow),
    ("osRequestSecureURL", ThreatLevel::Moderate),
    ("osRequestURL", ThreatLevel::Moderate),
    ("osSetContentType", ThreatLevel::Severe),
    ("osSetDynamicTextureData", ThreatLevel::VeryLow),
    ("osSetDynamicTextureDataBlend", ThreatLevel::VeryLow),
    ("osSetDynamicTextureDataBlendFace", ThreatLevel::VeryLow),
    ("osSetDynamicTextureURL", ThreatLevel::VeryHigh),
    ("osSetDynamicTextureURLBlend", ThreatLevel::VeryHigh),
    ("osSetDynamicTextureURLBlendFace", ThreatLevel::VeryHigh),
    ("osSetEstateSunSettings", ThreatLevel::High),
    ("osSetHealRate", ThreatLevel::High),
    ("osSetHealth", ThreatLevel::High),
    ("osSetOwnerSpeed", ThreatLevel::Moderate),
    ("osSetParcelMediaURL", ThreatLevel::VeryLow),
    ("osSetParcelMusicURL", ThreatLevel::VeryLow),
    ("osSetParcelSIPAddress", ThreatLevel::VeryLow),
    ("osSetPrimFloatOnWater", ThreatLevel::VeryLow),
    ("osSetRegionSunSettings", ThreatLevel::High),
    ("osSetRegionWaterHeight", ThreatLevel::High),
    ("osSetRot", ThreatLevel::VeryHigh),
    ("osSetSpeed", ThreatLevel::Moderate),
    ("osSetSunParam", ThreatLevel::None),
    ("osSetTerrainHeight", ThreatLevel::High),
    ("osSetTerrainTexture", ThreatLevel::High),
    ("osSetTerrainTextureHeight", ThreatLevel::High),
    ("osSetWindParam", ThreatLevel::VeryLow),
    ("osSunGetParam", ThreatLevel::None),
    ("osSunSetParam", ThreatLevel::None),
    ("osTeleportAgent", ThreatLevel::Severe),
    ("osTeleportObject", ThreatLevel::Severe),
    ("osTeleportOwner", ThreatLevel::None),
    ("osTerrainFlush", ThreatLevel::VeryLow),
    ("osTerrainSetHeight", ThreatLevel::High),
    ("osUnixTimeToTimestamp", ThreatLevel::VeryLow),
    ("osWindActiveModelPluginName", ThreatLevel::None),
];

/// Rating of `operation`, if it is a known operation
#[must_use]
pub fn threat_level_of(operation: &str) -> Option<ThreatLevel> {
    OPERATIONS
        .binary_search_by(|(name, _)| (*name).cmp(operation))
        .ok()
        .map(|index| OPERATIONS[index].1)
}

/// All known operations with their ratings
#[must_use]
pub fn operations() -> &'static [(&'static str, ThreatLevel)] {
    OPERATIONS
}
