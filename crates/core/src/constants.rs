/// Constants used throughout the scriptgate codebase
// Configuration sections
pub const PRIMARY_CONFIG_SECTION: &str = "OSSL";
pub const FALLBACK_CONFIG_SECTION: &str = "XEngine";

// Global switches
pub const ALLOW_FUNCTIONS_KEY: &str = "AllowOSFunctions";
pub const PERMISSION_ERROR_TO_OWNER_KEY: &str = "PermissionErrorToOwner";
pub const THREAT_LEVEL_KEY: &str = "OSFunctionThreatLevel";

pub const DEFAULT_FUNCTIONS_ENABLED: bool = true;
pub const DEFAULT_PERMISSION_ERROR_TO_OWNER: bool = false;

// Per-operation override prefixes
pub const OWNER_RULE_PREFIX: &str = "Allow_";
pub const CREATOR_RULE_PREFIX: &str = "Creators_";

/// Key holding the owner/role override for `operation`
#[must_use]
pub fn owner_rule_key(operation: &str) -> String {
    format!("{OWNER_RULE_PREFIX}{operation}")
}

/// Key holding the creator allow-list for `operation`
#[must_use]
pub fn creator_rule_key(operation: &str) -> String {
    format!("{CREATOR_RULE_PREFIX}{operation}")
}
