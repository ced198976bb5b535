//! Policy compiler
//!
//! Turns the two raw override strings of an operation into a
//! [`PolicyDescriptor`]:
//!
//! - `Allow_<op>`: `true`, `false`, or a comma-separated list of role
//!   keywords and owner UUIDs
//! - `Creators_<op>`: a comma-separated list of creator UUIDs
//!
//! Compilation never fails. Tokens that are neither a role keyword nor a
//! UUID are reported as [`ConfigWarning`]s and skipped; the rest of the rule
//! still applies.

use crate::descriptor::PolicyDescriptor;
use crate::grant::Grants;
use scriptgate_core::{creator_rule_key, owner_rule_key, Identity};
use std::fmt;
use tracing::{debug, warn};

/// A token that could not be understood
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// Configuration key the token came from
    pub key: String,
    /// Full raw value of that key
    pub value: String,
    /// The offending token, trimmed
    pub token: String,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "error parsing line {} = {}: unrecognized entry '{}'",
            self.key, self.value, self.token
        )
    }
}

/// Result of compiling one operation's rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledPolicy {
    pub descriptor: PolicyDescriptor,
    pub warnings: Vec<ConfigWarning>,
}

/// Compile the override rules of `operation`
///
/// Deterministic: the same inputs always produce an equal descriptor, which
/// is what makes racing compilations of one operation harmless.
pub fn compile(operation: &str, owner_rule: &str, creator_rule: &str) -> CompiledPolicy {
    let mut warnings = Vec::new();

    if owner_rule.trim().is_empty() && creator_rule.trim().is_empty() {
        return CompiledPolicy {
            descriptor: PolicyDescriptor::by_threat_level(),
            warnings,
        };
    }

    let mut descriptor = PolicyDescriptor::disabled();

    match parse_bool_literal(owner_rule) {
        Some(true) => {
            debug!(operation = %operation, "Operation allowed for everyone");
            return CompiledPolicy {
                descriptor: PolicyDescriptor::allow_all(),
                warnings,
            };
        }
        Some(false) => {}
        None => {
            let key = owner_rule_key(operation);
            for token in tokens(owner_rule) {
                let keyword = token.to_ascii_uppercase();
                if let Some(role) = Grants::from_keyword(&keyword) {
                    descriptor.add_role(role);
                    continue;
                }
                match Identity::parse(&keyword) {
                    Ok(owner) if owner.is_nil() => {
                        debug!(key = %key, "Ignoring nil owner identity");
                    }
                    Ok(owner) => descriptor.add_owner(owner),
                    Err(_) => warnings.push(ConfigWarning {
                        key: key.clone(),
                        value: owner_rule.to_string(),
                        token: token.to_string(),
                    }),
                }
            }
        }
    }

    if !creator_rule.trim().is_empty() {
        let key = creator_rule_key(operation);
        for token in tokens(creator_rule) {
            match Identity::parse(token) {
                Ok(creator) if creator.is_nil() => {
                    debug!(key = %key, "Ignoring nil creator identity");
                }
                Ok(creator) => descriptor.add_creator(creator),
                Err(_) => warnings.push(ConfigWarning {
                    key: key.clone(),
                    value: creator_rule.to_string(),
                    token: token.to_string(),
                }),
            }
        }
    }

    for warning in &warnings {
        warn!(
            operation = %operation,
            key = %warning.key,
            token = %warning.token,
            "{warning}"
        );
    }

    if descriptor.is_disabled() {
        debug!(operation = %operation, "Operation disabled by configuration");
    }

    CompiledPolicy {
        descriptor,
        warnings,
    }
}

/// Strict `true`/`false`, ignoring case and surrounding whitespace
fn parse_bool_literal(value: &str) -> Option<bool> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// Non-empty trimmed entries of a comma-separated list
fn tokens(rule: &str) -> impl Iterator<Item = &str> {
    rule.split(',').map(str::trim).filter(|t| !t.is_empty())
}
