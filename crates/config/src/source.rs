//! Key/value configuration sources

use std::collections::HashMap;
use tracing::warn;

/// Read-only access to the flat key/value settings of one configuration section
///
/// Implementations must be cheap to query; the policy engine calls
/// [`get_string`](Self::get_string) the first time each operation is checked.
pub trait ConfigSource: Send + Sync {
    /// Raw value stored under `key`, if any
    fn get_string(&self, key: &str) -> Option<String>;

    /// Boolean stored under `key`, or `default` when absent, blank or unrecognized
    fn get_bool(&self, key: &str, default: bool) -> bool {
        let Some(raw) = self.get_string(key) else {
            return default;
        };
        if raw.trim().is_empty() {
            return default;
        }
        match parse_bool(&raw) {
            Some(value) => value,
            None => {
                warn!(key = %key, value = %raw, default, "Unrecognized boolean, using default");
                default
            }
        }
    }
}

/// Parse a lenient configuration boolean
///
/// Accepts `true/false`, `yes/no`, `on/off` and `1/0`, ignoring case and
/// surrounding whitespace.
#[must_use]
pub fn parse_bool(value: &str) -> Option<bool> {
    let value = value.trim();
    const TRUTHY: [&str; 4] = ["true", "yes", "on", "1"];
    const FALSY: [&str; 4] = ["false", "no", "off", "0"];

    if TRUTHY.iter().any(|t| value.eq_ignore_ascii_case(t)) {
        Some(true)
    } else if FALSY.iter().any(|f| value.eq_ignore_ascii_case(f)) {
        Some(false)
    } else {
        None
    }
}

/// In-memory configuration source
#[derive(Debug, Clone, Default)]
pub struct MapConfigSource {
    values: HashMap<String, String>,
}

impl MapConfigSource {
    /// Create an empty source
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or replace a value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl ConfigSource for MapConfigSource {
    fn get_string(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

impl<K, V> FromIterator<(K, V)> for MapConfigSource
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool_variants() {
        assert_eq!(parse_bool("true"), Some(true));
        assert_eq!(parse_bool(" TRUE "), Some(true));
        assert_eq!(parse_bool("Yes"), Some(true));
        assert_eq!(parse_bool("1"), Some(true));
        assert_eq!(parse_bool("off"), Some(false));
        assert_eq!(parse_bool("False"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
        assert_eq!(parse_bool(""), None);
    }

    #[test]
    fn test_get_bool_defaults() {
        let source = MapConfigSource::new()
            .with("Enabled", "false")
            .with("Blank", "  ")
            .with("Garbage", "sometimes");

        assert!(!source.get_bool("Enabled", true));
        assert!(source.get_bool("Blank", true));
        assert!(source.get_bool("Garbage", true));
        assert!(!source.get_bool("Missing", false));
    }

    #[test]
    fn test_from_iterator() {
        let source: MapConfigSource = vec![("Allow_osKey2Name", "true"), ("Creators_osKey2Name", "")]
            .into_iter()
            .collect();
        assert_eq!(source.len(), 2);
        assert_eq!(source.get_string("Allow_osKey2Name").as_deref(), Some("true"));
        assert_eq!(source.get_string("Allow_osDie"), None);
    }
}
