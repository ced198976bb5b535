//! Configuration loader for scriptgate
//!
//! Region configuration arrives as a JSON document of named sections, each a
//! flat object of settings:
//!
//! ```json
//! {
//!   "OSSL": {
//!     "AllowOSFunctions": true,
//!     "OSFunctionThreatLevel": "Low",
//!     "Allow_osTeleportAgent": "ESTATE_OWNER, GRID_GOD"
//!   }
//! }
//! ```
//!
//! The loader extracts one section into a [`MapConfigSource`]. When the
//! primary section is missing it falls back to a secondary one, so a region
//! can keep its overrides next to the script engine settings.

use crate::source::MapConfigSource;
use scriptgate_core::{
    constants::{FALLBACK_CONFIG_SECTION, PRIMARY_CONFIG_SECTION},
    Error, Result,
};
use serde_json::{Map, Value};
use std::path::Path;
use tracing::{debug, warn};

/// Loads one section of a JSON configuration document
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Section holding the authorization settings
    section: String,
    /// Section consulted when `section` is absent
    fallback_section: Option<String>,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a loader reading the `OSSL` section with `XEngine` as fallback
    pub fn new() -> Self {
        Self {
            section: PRIMARY_CONFIG_SECTION.to_string(),
            fallback_section: Some(FALLBACK_CONFIG_SECTION.to_string()),
        }
    }

    /// Set the primary section name
    pub fn section(mut self, name: impl Into<String>) -> Self {
        self.section = name.into();
        self
    }

    /// Set the fallback section name
    pub fn fallback_section(mut self, name: impl Into<String>) -> Self {
        self.fallback_section = Some(name.into());
        self
    }

    /// Disable the fallback section
    pub fn without_fallback(mut self) -> Self {
        self.fallback_section = None;
        self
    }

    /// Load the configuration file at `path`
    pub fn load(&self, path: impl AsRef<Path>) -> Result<MapConfigSource> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::file_system(path, "read", e))?;
        debug!(path = %path.display(), "Loading configuration file");
        self.load_str(&text)
    }

    /// Load configuration from a JSON string
    pub fn load_str(&self, text: &str) -> Result<MapConfigSource> {
        let document: Value = serde_json::from_str(text)?;
        let Value::Object(sections) = document else {
            return Err(Error::configuration(
                "configuration document must be a JSON object of sections",
            ));
        };

        match self.select_section(&sections)? {
            Some((name, settings)) => {
                debug!(section = %name, entries = settings.len(), "Using configuration section");
                flatten_section(name, settings)
            }
            None => {
                warn!(
                    section = %self.section,
                    fallback = ?self.fallback_section,
                    "No configuration section found, using defaults"
                );
                Ok(MapConfigSource::new())
            }
        }
    }

    fn select_section<'a>(
        &'a self,
        sections: &'a Map<String, Value>,
    ) -> Result<Option<(&'a str, &'a Map<String, Value>)>> {
        let candidates = std::iter::once(self.section.as_str())
            .chain(self.fallback_section.as_deref());

        for name in candidates {
            match sections.get(name) {
                Some(Value::Object(settings)) => return Ok(Some((name, settings))),
                Some(_) => {
                    return Err(Error::configuration(format!(
                        "section '{name}' must be a JSON object"
                    )))
                }
                None => continue,
            }
        }
        Ok(None)
    }
}

fn flatten_section(name: &str, settings: &Map<String, Value>) -> Result<MapConfigSource> {
    let mut source = MapConfigSource::new();
    for (key, value) in settings {
        let raw = match value {
            Value::String(s) => s.clone(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            Value::Null => String::new(),
            Value::Array(_) | Value::Object(_) => {
                return Err(Error::configuration(format!(
                    "setting '{key}' in section '{name}' must be a scalar value"
                )))
            }
        };
        source.insert(key.clone(), raw);
    }
    Ok(source)
}
