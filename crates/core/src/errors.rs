use std::path::PathBuf;

/// Result type alias for scriptgate operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for scriptgate infrastructure
///
/// Authorization verdicts are not errors of this kind; a denied call is a
/// regular value produced by the policy crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration errors
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// File system operations
    #[error("file system {operation} operation failed for '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Identity literal that is not a UUID
    #[error("invalid identity '{value}': {message}")]
    InvalidIdentity { value: String, message: String },

    /// Threat level name outside the known scale
    #[error("unknown threat level '{value}'")]
    UnknownThreatLevel { value: String },
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::Json {
            message: error.to_string(),
            source: error,
        }
    }
}

// Helper methods for creating errors with context
impl Error {
    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// Create a file system error with context
    #[must_use]
    pub fn file_system(
        path: impl Into<PathBuf>,
        operation: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        Error::FileSystem {
            path: path.into(),
            operation: operation.into(),
            source,
        }
    }

    /// Create an invalid identity error
    #[must_use]
    pub fn invalid_identity(value: impl Into<String>, message: impl Into<String>) -> Self {
        Error::InvalidIdentity {
            value: value.into(),
            message: message.into(),
        }
    }

    /// Create an unknown threat level error
    #[must_use]
    pub fn unknown_threat_level(value: impl Into<String>) -> Self {
        Error::UnknownThreatLevel {
            value: value.into(),
        }
    }
}
