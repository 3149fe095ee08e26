//! Error types for template decoding, encoding and lookup.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors produced by the template engine.
#[derive(Debug, Error)]
pub enum Error {
    /// A `Resources` entry is not an object, or has no string `Type`.
    #[error("resource '{logical_id}' is malformed: {reason}")]
    MalformedResource { logical_id: String, reason: String },

    /// A registered kind could not be built from the entry's properties.
    #[error("resource '{logical_id}' could not be decoded as {kind}: {source}")]
    Decode {
        logical_id: String,
        kind: String,
        #[source]
        source: serde_json::Error,
    },

    /// A typed resource could not be turned back into its properties.
    #[error("resource '{logical_id}' could not be encoded as {kind}: {source}")]
    Encode {
        logical_id: String,
        kind: String,
        #[source]
        source: serde_json::Error,
    },

    /// No resource with this logical id resolves to the requested kind.
    #[error("resource not found: '{name}' of kind {kind}")]
    NotFound { name: String, kind: String },

    /// `DeletionPolicy` holds a string outside the known set.
    #[error("invalid deletion policy: {0:?}")]
    InvalidDeletionPolicy(String),

    /// Document-level JSON failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Document-level YAML failure.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    pub(crate) fn malformed(logical_id: &str, reason: impl Into<String>) -> Self {
        Self::MalformedResource {
            logical_id: logical_id.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn not_found(name: &str, kind: &str) -> Self {
        Self::NotFound {
            name: name.to_string(),
            kind: kind.to_string(),
        }
    }

    /// True for a by-name lookup miss.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Logical id of the resource this error is about, if any.
    pub fn logical_id(&self) -> Option<&str> {
        match self {
            Self::MalformedResource { logical_id, .. }
            | Self::Decode { logical_id, .. }
            | Self::Encode { logical_id, .. } => Some(logical_id),
            Self::NotFound { name, .. } => Some(name),
            _ => None,
        }
    }
}
