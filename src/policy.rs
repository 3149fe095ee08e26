//! Deletion policy carried beside a resource's properties.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What the provider does with a resource once it leaves the template.
///
/// `Delete` is the default and is never written to the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DeletionPolicy {
    #[default]
    Delete,
    Retain,
    RetainExceptOnCreate,
    Snapshot,
}

impl DeletionPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Delete => "Delete",
            Self::Retain => "Retain",
            Self::RetainExceptOnCreate => "RetainExceptOnCreate",
            Self::Snapshot => "Snapshot",
        }
    }

    /// True when the policy would be omitted from an encoded envelope.
    pub fn is_default(&self) -> bool {
        *self == Self::Delete
    }
}

impl FromStr for DeletionPolicy {
    type Err = Error;

    // Case-sensitive on purpose: the provider rejects "retain".
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Delete" => Ok(Self::Delete),
            "Retain" => Ok(Self::Retain),
            "RetainExceptOnCreate" => Ok(Self::RetainExceptOnCreate),
            "Snapshot" => Ok(Self::Snapshot),
            other => Err(Error::InvalidDeletionPolicy(other.to_string())),
        }
    }
}

impl fmt::Display for DeletionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
