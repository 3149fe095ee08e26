//! Wire shape of a template document

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A template as it appears on the wire, with `Resources` still raw
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateDocument {
    #[serde(
        rename = "AWSTemplateFormatVersion",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub format_version: Option<String>,

    #[serde(rename = "Transform", default, skip_serializing_if = "Option::is_none")]
    pub transform: Option<Value>,

    #[serde(rename = "Description", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "Metadata", default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,

    #[serde(rename = "Parameters", default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Value>,

    #[serde(rename = "Mappings", default, skip_serializing_if = "Option::is_none")]
    pub mappings: Option<Value>,

    #[serde(rename = "Conditions", default, skip_serializing_if = "Option::is_none")]
    pub conditions: Option<Value>,

    #[serde(rename = "Resources", default)]
    pub resources: Map<String, Value>,

    #[serde(rename = "Outputs", default, skip_serializing_if = "Option::is_none")]
    pub outputs: Option<Value>,

    /// Top-level sections with no dedicated field (`Rules`, `Globals`, ...)
    #[serde(flatten)]
    pub sections: Map<String, Value>,
}
