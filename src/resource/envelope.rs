//! Resource envelope
//!
//! Every entry under `Resources` is wrapped the same way:
//!
//! ```json
//! { "Type": "AWS::S3::Bucket", "Properties": { ... }, "DeletionPolicy": "Retain" }
//! ```
//!
//! `DeletionPolicy` is left out when it is `Delete`. Any other top-level key
//! (`DependsOn`, `Condition`, ...) is an envelope attribute and is carried
//! through untouched.

use crate::error::{Error, Result};
use crate::policy::DeletionPolicy;
use serde_json::{Map, Value};

pub const TYPE: &str = "Type";
pub const PROPERTIES: &str = "Properties";
pub const DELETION_POLICY: &str = "DeletionPolicy";

/// Keys owned by the envelope itself
pub(crate) fn is_core_key(key: &str) -> bool {
    key == TYPE || key == PROPERTIES || key == DELETION_POLICY
}

/// Borrowed view of a raw envelope
#[derive(Debug)]
pub(crate) struct Parts<'a> {
    pub kind: &'a str,
    pub properties: Option<&'a Value>,
    pub deletion_policy: Option<&'a Value>,
    pub attributes: Map<String, Value>,
}

/// Check that a raw entry is an object with a string `Type`
pub(crate) fn as_envelope<'a>(logical_id: &str, raw: &'a Value) -> Result<&'a Map<String, Value>> {
    let Some(map) = raw.as_object() else {
        return Err(Error::malformed(logical_id, "entry is not an object"));
    };

    match map.get(TYPE) {
        Some(Value::String(_)) => Ok(map),
        Some(_) => Err(Error::malformed(logical_id, "Type is not a string")),
        None => Err(Error::malformed(logical_id, "Type is missing")),
    }
}

/// Split a raw entry into its envelope parts
pub(crate) fn split<'a>(logical_id: &str, raw: &'a Value) -> Result<Parts<'a>> {
    let map = as_envelope(logical_id, raw)?;
    let kind = map.get(TYPE).and_then(Value::as_str).unwrap_or_default();

    let attributes = map
        .iter()
        .filter(|(key, _)| !is_core_key(key))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    Ok(Parts {
        kind,
        properties: map.get(PROPERTIES),
        deletion_policy: map.get(DELETION_POLICY),
        attributes,
    })
}

/// Build an envelope: the three core keys first, then attributes in order
pub(crate) fn assemble(
    kind: &str,
    properties: Value,
    deletion_policy: DeletionPolicy,
    attributes: &Map<String, Value>,
) -> Map<String, Value> {
    let mut envelope = Map::with_capacity(3 + attributes.len());
    envelope.insert(TYPE.to_string(), Value::String(kind.to_string()));
    envelope.insert(PROPERTIES.to_string(), properties);

    if !deletion_policy.is_default() {
        envelope.insert(
            DELETION_POLICY.to_string(),
            Value::String(deletion_policy.as_str().to_string()),
        );
    }

    for (key, value) in attributes {
        envelope.insert(key.clone(), value.clone());
    }

    envelope
}

/// Properties used when an envelope has none
pub(crate) fn empty_properties() -> Value {
    Value::Object(Map::new())
}
