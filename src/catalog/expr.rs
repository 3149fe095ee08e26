//! Property values that may be intrinsic functions

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A property value: either a literal or an intrinsic-function object such
/// as `{"Ref": "Bucket"}` or `{"Fn::GetAtt": ["Queue", "Arn"]}`.
///
/// Intrinsics are carried as-is; nothing here resolves them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Expr<T> {
    Literal(T),
    Intrinsic(Map<String, Value>),
}

impl<T> Expr<T> {
    /// `{"Ref": name}`
    pub fn reference(name: impl Into<String>) -> Self {
        let mut map = Map::new();
        map.insert("Ref".to_string(), Value::String(name.into()));
        Self::Intrinsic(map)
    }

    /// `{"Fn::GetAtt": [resource, attribute]}`
    pub fn get_att(resource: impl Into<String>, attribute: impl Into<String>) -> Self {
        let mut map = Map::new();
        map.insert(
            "Fn::GetAtt".to_string(),
            Value::Array(vec![
                Value::String(resource.into()),
                Value::String(attribute.into()),
            ]),
        );
        Self::Intrinsic(map)
    }

    pub fn as_literal(&self) -> Option<&T> {
        match self {
            Self::Literal(value) => Some(value),
            Self::Intrinsic(_) => None,
        }
    }

    /// Name of the intrinsic function, e.g. `Ref` or `Fn::Sub`
    pub fn function_name(&self) -> Option<&str> {
        match self {
            Self::Literal(_) => None,
            Self::Intrinsic(map) => map.keys().next().map(String::as_str),
        }
    }
}

impl<T: Default> Default for Expr<T> {
    fn default() -> Self {
        Self::Literal(T::default())
    }
}

impl<T> From<T> for Expr<T> {
    fn from(value: T) -> Self {
        Self::Literal(value)
    }
}

impl From<&str> for Expr<String> {
    fn from(value: &str) -> Self {
        Self::Literal(value.to_string())
    }
}
