//! Resource abstraction layer
//!
//! A resource stored in a template takes one of two shapes:
//!
//! - [`TypedResource`] - a strongly-typed record for a kind the
//!   [`KindRegistry`] knows about
//! - [`GenericResource`] - the raw envelope, kept verbatim for kinds the
//!   registry does not know (or, in tolerant decoding, could not build)
//!
//! Both encode to the same envelope, see [`envelope`].
//!
//! # Architecture
//!
//! - [`envelope`] - the `{Type, Properties, DeletionPolicy}` wire wrapper
//! - [`registry`] - kind string to decode/encode function pair
//!
//! # Example
//!
//! ```ignore
//! use stackform::catalog::s3::Bucket;
//! use stackform::{DeletionPolicy, Resource};
//!
//! let bucket = Resource::new(Bucket::default()).with_deletion_policy(DeletionPolicy::Retain);
//! assert_eq!(bucket.kind(), "AWS::S3::Bucket");
//! ```

pub mod envelope;
mod registry;

pub use registry::*;

use crate::error::Result;
use crate::policy::DeletionPolicy;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::any::Any;
use std::fmt;

/// A resource kind with a fixed schema.
///
/// Implementors are plain data: the struct's fields are the kind's
/// `Properties`, and `KIND` is the canonical `Type` string.
pub trait ResourceKind:
    Serialize + DeserializeOwned + Clone + fmt::Debug + Send + Sync + 'static
{
    const KIND: &'static str;
}

/// Object-safe view of a [`ResourceKind`] value
pub trait DynKind: fmt::Debug + Send + Sync + 'static {
    fn kind(&self) -> &'static str;
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
    fn clone_box(&self) -> Box<dyn DynKind>;
}

impl<T: ResourceKind> DynKind for T {
    fn kind(&self) -> &'static str {
        T::KIND
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn clone_box(&self) -> Box<dyn DynKind> {
        Box::new(self.clone())
    }
}

impl Clone for Box<dyn DynKind> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// A resource of a registered kind
#[derive(Debug, Clone)]
pub struct TypedResource {
    value: Box<dyn DynKind>,
    codec: KindCodec,
    deletion_policy: DeletionPolicy,
    attributes: Map<String, Value>,
}

impl TypedResource {
    pub fn new<T: ResourceKind>(value: T) -> Self {
        Self {
            value: Box::new(value),
            codec: KindCodec::of::<T>(),
            deletion_policy: DeletionPolicy::default(),
            attributes: Map::new(),
        }
    }

    pub(crate) fn from_parts(
        value: Box<dyn DynKind>,
        codec: KindCodec,
        deletion_policy: DeletionPolicy,
        attributes: Map<String, Value>,
    ) -> Self {
        Self {
            value,
            codec,
            deletion_policy,
            attributes,
        }
    }

    /// Canonical kind string of the wrapped value
    pub fn kind(&self) -> &'static str {
        self.value.kind()
    }

    pub fn deletion_policy(&self) -> DeletionPolicy {
        self.deletion_policy
    }

    pub fn set_deletion_policy(&mut self, policy: DeletionPolicy) {
        self.deletion_policy = policy;
    }

    /// Envelope attributes other than `Type`, `Properties` and `DeletionPolicy`
    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }

    /// Set an envelope attribute such as `DependsOn`.
    ///
    /// Returns false, and changes nothing, for the three core envelope keys.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: Value) -> bool {
        let name = name.into();
        if envelope::is_core_key(&name) {
            return false;
        }
        self.attributes.insert(name, value);
        true
    }

    pub fn value(&self) -> &dyn DynKind {
        self.value.as_ref()
    }

    pub fn downcast_ref<T: ResourceKind>(&self) -> Option<&T> {
        self.value.as_any().downcast_ref::<T>()
    }

    pub fn downcast_mut<T: ResourceKind>(&mut self) -> Option<&mut T> {
        self.value.as_any_mut().downcast_mut::<T>()
    }

    /// Encode the value's fields with its kind's encoder
    pub fn properties(&self) -> Result<Value, serde_json::Error> {
        self.codec.encode(self.value.as_ref())
    }

    pub fn to_envelope(&self) -> Result<Map<String, Value>, serde_json::Error> {
        let properties = self.properties()?;
        Ok(envelope::assemble(
            self.kind(),
            properties,
            self.deletion_policy,
            &self.attributes,
        ))
    }
}

/// A resource kept as its raw envelope
///
/// The envelope always holds a string `Type`.
#[derive(Debug, Clone, PartialEq)]
pub struct GenericResource {
    raw: Map<String, Value>,
}

impl GenericResource {
    pub fn new(kind: impl Into<String>, properties: Value) -> Self {
        let mut raw = Map::new();
        raw.insert(envelope::TYPE.to_string(), Value::String(kind.into()));
        raw.insert(envelope::PROPERTIES.to_string(), properties);
        Self { raw }
    }

    /// Wrap a raw envelope; `None` unless it has a string `Type`
    pub fn from_map(raw: Map<String, Value>) -> Option<Self> {
        match raw.get(envelope::TYPE) {
            Some(Value::String(_)) => Some(Self { raw }),
            _ => None,
        }
    }

    pub fn kind(&self) -> &str {
        self.raw
            .get(envelope::TYPE)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    pub fn properties(&self) -> Option<&Value> {
        self.raw.get(envelope::PROPERTIES)
    }

    pub fn properties_mut(&mut self) -> Option<&mut Value> {
        self.raw.get_mut(envelope::PROPERTIES)
    }

    pub fn deletion_policy(&self) -> Result<DeletionPolicy> {
        match self.raw.get(envelope::DELETION_POLICY) {
            None => Ok(DeletionPolicy::default()),
            Some(Value::String(s)) => s.parse(),
            Some(other) => Err(crate::Error::InvalidDeletionPolicy(other.to_string())),
        }
    }

    pub fn set_deletion_policy(&mut self, policy: DeletionPolicy) {
        if policy.is_default() {
            self.raw.shift_remove(envelope::DELETION_POLICY);
        } else {
            self.raw.insert(
                envelope::DELETION_POLICY.to_string(),
                Value::String(policy.as_str().to_string()),
            );
        }
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.raw
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.raw
    }
}

/// A resource entry: typed when its kind is registered, raw otherwise
#[derive(Debug, Clone)]
pub enum Resource {
    Typed(TypedResource),
    Generic(GenericResource),
}

impl Resource {
    /// Wrap a typed value with the default deletion policy
    pub fn new<T: ResourceKind>(value: T) -> Self {
        Self::Typed(TypedResource::new(value))
    }

    /// Build a raw resource for a kind with no Rust type
    pub fn generic(kind: impl Into<String>, properties: Value) -> Self {
        Self::Generic(GenericResource::new(kind, properties))
    }

    pub fn with_deletion_policy(mut self, policy: DeletionPolicy) -> Self {
        self.set_deletion_policy(policy);
        self
    }

    pub fn kind(&self) -> &str {
        match self {
            Self::Typed(typed) => typed.kind(),
            Self::Generic(generic) => generic.kind(),
        }
    }

    pub fn is_typed(&self) -> bool {
        matches!(self, Self::Typed(_))
    }

    pub fn as_typed(&self) -> Option<&TypedResource> {
        match self {
            Self::Typed(typed) => Some(typed),
            Self::Generic(_) => None,
        }
    }

    pub fn as_generic(&self) -> Option<&GenericResource> {
        match self {
            Self::Generic(generic) => Some(generic),
            Self::Typed(_) => None,
        }
    }

    /// Fails only for a generic envelope holding an unknown policy string
    pub fn deletion_policy(&self) -> Result<DeletionPolicy> {
        match self {
            Self::Typed(typed) => Ok(typed.deletion_policy()),
            Self::Generic(generic) => generic.deletion_policy(),
        }
    }

    pub fn set_deletion_policy(&mut self, policy: DeletionPolicy) {
        match self {
            Self::Typed(typed) => typed.set_deletion_policy(policy),
            Self::Generic(generic) => generic.set_deletion_policy(policy),
        }
    }

    /// Encode into the wire envelope
    pub fn to_envelope(&self) -> Result<Value, serde_json::Error> {
        match self {
            Self::Typed(typed) => typed.to_envelope().map(Value::Object),
            Self::Generic(generic) => Ok(Value::Object(generic.as_map().clone())),
        }
    }

    /// Interpret this resource as kind `T`.
    ///
    /// `Ok(None)` when the resource is of another kind. A generic resource
    /// whose `Type` matches is decoded on demand; a decode failure is
    /// returned as the error.
    pub fn resolve<T: ResourceKind>(&self) -> Result<Option<T>, serde_json::Error> {
        if self.kind() != T::KIND {
            return Ok(None);
        }

        match self {
            Self::Typed(typed) => match typed.downcast_ref::<T>() {
                Some(value) => Ok(Some(value.clone())),
                // Same kind string, different Rust type (a custom override)
                None => serde_json::from_value(typed.properties()?).map(Some),
            },
            Self::Generic(generic) => {
                let properties = generic
                    .properties()
                    .cloned()
                    .unwrap_or_else(envelope::empty_properties);
                serde_json::from_value(properties).map(Some)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "PascalCase", deny_unknown_fields)]
    struct Widget {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        size: Option<u32>,
    }

    impl ResourceKind for Widget {
        const KIND: &'static str = "Example::Widget::Thing";
    }

    #[test]
    fn test_typed_envelope_has_three_keys_at_most() {
        let resource = Resource::new(Widget { size: Some(3) });
        assert_eq!(
            resource.to_envelope().unwrap(),
            json!({"Type": "Example::Widget::Thing", "Properties": {"Size": 3}})
        );

        let resource = resource.with_deletion_policy(DeletionPolicy::Retain);
        assert_eq!(
            resource.to_envelope().unwrap(),
            json!({
                "Type": "Example::Widget::Thing",
                "Properties": {"Size": 3},
                "DeletionPolicy": "Retain"
            })
        );
    }

    #[test]
    fn test_generic_policy_roundtrip() {
        let mut resource = Resource::generic("Custom::Thing", json!({}));
        assert_eq!(resource.deletion_policy().unwrap(), DeletionPolicy::Delete);

        resource.set_deletion_policy(DeletionPolicy::Snapshot);
        assert_eq!(resource.to_envelope().unwrap()["DeletionPolicy"], "Snapshot");

        resource.set_deletion_policy(DeletionPolicy::Delete);
        assert!(resource.to_envelope().unwrap().get("DeletionPolicy").is_none());
    }

    #[test]
    fn test_clearing_generic_policy_keeps_attribute_order() {
        let raw = json!({
            "Type": "Custom::Thing",
            "Properties": {},
            "DeletionPolicy": "Retain",
            "DependsOn": ["Queue"],
            "Condition": "IsProd"
        });
        let mut generic = GenericResource::from_map(raw.as_object().unwrap().clone()).unwrap();
        generic.set_deletion_policy(DeletionPolicy::Delete);

        let keys: Vec<&str> = generic.as_map().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Type", "Properties", "DependsOn", "Condition"]);
    }

    #[test]
    fn test_generic_rejects_bad_policy_string() {
        let raw = json!({"Type": "Custom::Thing", "DeletionPolicy": "retain"});
        let generic = GenericResource::from_map(raw.as_object().unwrap().clone()).unwrap();
        assert!(generic.deletion_policy().is_err());
    }

    #[test]
    fn test_from_map_requires_string_type() {
        let raw = json!({"Properties": {}});
        assert!(GenericResource::from_map(raw.as_object().unwrap().clone()).is_none());
    }

    #[test]
    fn test_resolve_generic_on_demand() {
        let resource = Resource::generic("Example::Widget::Thing", json!({"Size": 7}));
        let widget = resource.resolve::<Widget>().unwrap();
        assert_eq!(widget, Some(Widget { size: Some(7) }));
    }

    #[test]
    fn test_resolve_other_kind_is_none() {
        let resource = Resource::generic("Other::Kind", json!({"Size": 7}));
        assert_eq!(resource.resolve::<Widget>().unwrap(), None);
    }

    #[test]
    fn test_resolve_generic_without_properties_is_zero_value() {
        let raw = json!({"Type": "Example::Widget::Thing"});
        let resource =
            Resource::Generic(GenericResource::from_map(raw.as_object().unwrap().clone()).unwrap());
        assert_eq!(resource.resolve::<Widget>().unwrap(), Some(Widget::default()));
    }

    #[test]
    fn test_resolve_mismatched_shape_is_error() {
        let resource = Resource::generic("Example::Widget::Thing", json!({"Size": "big"}));
        assert!(resource.resolve::<Widget>().is_err());
    }

    #[test]
    fn test_set_attribute_refuses_core_keys() {
        let mut typed = TypedResource::new(Widget::default());
        assert!(!typed.set_attribute("Type", json!("Other::Kind")));
        assert!(typed.set_attribute("DependsOn", json!("Queue")));
        assert_eq!(typed.kind(), "Example::Widget::Thing");
        assert_eq!(typed.to_envelope().unwrap()["DependsOn"], json!("Queue"));
    }

    #[test]
    fn test_downcast_mut_edits_in_place() {
        let mut typed = TypedResource::new(Widget::default());
        typed.downcast_mut::<Widget>().unwrap().size = Some(9);
        assert_eq!(typed.properties().unwrap(), json!({"Size": 9}));
    }
}
