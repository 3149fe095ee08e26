//! Kind Registry - map kind strings to their codecs
//!
//! A registry is an ordinary value: build one, register kinds, hand it to a
//! [`Decoder`](crate::Decoder). The shipped catalogue is available through
//! [`default_registry`], which is built once on first access and never
//! changes afterwards. Private or newer kinds go into a registry of your own:
//!
//! ```ignore
//! let registry = KindRegistry::builtin().with::<MyCustomKind>();
//! let decoded = Decoder::new(&registry).decode_json(bytes)?;
//! ```

use super::{DynKind, ResourceKind};
use indexmap::IndexMap;
use serde_json::Value;
use std::fmt;
use std::sync::OnceLock;

/// Build a kind's value from its `Properties`
pub type DecodeFn = fn(Value) -> Result<Box<dyn DynKind>, serde_json::Error>;

/// Turn a kind's value back into its `Properties`
pub type EncodeFn = fn(&dyn DynKind) -> Result<Value, serde_json::Error>;

/// Decode/encode pair for one kind
#[derive(Clone, Copy)]
pub struct KindCodec {
    kind: &'static str,
    decode: DecodeFn,
    encode: EncodeFn,
}

impl KindCodec {
    /// Codec backed by `T`'s serde implementation
    pub fn of<T: ResourceKind>() -> Self {
        Self {
            kind: T::KIND,
            decode: decode_as::<T>,
            encode: encode_as::<T>,
        }
    }

    /// Codec with hand-written functions
    pub fn new(kind: &'static str, decode: DecodeFn, encode: EncodeFn) -> Self {
        Self {
            kind,
            decode,
            encode,
        }
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn decode(&self, properties: Value) -> Result<Box<dyn DynKind>, serde_json::Error> {
        (self.decode)(properties)
    }

    pub fn encode(&self, value: &dyn DynKind) -> Result<Value, serde_json::Error> {
        (self.encode)(value)
    }
}

impl fmt::Debug for KindCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KindCodec").field("kind", &self.kind).finish()
    }
}

fn decode_as<T: ResourceKind>(properties: Value) -> Result<Box<dyn DynKind>, serde_json::Error> {
    let value: T = serde_json::from_value(properties)?;
    Ok(Box::new(value))
}

fn encode_as<T: ResourceKind>(value: &dyn DynKind) -> Result<Value, serde_json::Error> {
    let Some(value) = value.as_any().downcast_ref::<T>() else {
        return Err(serde::ser::Error::custom(format!(
            "expected a {} value, got {}",
            T::KIND,
            value.kind()
        )));
    };
    serde_json::to_value(value)
}

/// Kind string to codec lookup
#[derive(Clone, Default)]
pub struct KindRegistry {
    kinds: IndexMap<&'static str, KindCodec>,
}

impl fmt::Debug for KindRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KindRegistry")
            .field("kinds", &self.kinds().collect::<Vec<_>>())
            .finish()
    }
}

impl KindRegistry {
    /// Empty registry: every kind decodes as generic
    pub fn new() -> Self {
        Self {
            kinds: IndexMap::new(),
        }
    }

    /// Registry holding the shipped catalogue
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        crate::catalog::register_all(&mut registry);
        registry
    }

    /// Register `T`, replacing any codec already held for its kind
    pub fn register<T: ResourceKind>(&mut self) -> Option<KindCodec> {
        self.register_codec(KindCodec::of::<T>())
    }

    pub fn register_codec(&mut self, codec: KindCodec) -> Option<KindCodec> {
        let previous = self.kinds.insert(codec.kind, codec);
        if previous.is_some() {
            tracing::debug!("Replaced codec for kind {}", codec.kind);
        }
        previous
    }

    /// Builder form of [`register`](Self::register)
    pub fn with<T: ResourceKind>(mut self) -> Self {
        self.register::<T>();
        self
    }

    /// Exact, case-sensitive lookup
    pub fn get(&self, kind: &str) -> Option<&KindCodec> {
        self.kinds.get(kind)
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.kinds.contains_key(kind)
    }

    /// Registered kinds in registration order
    pub fn kinds(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.kinds.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

/// Global registry holding the shipped catalogue
static REGISTRY: OnceLock<KindRegistry> = OnceLock::new();

/// Get the default registry (built on first access)
pub fn default_registry() -> &'static KindRegistry {
    REGISTRY.get_or_init(|| {
        let registry = KindRegistry::builtin();
        tracing::debug!("Default registry built with {} kinds", registry.len());
        registry
    })
}
