//! Template decoding
//!
//! Turns a raw document into a [`Template`], resolving every `Resources`
//! entry against a [`KindRegistry`]:
//!
//! - registered kind -> typed resource
//! - unregistered kind -> generic resource, kept verbatim
//! - registered kind whose properties do not fit -> depends on [`DecodeMode`]
//!
//! A malformed entry (not an object, or no string `Type`) always fails the
//! whole decode.

use super::document::TemplateDocument;
use super::Template;
use crate::error::{Error, Result};
use crate::format::Format;
use crate::policy::DeletionPolicy;
use crate::resource::{
    default_registry, envelope, GenericResource, KindRegistry, Resource, TypedResource,
};
use serde_json::Value;

/// What to do when a registered kind fails to decode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodeMode {
    /// Fail the whole template
    Strict,
    /// Keep the entry as a generic resource and report it
    #[default]
    Tolerant,
}

/// A registered-kind entry that was kept generic in tolerant mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeIssue {
    pub logical_id: String,
    pub kind: String,
    pub reason: String,
}

/// Output of a decode
#[derive(Debug, Clone)]
pub struct Decoded {
    pub template: Template,
    /// Empty in strict mode
    pub issues: Vec<DecodeIssue>,
}

/// Template decoder bound to a registry
#[derive(Debug, Clone, Copy)]
pub struct Decoder<'r> {
    registry: &'r KindRegistry,
    mode: DecodeMode,
}

impl Default for Decoder<'static> {
    fn default() -> Self {
        Self::new(default_registry())
    }
}

impl<'r> Decoder<'r> {
    pub fn new(registry: &'r KindRegistry) -> Self {
        Self {
            registry,
            mode: DecodeMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: DecodeMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> DecodeMode {
        self.mode
    }

    pub fn registry(&self) -> &'r KindRegistry {
        self.registry
    }

    pub fn decode(&self, input: &[u8], format: Format) -> Result<Decoded> {
        match format {
            Format::Json => self.decode_json(input),
            Format::Yaml => self.decode_yaml(input),
        }
    }

    pub fn decode_json(&self, input: &[u8]) -> Result<Decoded> {
        let document: TemplateDocument = serde_json::from_slice(input)?;
        self.decode_document(document)
    }

    pub fn decode_yaml(&self, input: &[u8]) -> Result<Decoded> {
        let document: TemplateDocument = serde_yaml::from_slice(input)?;
        self.decode_document(document)
    }

    pub fn decode_value(&self, input: Value) -> Result<Decoded> {
        let document: TemplateDocument = serde_json::from_value(input)?;
        self.decode_document(document)
    }

    pub fn decode_document(&self, document: TemplateDocument) -> Result<Decoded> {
        let TemplateDocument {
            format_version,
            transform,
            description,
            metadata,
            parameters,
            mappings,
            conditions,
            resources,
            outputs,
            sections,
        } = document;

        let mut template = Template {
            format_version,
            description,
            transform,
            metadata,
            parameters,
            mappings,
            conditions,
            outputs,
            sections,
            ..Template::default()
        };
        let mut issues = Vec::new();

        for (logical_id, raw) in resources {
            let resource = match self.decode_resource(&logical_id, &raw) {
                Ok(resource) => resource,
                Err(Error::Decode { kind, source, .. }) if self.mode == DecodeMode::Tolerant => {
                    tracing::warn!(
                        "Keeping {} as generic, decode as {} failed: {}",
                        logical_id,
                        kind,
                        source
                    );
                    issues.push(DecodeIssue {
                        logical_id: logical_id.clone(),
                        kind,
                        reason: source.to_string(),
                    });
                    Resource::Generic(generic_from(&logical_id, raw)?)
                }
                Err(err) => return Err(err),
            };
            template.add_resource(logical_id, resource);
        }

        tracing::debug!(
            "Decoded template with {} resources ({} kept generic after errors)",
            template.resource_count(),
            issues.len()
        );

        Ok(Decoded { template, issues })
    }

    /// Decode one `Resources` entry.
    ///
    /// Structural failures are returned as [`Error::Decode`] whatever the mode.
    pub fn decode_resource(&self, logical_id: &str, raw: &Value) -> Result<Resource> {
        let parts = envelope::split(logical_id, raw)?;

        let Some(codec) = self.registry.get(parts.kind) else {
            tracing::debug!("{}: {} is not registered, keeping generic", logical_id, parts.kind);
            return generic_from(logical_id, raw.clone()).map(Resource::Generic);
        };

        let properties = parts
            .properties
            .cloned()
            .unwrap_or_else(envelope::empty_properties);
        let value = codec
            .decode(properties.clone())
            .map_err(|source| decode_error(logical_id, parts.kind, source))?;

        if value.kind() != parts.kind {
            let source = serde::de::Error::custom(format!(
                "codec for {} produced a {} value",
                parts.kind,
                value.kind()
            ));
            return Err(decode_error(logical_id, parts.kind, source));
        }

        // Typed only if encoding gives the same Properties back (explicit nulls do not)
        let encoded = codec
            .encode(value.as_ref())
            .map_err(|source| decode_error(logical_id, parts.kind, source))?;
        if encoded != properties {
            let source = serde::de::Error::custom(format!(
                "Properties do not survive re-encoding as {}",
                parts.kind
            ));
            return Err(decode_error(logical_id, parts.kind, source));
        }

        let deletion_policy = match parts.deletion_policy {
            None => DeletionPolicy::default(),
            Some(policy) => serde_json::from_value(policy.clone())
                .map_err(|source| decode_error(logical_id, parts.kind, source))?,
        };

        tracing::debug!("{}: decoded as {}", logical_id, parts.kind);

        Ok(Resource::Typed(TypedResource::from_parts(
            value,
            *codec,
            deletion_policy,
            parts.attributes,
        )))
    }
}

fn decode_error(logical_id: &str, kind: &str, source: serde_json::Error) -> Error {
    Error::Decode {
        logical_id: logical_id.to_string(),
        kind: kind.to_string(),
        source,
    }
}

fn generic_from(logical_id: &str, raw: Value) -> Result<GenericResource> {
    let Value::Object(map) = raw else {
        return Err(Error::malformed(logical_id, "entry is not an object"));
    };
    GenericResource::from_map(map).ok_or_else(|| Error::malformed(logical_id, "Type is missing"))
}
