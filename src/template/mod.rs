//! Template container
//!
//! A [`Template`] holds the `Resources` mapping plus the other top-level
//! sections, which are opaque to this crate and passed through unchanged.
//!
//! # Module Structure
//!
//! - [`decode`] - raw document to template, via a [`KindRegistry`](crate::KindRegistry)
//! - [`document`] - the wire shape, with `Resources` still raw
//! - `query` - typed lookups over the resources
//!
//! # Example
//!
//! ```ignore
//! use stackform::catalog::sqs::Queue;
//! use stackform::Template;
//!
//! let template = Template::from_json(input)?;
//! for (name, queue) in template.resources_of::<Queue>() {
//!     println!("{name}: {:?}", queue.queue_name);
//! }
//! let yaml = template.to_yaml()?;
//! ```

pub mod decode;
pub mod document;
mod query;

use crate::error::{Error, Result};
use crate::format::Format;
use crate::resource::Resource;
use decode::Decoder;
use document::TemplateDocument;
use indexmap::IndexMap;
use serde_json::{Map, Value};

/// An infrastructure template
#[derive(Debug, Clone, Default)]
pub struct Template {
    pub format_version: Option<String>,
    pub description: Option<String>,
    pub transform: Option<Value>,
    pub metadata: Option<Value>,
    pub parameters: Option<Value>,
    pub mappings: Option<Value>,
    pub conditions: Option<Value>,
    pub outputs: Option<Value>,
    /// Top-level sections with no dedicated field
    pub sections: Map<String, Value>,
    resources: IndexMap<String, Resource>,
}

impl Template {
    pub const FORMAT_VERSION: &'static str = "2010-09-09";

    /// Empty template with the current format version
    pub fn new() -> Self {
        Self {
            format_version: Some(Self::FORMAT_VERSION.to_string()),
            ..Self::default()
        }
    }

    /// Decode JSON with the default registry, keeping bad entries generic
    pub fn from_json(input: &str) -> Result<Self> {
        Self::from_slice(input.as_bytes(), Format::Json)
    }

    /// Decode YAML with the default registry, keeping bad entries generic
    pub fn from_yaml(input: &str) -> Result<Self> {
        Self::from_slice(input.as_bytes(), Format::Yaml)
    }

    pub fn from_slice(input: &[u8], format: Format) -> Result<Self> {
        Decoder::default()
            .decode(input, format)
            .map(|decoded| decoded.template)
    }

    // =========================================================================
    // Resources
    // =========================================================================

    /// Add or replace a resource, returning the one it replaced
    pub fn add_resource(
        &mut self,
        logical_id: impl Into<String>,
        resource: Resource,
    ) -> Option<Resource> {
        self.resources.insert(logical_id.into(), resource)
    }

    /// Remove a resource; the others keep their order
    pub fn remove_resource(&mut self, logical_id: &str) -> Option<Resource> {
        self.resources.shift_remove(logical_id)
    }

    pub fn get_resource(&self, logical_id: &str) -> Option<&Resource> {
        self.resources.get(logical_id)
    }

    pub fn get_resource_mut(&mut self, logical_id: &str) -> Option<&mut Resource> {
        self.resources.get_mut(logical_id)
    }

    pub fn contains_resource(&self, logical_id: &str) -> bool {
        self.resources.contains_key(logical_id)
    }

    /// Resources in document order
    pub fn resources(&self) -> impl Iterator<Item = (&str, &Resource)> {
        self.resources
            .iter()
            .map(|(logical_id, resource)| (logical_id.as_str(), resource))
    }

    pub fn resource_count(&self) -> usize {
        self.resources.len()
    }

    // =========================================================================
    // Encoding
    // =========================================================================

    /// Re-wrap every resource into its envelope
    pub fn to_document(&self) -> Result<TemplateDocument> {
        let mut resources = Map::with_capacity(self.resources.len());
        for (logical_id, resource) in &self.resources {
            let envelope = resource.to_envelope().map_err(|source| Error::Encode {
                logical_id: logical_id.clone(),
                kind: resource.kind().to_string(),
                source,
            })?;
            resources.insert(logical_id.clone(), envelope);
        }

        Ok(TemplateDocument {
            format_version: self.format_version.clone(),
            transform: self.transform.clone(),
            description: self.description.clone(),
            metadata: self.metadata.clone(),
            parameters: self.parameters.clone(),
            mappings: self.mappings.clone(),
            conditions: self.conditions.clone(),
            resources,
            outputs: self.outputs.clone(),
            sections: self.sections.clone(),
        })
    }

    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self.to_document()?)?)
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_document()?)?)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(&self.to_document()?)?)
    }

    pub fn encode(&self, format: Format) -> Result<String> {
        match format {
            Format::Json => self.to_json(),
            Format::Yaml => self.to_yaml(),
        }
    }
}
