//! Typed and generic resource model for infrastructure templates.
//!
//! A [`Template`] holds a `Resources` mapping of heterogeneous resources.
//! Each entry is decoded through a [`KindRegistry`] into either a typed
//! record ([`catalog`] ships a selection) or, for kinds the registry does
//! not know, a generic value kept verbatim. Encoding re-wraps every entry in
//! its `{Type, Properties, DeletionPolicy}` envelope, so a decode followed by
//! an encode gives back the same document.
//!
//! # Example
//!
//! ```ignore
//! use stackform::catalog::s3::Bucket;
//! use stackform::{DeletionPolicy, Resource, Template};
//!
//! let mut template = Template::from_yaml(input)?;
//! template.add_resource(
//!     "Archive",
//!     Resource::new(Bucket::default()).with_deletion_policy(DeletionPolicy::Retain),
//! );
//! let buckets = template.resources_of::<Bucket>();
//! let output = template.to_json()?;
//! ```

pub mod catalog;
pub mod error;
pub mod format;
pub mod policy;
pub mod resource;
pub mod template;

pub use error::{Error, Result};
pub use format::Format;
pub use policy::DeletionPolicy;
pub use resource::{
    default_registry, DynKind, GenericResource, KindCodec, KindRegistry, Resource, ResourceKind,
    TypedResource,
};
pub use template::decode::{DecodeIssue, DecodeMode, Decoded, Decoder};
pub use template::document::TemplateDocument;
pub use template::Template;
