//! Resource kind catalogue
//!
//! Plain data records, one per resource kind. Each struct's fields are the
//! kind's `Properties`; the engine does all envelope handling.
//!
//! Conventions shared by every kind:
//!
//! - field names are the wire names in `PascalCase`
//! - every field is optional, including those the provider requires, and
//!   absent fields are not written back
//! - unknown fields are rejected, so a payload that does not fit the schema
//!   stays generic instead of losing data
//!
//! # Services
//!
//! - [`dynamodb`] - tables
//! - [`ec2`] - instances, volumes
//! - [`iam`] - roles
//! - [`lambda`] - functions
//! - [`s3`] - buckets, bucket policies
//! - [`sns`] - topics
//! - [`sqs`] - queues

pub mod dynamodb;
pub mod ec2;
mod expr;
pub mod iam;
pub mod lambda;
pub mod s3;
pub mod sns;
pub mod sqs;

pub use expr::Expr;

use crate::resource::KindRegistry;
use serde::{Deserialize, Serialize};

/// Key/value tag accepted by most kinds
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Tag {
    pub key: Expr<String>,
    pub value: Expr<String>,
}

impl Tag {
    pub fn new(key: &str, value: &str) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Register every catalogue kind
pub fn register_all(registry: &mut KindRegistry) {
    registry.register::<dynamodb::Table>();
    registry.register::<ec2::Instance>();
    registry.register::<ec2::Volume>();
    registry.register::<iam::Role>();
    registry.register::<lambda::Function>();
    registry.register::<s3::Bucket>();
    registry.register::<s3::BucketPolicy>();
    registry.register::<sns::Topic>();
    registry.register::<sqs::Queue>();
}
