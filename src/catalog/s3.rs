//! Amazon S3

use super::{Expr, Tag};
use crate::resource::ResourceKind;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `AWS::S3::Bucket`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Bucket {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bucket_name: Option<Expr<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_control: Option<Expr<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub versioning_configuration: Option<VersioningConfiguration>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl ResourceKind for Bucket {
    const KIND: &'static str = "AWS::S3::Bucket";
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct VersioningConfiguration {
    /// Required. `Enabled` or `Suspended`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Expr<String>>,
}

/// `AWS::S3::BucketPolicy`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct BucketPolicy {
    /// Required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bucket: Option<Expr<String>>,
    /// Required. IAM policy document, kept as-is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy_document: Option<Value>,
}

impl ResourceKind for BucketPolicy {
    const KIND: &'static str = "AWS::S3::BucketPolicy";
}
