//! Amazon EC2

use super::{Expr, Tag};
use crate::resource::ResourceKind;
use serde::{Deserialize, Serialize};

/// `AWS::EC2::Instance`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Instance {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_id: Option<Expr<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<Expr<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_name: Option<Expr<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subnet_id: Option<Expr<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_group_ids: Option<Vec<Expr<String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iam_instance_profile: Option<Expr<String>>,
    /// Base64-encoded, usually via `Fn::Base64`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_data: Option<Expr<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl ResourceKind for Instance {
    const KIND: &'static str = "AWS::EC2::Instance";
}

/// `AWS::EC2::Volume`
///
/// One of the few kinds where `DeletionPolicy: Snapshot` applies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Volume {
    /// Required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<Expr<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Expr<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_type: Option<Expr<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iops: Option<Expr<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encrypted: Option<Expr<bool>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<Expr<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot_id: Option<Expr<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl ResourceKind for Volume {
    const KIND: &'static str = "AWS::EC2::Volume";
}
