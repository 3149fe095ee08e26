//! Amazon SNS

use super::{Expr, Tag};
use crate::resource::ResourceKind;
use serde::{Deserialize, Serialize};

/// `AWS::SNS::Topic`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Topic {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic_name: Option<Expr<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<Expr<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kms_master_key_id: Option<Expr<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription: Option<Vec<Subscription>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl ResourceKind for Topic {
    const KIND: &'static str = "AWS::SNS::Topic";
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Subscription {
    /// Required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<Expr<String>>,
    /// Required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<Expr<String>>,
}
