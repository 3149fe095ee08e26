//! AWS Identity and Access Management

use super::{Expr, Tag};
use crate::resource::ResourceKind;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `AWS::IAM::Role`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Role {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_name: Option<Expr<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Expr<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Expr<String>>,
    /// Required. Trust policy, kept as-is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assume_role_policy_document: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub managed_policy_arns: Option<Vec<Expr<String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_session_duration: Option<Expr<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policies: Option<Vec<Policy>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl ResourceKind for Role {
    const KIND: &'static str = "AWS::IAM::Role";
}

/// Inline policy embedded in a role
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Policy {
    /// Required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy_name: Option<Expr<String>>,
    /// Required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy_document: Option<Value>,
}
