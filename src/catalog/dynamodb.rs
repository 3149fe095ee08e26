//! Amazon DynamoDB

use super::{Expr, Tag};
use crate::resource::ResourceKind;
use serde::{Deserialize, Serialize};

/// `AWS::DynamoDB::Table`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Table {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_name: Option<Expr<String>>,
    /// `PROVISIONED` or `PAY_PER_REQUEST`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_mode: Option<Expr<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute_definitions: Option<Vec<AttributeDefinition>>,
    /// Required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_schema: Option<Vec<KeySchema>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provisioned_throughput: Option<ProvisionedThroughput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream_specification: Option<StreamSpecification>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl ResourceKind for Table {
    const KIND: &'static str = "AWS::DynamoDB::Table";
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct AttributeDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute_name: Option<Expr<String>>,
    /// `S`, `N` or `B`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute_type: Option<Expr<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct KeySchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute_name: Option<Expr<String>>,
    /// `HASH` or `RANGE`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_type: Option<Expr<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct ProvisionedThroughput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_capacity_units: Option<Expr<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub write_capacity_units: Option<Expr<i64>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct StreamSpecification {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream_view_type: Option<Expr<String>>,
}
