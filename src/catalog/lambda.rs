//! AWS Lambda

use super::{Expr, Tag};
use crate::resource::ResourceKind;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// `AWS::Lambda::Function`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Function {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function_name: Option<Expr<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Expr<String>>,
    /// Required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<Code>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handler: Option<Expr<String>>,
    /// Required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Expr<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<Expr<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_size: Option<Expr<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<Expr<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<Environment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl ResourceKind for Function {
    const KIND: &'static str = "AWS::Lambda::Function";
}

/// Where the deployment package comes from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Code {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s3_bucket: Option<Expr<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s3_key: Option<Expr<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s3_object_version: Option<Expr<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip_file: Option<Expr<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_uri: Option<Expr<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Environment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variables: Option<IndexMap<String, Expr<String>>>,
}
