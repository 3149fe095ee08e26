//! Amazon SQS

use super::{Expr, Tag};
use crate::resource::ResourceKind;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `AWS::SQS::Queue`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct Queue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub queue_name: Option<Expr<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fifo_queue: Option<Expr<bool>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay_seconds: Option<Expr<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum_message_size: Option<Expr<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_retention_period: Option<Expr<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility_timeout: Option<Expr<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redrive_policy: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl ResourceKind for Queue {
    const KIND: &'static str = "AWS::SQS::Queue";
}
