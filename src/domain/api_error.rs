//! API Error Body - 服务端错误响应结构
//!
//! 错误响应形如 `{ "message": "...", "errors": ... }`，其中 `errors`
//! 在经过响应转换后为 `字段名 -> 有序错误列表` 的映射

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// 单个字段错误
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    /// 出错的字段名
    pub field: String,
    /// 错误描述
    #[serde(default)]
    pub message: String,
    /// 服务端附带的其它信息（如 code）
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            extra: Map::new(),
        }
    }
}

/// 字段名 -> 错误列表
pub type FieldErrors = BTreeMap<String, Vec<FieldError>>;

/// 错误详情
///
/// 4xx/5xx 响应经转换后总是 `ByField`；未转换的原始列表保留为 `List`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorDetails {
    ByField(FieldErrors),
    List(Vec<FieldError>),
}

/// 错误响应体
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// 全局错误信息
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// 字段级错误
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<ErrorDetails>,
}

impl ApiErrorBody {
    /// 仅包含全局信息的错误
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            errors: None,
        }
    }

    /// 仅包含字段错误的错误
    pub fn with_field_errors(errors: FieldErrors) -> Self {
        Self {
            message: None,
            errors: Some(ErrorDetails::ByField(errors)),
        }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// 按字段名索引的错误映射（未转换的列表返回 None）
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match &self.errors {
            Some(ErrorDetails::ByField(map)) => Some(map),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_reindexed_errors() {
        let body: ApiErrorBody = serde_json::from_value(json!({
            "message": "Validation failed",
            "errors": {
                "email": [{ "field": "email", "message": "bad", "code": "invalid" }]
            }
        }))
        .unwrap();

        let map = body.field_errors().unwrap();
        assert_eq!(map["email"][0].message, "bad");
        assert_eq!(map["email"][0].extra["code"], "invalid");
        assert_eq!(body.message.as_deref(), Some("Validation failed"));
    }

    #[test]
    fn test_raw_list_has_no_field_index() {
        let body: ApiErrorBody = serde_json::from_value(json!({
            "errors": [{ "field": "email", "message": "bad" }]
        }))
        .unwrap();

        assert!(matches!(body.errors, Some(ErrorDetails::List(_))));
        assert!(body.field_errors().is_none());
    }

    #[test]
    fn test_empty_body() {
        let body: ApiErrorBody = serde_json::from_value(json!({})).unwrap();
        assert_eq!(body, ApiErrorBody::default());
    }
}
