//! Embed - 已上传媒体的元数据

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// 上传类型，同时作为 multipart 的 `type` 字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbedKind {
    Image,
    File,
}

impl EmbedKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::File => "file",
        }
    }
}

impl fmt::Display for EmbedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 上传结果
///
/// 服务端返回的字段原样保存在 `metadata` 中，`kind` 由客户端按上传类型标注
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Embed {
    #[serde(rename = "type")]
    pub kind: EmbedKind,
    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

impl Embed {
    pub fn new(kind: EmbedKind, metadata: Map<String, Value>) -> Self {
        Self { kind, metadata }
    }

    pub fn url(&self) -> Option<&str> {
        self.metadata.get("url").and_then(Value::as_str)
    }

    pub fn name(&self) -> Option<&str> {
        self.metadata.get("name").and_then(Value::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.metadata.get(key)
    }
}
