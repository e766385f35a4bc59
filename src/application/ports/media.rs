//! Media Port - 媒体上传抽象
//!
//! 定义上传接口与客户端错误，具体实现在 infrastructure/http 层

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{ApiErrorBody, Embed, Loadable, UploadFile, SUPPORTED_IMAGE_FORMATS};

/// 客户端错误
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Unsupported image type `{content_type}`, supported formats: {}", SUPPORTED_IMAGE_FORMATS)]
    UnsupportedImageType { content_type: String },

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("HTTP {status}: {}", .body.message.as_deref().unwrap_or("request failed"))]
    Status { status: u16, body: ApiErrorBody },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to encode request: {0}")]
    EncodeError(String),
}

impl ClientError {
    /// 转换为可放入 Loadable 的错误体
    ///
    /// HTTP 状态错误保留服务端返回的错误体，其它错误转为全局信息
    pub fn error_body(&self) -> ApiErrorBody {
        match self {
            Self::Status { body, .. } => body.clone(),
            other => ApiErrorBody::with_message(other.to_string()),
        }
    }

    /// 服务端返回的 HTTP 状态码
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl<T> From<Result<T, ClientError>> for Loadable<T> {
    fn from(result: Result<T, ClientError>) -> Self {
        match result {
            Ok(data) => Loadable::success(data),
            Err(e) => Loadable::failure(e.error_body()),
        }
    }
}

impl<T> Loadable<T> {
    pub fn from_result(result: Result<T, ClientError>) -> Self {
        result.into()
    }
}

/// Media Port
///
/// `POST /api/v2/media` 的抽象接口
#[async_trait]
pub trait MediaPort: Send + Sync {
    /// 上传图片，声明类型不是支持的图片类型时在本地拒绝
    async fn upload_image(&self, file: UploadFile) -> Result<Embed, ClientError>;

    /// 上传任意文件
    async fn upload_file(&self, file: UploadFile) -> Result<Embed, ClientError>;
}
