//! HTTP Media Client - 调用论坛媒体上传接口
//!
//! 实现 MediaPort trait
//!
//! API:
//! POST /api/v2/media
//! Request: multipart/form-data, fields `file` (binary) + `type` (`image` | `file`)
//! Response: JSON 上传元数据，客户端按上传类型补充 `type`

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde_json::{Map, Value};

use super::client::ApiClient;
use crate::application::ports::{ClientError, MediaPort};
use crate::domain::{Embed, EmbedKind, UploadFile};

/// 媒体上传接口路径
pub const MEDIA_ENDPOINT: &str = "/api/v2/media";

/// HTTP 媒体上传客户端
#[derive(Debug, Clone)]
pub struct HttpMediaClient {
    api: ApiClient,
}

impl HttpMediaClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    async fn upload(&self, kind: EmbedKind, file: UploadFile) -> Result<Embed, ClientError> {
        tracing::debug!(
            kind = %kind,
            file_name = %file.file_name(),
            content_type = ?file.content_type(),
            size = file.len(),
            "Uploading media"
        );

        let form = build_form(kind, file)?;
        let mut metadata: Map<String, Value> =
            self.api.post_multipart(MEDIA_ENDPOINT, form).await?;

        // 以客户端的上传类型为准
        metadata.remove("type");

        Ok(Embed::new(kind, metadata))
    }
}

fn build_form(kind: EmbedKind, file: UploadFile) -> Result<Form, ClientError> {
    let file_name = file.file_name().to_string();
    let content_type = file.content_type().map(str::to_string);

    let mut part = Part::bytes(file.into_bytes()).file_name(file_name);
    if let Some(content_type) = content_type {
        part = part
            .mime_str(&content_type)
            .map_err(|e| ClientError::EncodeError(format!("Invalid content type: {}", e)))?;
    }

    Ok(Form::new()
        .part("file", part)
        .text("type", kind.as_str()))
}

#[async_trait]
impl MediaPort for HttpMediaClient {
    async fn upload_image(&self, file: UploadFile) -> Result<Embed, ClientError> {
        if !file.is_image() {
            let content_type = file.content_type().unwrap_or("unknown").to_string();
            tracing::warn!(
                file_name = %file.file_name(),
                content_type = %content_type,
                "Rejected non-image upload"
            );
            return Err(ClientError::UnsupportedImageType { content_type });
        }

        self.upload(EmbedKind::Image, file).await
    }

    async fn upload_file(&self, file: UploadFile) -> Result<Embed, ClientError> {
        self.upload(EmbedKind::File, file).await
    }
}
