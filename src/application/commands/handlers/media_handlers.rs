//! Media Command Handlers

use std::sync::Arc;

use crate::application::commands::{UploadMedia, UploadMediaFromPath};
use crate::application::error::ApplicationError;
use crate::application::ports::{ClientError, MediaPort};
use crate::domain::{Embed, EmbedKind, Loadable, UploadFile};

/// UploadMedia Handler
///
/// 上传结果（包括服务端错误）统一放入 Loadable，供表单错误提取使用
pub struct UploadMediaHandler {
    media: Arc<dyn MediaPort>,
}

impl UploadMediaHandler {
    pub fn new(media: Arc<dyn MediaPort>) -> Self {
        Self { media }
    }

    pub async fn handle(&self, command: UploadMedia) -> Loadable<Embed> {
        let file_name = command.file.file_name().to_string();
        let size = command.file.len();

        let result: Result<Embed, ClientError> = match command.kind {
            EmbedKind::Image => self.media.upload_image(command.file).await,
            EmbedKind::File => self.media.upload_file(command.file).await,
        };

        match &result {
            Ok(embed) => tracing::info!(
                kind = %command.kind,
                file_name = %file_name,
                size,
                url = ?embed.url(),
                "Media uploaded"
            ),
            Err(e) => tracing::warn!(
                kind = %command.kind,
                file_name = %file_name,
                status = ?e.status(),
                error = %e,
                "Media upload failed"
            ),
        }

        Loadable::from_result(result)
    }

    /// 读取本地文件后上传
    ///
    /// 本地读取失败返回 ApplicationError，上传失败体现在 Loadable 中
    pub async fn handle_path(
        &self,
        command: UploadMediaFromPath,
    ) -> Result<Loadable<Embed>, ApplicationError> {
        let file = UploadFile::from_path(&command.path).await.map_err(|e| {
            ApplicationError::storage(format!(
                "Failed to read {}: {}",
                command.path.display(),
                e
            ))
        })?;

        if file.is_empty() {
            return Err(ApplicationError::validation(format!(
                "File is empty: {}",
                command.path.display()
            )));
        }

        Ok(self
            .handle(UploadMedia {
                kind: command.kind,
                file,
            })
            .await)
    }
}
