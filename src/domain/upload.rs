//! Upload File - 待上传文件
//!
//! 保存文件名、声明的 MIME 类型与内容。图片上传前按声明类型校验

use std::path::Path;

/// 支持上传的图片类型
pub const SUPPORTED_IMAGE_TYPES: &[&str] = &["image/jpeg", "image/png", "image/gif", "image/webp"];

/// 支持格式的可读名称（用于错误提示）
pub const SUPPORTED_IMAGE_FORMATS: &str = "JPEG, PNG, GIF, WEBP";

/// 待上传文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    file_name: String,
    content_type: Option<String>,
    bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(file_name: impl Into<String>, content_type: Option<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type,
            bytes,
        }
    }

    /// 从磁盘读取文件，按扩展名推断声明类型
    pub async fn from_path(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload")
            .to_string();
        let content_type = path
            .extension()
            .and_then(|e| e.to_str())
            .and_then(content_type_for_extension)
            .map(str::to_string);

        Ok(Self {
            file_name,
            content_type,
            bytes,
        })
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// 声明类型是否为支持的图片类型
    pub fn is_image(&self) -> bool {
        self.content_type
            .as_deref()
            .map(is_supported_image_type)
            .unwrap_or(false)
    }
}

/// 判断 MIME 类型是否为支持的图片类型（忽略大小写与参数部分）
pub fn is_supported_image_type(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    SUPPORTED_IMAGE_TYPES.contains(&essence.as_str())
}

fn content_type_for_extension(ext: &str) -> Option<&'static str> {
    match ext.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "svg" => Some("image/svg+xml"),
        "pdf" => Some("application/pdf"),
        "txt" => Some("text/plain"),
        "zip" => Some("application/zip"),
        "mp3" => Some("audio/mpeg"),
        "mp4" => Some("video/mp4"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_image_type_detection() {
        assert!(is_supported_image_type("image/png"));
        assert!(is_supported_image_type("IMAGE/JPEG; charset=binary"));
        assert!(!is_supported_image_type("image/svg+xml"));
        assert!(!is_supported_image_type("application/pdf"));

        let file = UploadFile::new("a.bin", None, vec![1]);
        assert!(!file.is_image());
    }

    #[tokio::test]
    async fn test_from_path_guesses_type() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("avatar.PNG");
        tokio::fs::write(&path, b"png bytes").await.unwrap();

        let file = UploadFile::from_path(&path).await.unwrap();
        assert_eq!(file.file_name(), "avatar.PNG");
        assert_eq!(file.content_type(), Some("image/png"));
        assert_eq!(file.bytes(), b"png bytes");
        assert!(file.is_image());
    }

    #[tokio::test]
    async fn test_from_path_unknown_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.xyz");
        tokio::fs::write(&path, b"data").await.unwrap();

        let file = UploadFile::from_path(&path).await.unwrap();
        assert_eq!(file.content_type(), None);
        assert!(!file.is_image());
    }
}
