//! Media Commands

use std::path::PathBuf;

use crate::domain::{EmbedKind, UploadFile};

/// 上传内存中的文件
#[derive(Debug, Clone)]
pub struct UploadMedia {
    pub kind: EmbedKind,
    pub file: UploadFile,
}

/// 上传磁盘上的文件
#[derive(Debug, Clone)]
pub struct UploadMediaFromPath {
    pub kind: EmbedKind,
    pub path: PathBuf,
}
