//! 应用层错误定义
//!
//! 上传失败由 Loadable 承载，这里只包含本地错误

use thiserror::Error;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 验证错误
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 读取本地文件失败
    #[error("Storage error: {0}")]
    StorageError(String),
}

impl ApplicationError {
    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    /// 创建存储错误
    pub fn storage(message: impl Into<String>) -> Self {
        Self::StorageError(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ApplicationError::validation("File is empty: a.txt").to_string(),
            "Validation error: File is empty: a.txt"
        );
        assert_eq!(
            ApplicationError::storage("Failed to read a.txt").to_string(),
            "Storage error: Failed to read a.txt"
        );
    }
}
