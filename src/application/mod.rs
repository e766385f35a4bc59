//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（MediaPort）
//! - commands: 上传命令及处理器
//! - form_errors: 从 Loadable 提取字段错误与全局错误
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod form_errors;
pub mod ports;

pub use commands::{handlers::UploadMediaHandler, UploadMedia, UploadMediaFromPath};
pub use error::ApplicationError;
pub use form_errors::{get_field_errors, get_global_error_message, GENERIC_ERROR_MESSAGE};
pub use ports::{ClientError, MediaPort};
