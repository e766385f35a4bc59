//! forum-client - 论坛前端的客户端层
//!
//! 架构设计: Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Loadable: 请求生命周期容器
//! - ApiErrorBody / Embed / UploadFile
//!
//! 应用层 (application/):
//! - Ports: MediaPort
//! - Commands: 媒体上传
//! - form_errors: 字段错误与全局错误提取
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: 预配置的 API 客户端、查询编码、响应转换、媒体上传
//! - Routes: 认证页面路由表

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
