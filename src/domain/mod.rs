//! Domain Layer - 领域层
//!
//! 客户端侧的数据结构：
//! - Loadable: 请求生命周期容器
//! - ApiErrorBody: 服务端错误响应
//! - Embed: 上传结果
//! - UploadFile: 待上传文件

mod api_error;
mod embed;
mod loadable;
mod upload;

pub use api_error::{ApiErrorBody, ErrorDetails, FieldError, FieldErrors};
pub use embed::{Embed, EmbedKind};
pub use loadable::{LoadStatus, Loadable};
pub use upload::{is_supported_image_type, UploadFile, SUPPORTED_IMAGE_FORMATS, SUPPORTED_IMAGE_TYPES};
