//! HTTP Layer - 论坛 API 客户端
//!
//! - client: 预配置的 reqwest 客户端（GET/POST/PUT/DELETE/multipart）
//! - query: 嵌套结构的查询字符串编码
//! - transform: 错误响应的字段索引转换
//! - media: 媒体上传（MediaPort 实现）

mod client;
mod media;
mod query;
mod transform;

#[cfg(test)]
mod test_server;

pub use client::{ApiClient, ApiClientConfig};
pub use media::{HttpMediaClient, MEDIA_ENDPOINT};
pub use query::{encode_query, flatten_query, ArrayFormat};
pub use transform::transform_response;
