//! Infrastructure Layer - 基础设施层
//!
//! 提供端口的具体实现与前端路由表

pub mod http;
pub mod routes;

pub use http::{ApiClient, ApiClientConfig, HttpMediaClient};
pub use routes::{create_routes, Page, RouteTable};
