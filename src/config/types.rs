//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;

use crate::infrastructure::http::{ApiClientConfig, ArrayFormat};

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 论坛 API 配置
    #[serde(default)]
    pub api: ApiConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 论坛 API 配置
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// API 基础 URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// GET 参数中数组的编码方式: indices, brackets, repeat
    #[serde(default)]
    pub array_format: ArrayFormat,
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            array_format: ArrayFormat::default(),
        }
    }
}

impl ApiConfig {
    /// 转换为 HTTP 客户端配置
    pub fn client_config(&self) -> ApiClientConfig {
        ApiClientConfig::new(self.base_url.clone())
            .with_timeout(self.timeout_secs)
            .with_array_format(self.array_format)
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.api.base_url, "http://localhost:3000");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.api.array_format, ArrayFormat::Indices);
        assert_eq!(config.log.level, "info");
        assert!(!config.log.json);
    }

    #[test]
    fn test_client_config() {
        let api = ApiConfig {
            base_url: "https://forum.test".to_string(),
            timeout_secs: 5,
            array_format: ArrayFormat::Brackets,
        };
        let client = api.client_config();
        assert_eq!(client.base_url, "https://forum.test");
        assert_eq!(client.timeout_secs, 5);
        assert_eq!(client.array_format, ArrayFormat::Brackets);
    }
}
