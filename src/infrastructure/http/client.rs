//! API Client - 预配置的论坛 API HTTP 客户端
//!
//! 所有请求的响应都按 JSON 解码，并经过 `transform_response`：
//! - status < 400: 反序列化为调用方期望的类型
//! - status >= 400: 转为 `ClientError::Status`，携带解析后的错误体

use reqwest::multipart::Form;
use reqwest::{Client, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

use super::query::{encode_query, ArrayFormat};
use super::transform::transform_response;
use crate::application::ports::ClientError;
use crate::domain::{ApiErrorBody, ErrorDetails, FieldError, FieldErrors};

/// API 客户端配置
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// API 基础 URL
    pub base_url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
    /// GET 参数中数组的编码方式
    pub array_format: ArrayFormat,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            timeout_secs: 30,
            array_format: ArrayFormat::Indices,
        }
    }
}

impl ApiClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn with_array_format(mut self, format: ArrayFormat) -> Self {
        self.array_format = format;
        self
    }
}

/// 论坛 API 客户端
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    config: ApiClientConfig,
}

impl ApiClient {
    /// 创建新的 API 客户端
    pub fn new(config: ApiClientConfig) -> Result<Self, ClientError> {
        Url::parse(&config.base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ClientError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// 使用默认配置创建客户端
    pub fn with_default_config() -> Result<Self, ClientError> {
        Self::new(ApiClientConfig::default())
    }

    pub fn config(&self) -> &ApiClientConfig {
        &self.config
    }

    /// 拼接完整 URL
    pub fn url(&self, path: &str) -> Result<Url, ClientError> {
        let base = self.config.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        let raw = format!("{}/{}", base, path);
        Url::parse(&raw).map_err(|e| ClientError::InvalidUrl(format!("{}: {}", raw, e)))
    }

    /// GET 请求，`query` 按嵌套规则编码
    pub async fn get<T, Q>(&self, path: &str, query: &Q) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let params =
            serde_json::to_value(query).map_err(|e| ClientError::EncodeError(e.to_string()))?;
        let mut url = self.url(path)?;
        let encoded = encode_query(&params, self.config.array_format);
        if !encoded.is_empty() {
            url.set_query(Some(&encoded));
        }

        self.send(self.client.get(url)).await
    }

    /// POST JSON 请求
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.url(path)?;
        self.send(self.client.post(url).json(body)).await
    }

    /// PUT JSON 请求
    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.url(path)?;
        self.send(self.client.put(url).json(body)).await
    }

    /// DELETE 请求
    pub async fn delete<T>(&self, path: &str) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        let url = self.url(path)?;
        self.send(self.client.delete(url)).await
    }

    /// POST multipart 请求
    pub async fn post_multipart<T>(&self, path: &str, form: Form) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        let url = self.url(path)?;
        self.send(self.client.post(url).multipart(form)).await
    }

    async fn send<T>(&self, request: RequestBuilder) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        let value = self.send_value(request).await?;
        serde_json::from_value(value)
            .map_err(|e| ClientError::InvalidResponse(format!("Failed to decode body: {}", e)))
    }

    async fn send_value(&self, request: RequestBuilder) -> Result<Value, ClientError> {
        let request = request
            .build()
            .map_err(|e| ClientError::EncodeError(e.to_string()))?;
        let method = request.method().clone();
        let url = request.url().clone();

        tracing::debug!(method = %method, url = %url, "Sending API request");

        let response = self.client.execute(request).await.map_err(map_send_error)?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ClientError::InvalidResponse(format!("Failed to read body: {}", e)))?;

        let decoded = if bytes.is_empty() {
            Ok(Value::Null)
        } else {
            serde_json::from_slice::<Value>(&bytes)
        };

        if status.is_client_error() || status.is_server_error() {
            let body = match decoded {
                Ok(value) => error_body(status, transform_response(status.as_u16(), value)),
                Err(_) => fallback_error_body(status),
            };
            tracing::warn!(
                method = %method,
                url = %url,
                status = status.as_u16(),
                message = ?body.message,
                "API request failed"
            );
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let value = decoded
            .map_err(|e| ClientError::InvalidResponse(format!("Expected JSON body: {}", e)))?;

        tracing::debug!(method = %method, url = %url, status = status.as_u16(), "API request completed");

        Ok(transform_response(status.as_u16(), value))
    }
}

fn map_send_error(e: reqwest::Error) -> ClientError {
    if e.is_timeout() {
        ClientError::Timeout
    } else if e.is_connect() {
        ClientError::NetworkError(format!("Cannot connect to API: {}", e))
    } else {
        ClientError::NetworkError(e.to_string())
    }
}

/// 逐字段解析错误体，只丢弃格式不符的部分
fn error_body(status: StatusCode, value: Value) -> ApiErrorBody {
    let Value::Object(object) = value else {
        return fallback_error_body(status);
    };

    ApiErrorBody {
        message: object
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string),
        errors: object.get("errors").and_then(error_details),
    }
}

fn error_details(value: &Value) -> Option<ErrorDetails> {
    match value {
        Value::Object(map) => {
            let by_field: FieldErrors = map
                .iter()
                .filter_map(|(field, list)| Some((field.clone(), field_error_list(list)?)))
                .collect();
            (!by_field.is_empty()).then_some(ErrorDetails::ByField(by_field))
        }
        Value::Array(_) => field_error_list(value).map(ErrorDetails::List),
        _ => {
            tracing::debug!(errors = %value, "Ignoring malformed errors value");
            None
        }
    }
}

fn field_error_list(value: &Value) -> Option<Vec<FieldError>> {
    let Value::Array(items) = value else {
        return None;
    };

    let list: Vec<FieldError> = items
        .iter()
        .filter_map(|item| serde_json::from_value(item.clone()).ok())
        .collect();
    (!list.is_empty()).then_some(list)
}

fn fallback_error_body(status: StatusCode) -> ApiErrorBody {
    ApiErrorBody::with_message(status.to_string())
}
