//! Loadable - 请求生命周期容器
//!
//! 记录一次请求的状态，以及可选的数据或错误。
//! 状态决定 data/error 是否有意义：
//! - data 仅在 SUCCESS 时可读
//! - error 仅在 ERROR 或 LOADING（重试中保留上次错误）时可读

use serde::{Deserialize, Serialize};

use super::api_error::ApiErrorBody;

/// 请求状态
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LoadStatus {
    #[default]
    Initial,
    Loading,
    Success,
    Error,
}

impl LoadStatus {
    /// 该状态下 error 是否可读
    pub fn exposes_error(&self) -> bool {
        matches!(self, Self::Error | Self::Loading)
    }
}

/// 请求生命周期容器
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loadable<T> {
    pub status: LoadStatus,
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiErrorBody>,
}

impl<T> Default for Loadable<T> {
    fn default() -> Self {
        Self::initial()
    }
}

impl<T> Loadable<T> {
    pub fn initial() -> Self {
        Self {
            status: LoadStatus::Initial,
            data: None,
            error: None,
        }
    }

    pub fn loading() -> Self {
        Self {
            status: LoadStatus::Loading,
            data: None,
            error: None,
        }
    }

    pub fn success(data: T) -> Self {
        Self {
            status: LoadStatus::Success,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(error: ApiErrorBody) -> Self {
        Self {
            status: LoadStatus::Error,
            data: None,
            error: Some(error),
        }
    }

    /// 重新进入 LOADING，保留上次的数据和错误
    pub fn reload(self) -> Self {
        Self {
            status: LoadStatus::Loading,
            ..self
        }
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    /// 成功时的数据
    pub fn data(&self) -> Option<&T> {
        match self.status {
            LoadStatus::Success => self.data.as_ref(),
            _ => None,
        }
    }

    /// ERROR / LOADING 时的错误
    pub fn error(&self) -> Option<&ApiErrorBody> {
        if self.status.exposes_error() {
            self.error.as_ref()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_gates_payloads() {
        let mut loadable = Loadable::success(1);
        loadable.error = Some(ApiErrorBody::with_message("stale"));

        assert_eq!(loadable.data(), Some(&1));
        assert!(loadable.error().is_none());

        let failed: Loadable<i32> = Loadable::failure(ApiErrorBody::with_message("boom"));
        assert!(failed.data().is_none());
        assert_eq!(failed.error().and_then(|e| e.message.as_deref()), Some("boom"));
    }

    #[test]
    fn test_reload_keeps_previous_error() {
        let failed: Loadable<i32> = Loadable::failure(ApiErrorBody::with_message("boom"));
        let reloading = failed.reload();

        assert!(reloading.is_loading());
        assert!(reloading.error().is_some());
    }

    #[test]
    fn test_status_serializes_upper_case() {
        let loadable: Loadable<i32> = Loadable::loading();
        assert_eq!(serde_json::to_value(&loadable).unwrap(), json!({ "status": "LOADING" }));

        let parsed: Loadable<i32> =
            serde_json::from_value(json!({ "status": "ERROR", "error": { "message": "x" } }))
                .unwrap();
        assert_eq!(parsed.status(), LoadStatus::Error);
    }
}
