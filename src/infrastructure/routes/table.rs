//! Route Table
//!
//! 路径 -> 页面组件的静态映射，支持按前缀嵌套

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// 路由错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("Route already registered: {0}")]
    DuplicatePath(String),

    #[error("Invalid route path: {0}")]
    InvalidPath(String),
}

/// 页面组件
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Page {
    SignIn,
    RecoverPassword,
}

impl Page {
    /// 组件名
    pub fn component(&self) -> &'static str {
        match self {
            Self::SignIn => "SignIn",
            Self::RecoverPassword => "RecoverPassword",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.component())
    }
}

/// 单条路由
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub path: String,
    pub page: Page,
}

/// 路由表
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册路由
    pub fn route(mut self, path: &str, page: Page) -> Result<Self, RouteError> {
        if !path.starts_with('/') {
            return Err(RouteError::InvalidPath(path.to_string()));
        }

        let path = normalize(path);
        if self.routes.iter().any(|r| r.path == path) {
            return Err(RouteError::DuplicatePath(path));
        }

        self.routes.push(Route { path, page });
        Ok(self)
    }

    /// 将 `table` 中的路由挂载到 `prefix` 下
    pub fn nest(self, prefix: &str, table: RouteTable) -> Result<Self, RouteError> {
        if !prefix.starts_with('/') {
            return Err(RouteError::InvalidPath(prefix.to_string()));
        }

        let prefix = normalize(prefix);
        table.routes.into_iter().try_fold(self, |acc, route| {
            let path = if route.path == "/" {
                prefix.clone()
            } else if prefix == "/" {
                route.path
            } else {
                format!("{}{}", prefix, route.path)
            };
            acc.route(&path, route.page)
        })
    }

    /// 按路径查找页面，忽略查询串、片段与末尾斜杠
    pub fn resolve(&self, path: &str) -> Option<Page> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = normalize(path);
        self.routes.iter().find(|r| r.path == path).map(|r| r.page)
    }

    /// 页面对应的路径
    pub fn path_for(&self, page: Page) -> Option<&str> {
        self.routes
            .iter()
            .find(|r| r.page == page)
            .map(|r| r.path.as_str())
    }

    /// 页面对应的完整 URL
    pub fn url_for(&self, base_url: &str, page: Page) -> Option<String> {
        self.path_for(page)
            .map(|path| format!("{}{}", base_url.trim_end_matches('/'), path))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

fn normalize(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}
