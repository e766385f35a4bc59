//! Client Routes - 前端页面路由表
//!
//! Routes:
//! - /authenticate/signin           SignIn
//! - /authenticate/recoverpassword  RecoverPassword

mod auth;
mod table;

pub use auth::{auth_routes, create_routes, RECOVER_PASSWORD_PATH, SIGN_IN_PATH};
pub use table::{Page, Route, RouteError, RouteTable};
