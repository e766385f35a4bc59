//! Authentication Routes

use super::table::{Page, RouteError, RouteTable};

pub const SIGN_IN_PATH: &str = "/authenticate/signin";
pub const RECOVER_PASSWORD_PATH: &str = "/authenticate/recoverpassword";

/// 创建所有路由
pub fn create_routes() -> Result<RouteTable, RouteError> {
    RouteTable::new().nest("/authenticate", auth_routes()?)
}

/// 认证页面路由
pub fn auth_routes() -> Result<RouteTable, RouteError> {
    RouteTable::new()
        .route("/signin", Page::SignIn)?
        .route("/recoverpassword", Page::RecoverPassword)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_pages_registered() {
        let table = create_routes().unwrap();

        assert_eq!(table.resolve(SIGN_IN_PATH), Some(Page::SignIn));
        assert_eq!(table.resolve(RECOVER_PASSWORD_PATH), Some(Page::RecoverPassword));
        assert_eq!(table.path_for(Page::SignIn), Some(SIGN_IN_PATH));
        assert_eq!(table.path_for(Page::RecoverPassword), Some(RECOVER_PASSWORD_PATH));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_component_names() {
        let table = create_routes().unwrap();
        let components: Vec<&str> = table.iter().map(|r| r.page.component()).collect();
        assert_eq!(components, vec!["SignIn", "RecoverPassword"]);
    }
}
