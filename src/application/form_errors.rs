//! Form Errors - 从 Loadable 中提取表单错误
//!
//! 仅在 ERROR 或 LOADING 状态下读取错误，纯只读检查，不会失败

use std::borrow::Cow;

use crate::domain::{FieldError, Loadable};

/// 没有全局信息时的兜底提示
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// 获取指定字段的错误列表
pub fn get_field_errors<'a, T>(loadable: &'a Loadable<T>, field: &str) -> Option<&'a [FieldError]> {
    loadable
        .error()?
        .field_errors()?
        .get(field)
        .map(Vec::as_slice)
}

/// 获取全局错误信息
///
/// `valid_fields` 中任一字段已有字段错误时返回 None（由字段自行展示），
/// 否则返回错误信息，缺失时返回兜底提示
pub fn get_global_error_message<'a, T, S>(
    loadable: &'a Loadable<T>,
    valid_fields: &[S],
) -> Option<Cow<'a, str>>
where
    S: AsRef<str>,
{
    let error = loadable.error()?;

    if valid_fields
        .iter()
        .any(|field| get_field_errors(loadable, field.as_ref()).is_some())
    {
        return None;
    }

    Some(match error.message.as_deref() {
        Some(message) => Cow::Borrowed(message),
        None => Cow::Borrowed(GENERIC_ERROR_MESSAGE),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ApiErrorBody, FieldErrors};

    fn name_errors() -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.insert(
            "name".to_string(),
            vec![
                FieldError::new("name", "is required"),
                FieldError::new("name", "is too short"),
            ],
        );
        errors
    }

    #[test]
    fn test_field_errors_for_present_field() {
        let loadable: Loadable<()> = Loadable::failure(ApiErrorBody::with_field_errors(name_errors()));

        let errors = get_field_errors(&loadable, "name").unwrap();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].message, "is required");
        assert_eq!(errors[1].message, "is too short");

        assert!(get_field_errors(&loadable, "email").is_none());
    }

    #[test]
    fn test_field_errors_while_loading() {
        let loadable: Loadable<()> =
            Loadable::failure(ApiErrorBody::with_field_errors(name_errors())).reload();
        assert!(get_field_errors(&loadable, "name").is_some());
    }

    #[test]
    fn test_success_ignores_error_content() {
        let mut loadable = Loadable::success(());
        loadable.error = Some(ApiErrorBody::with_field_errors(name_errors()).message("boom"));

        assert!(get_field_errors(&loadable, "name").is_none());
        assert!(get_global_error_message(&loadable, &["email"]).is_none());
    }

    #[test]
    fn test_initial_has_no_errors() {
        let loadable: Loadable<()> = Loadable::initial();
        assert!(get_field_errors(&loadable, "name").is_none());
        assert!(get_global_error_message(&loadable, &["name"]).is_none());
    }

    #[test]
    fn test_global_message_suppressed_by_field_errors() {
        let loadable: Loadable<()> =
            Loadable::failure(ApiErrorBody::with_field_errors(name_errors()).message("Invalid form"));

        assert!(get_global_error_message(&loadable, &["email", "name"]).is_none());
        assert_eq!(
            get_global_error_message(&loadable, &["email"]).as_deref(),
            Some("Invalid form")
        );
    }

    #[test]
    fn test_global_message_while_loading() {
        let with_fields: Loadable<()> =
            Loadable::failure(ApiErrorBody::with_field_errors(name_errors()).message("Invalid form"))
                .reload();
        assert!(get_global_error_message(&with_fields, &["name"]).is_none());
        assert_eq!(
            get_global_error_message(&with_fields, &["email"]).as_deref(),
            Some("Invalid form")
        );

        let without_message: Loadable<()> = Loadable::failure(ApiErrorBody::default()).reload();
        assert_eq!(
            get_global_error_message(&without_message, &["name"]).as_deref(),
            Some(GENERIC_ERROR_MESSAGE)
        );
    }

    #[test]
    fn test_global_message_fallback() {
        let loadable: Loadable<()> = Loadable::failure(ApiErrorBody::default());
        let fields: [&str; 0] = [];

        assert_eq!(
            get_global_error_message(&loadable, &fields).as_deref(),
            Some(GENERIC_ERROR_MESSAGE)
        );
    }
}
