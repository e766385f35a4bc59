//! Response Transform
//!
//! 错误响应（status >= 400）中的 `errors` 列表按 `field` 重新索引：
//! `[{field: "email", ...}]` -> `{email: [{field: "email", ...}]}`

use serde_json::{Map, Value};

/// 转换响应体
pub fn transform_response(status: u16, mut body: Value) -> Value {
    if status < 400 {
        return body;
    }

    let Some(object) = body.as_object_mut() else {
        return body;
    };

    let reindexed = match object.get("errors") {
        Some(Value::Array(errors)) if !errors.is_empty() => index_by_field(errors),
        _ => return body,
    };

    object.insert("errors".to_string(), Value::Object(reindexed));
    body
}

fn index_by_field(errors: &[Value]) -> Map<String, Value> {
    let mut map = Map::new();

    for error in errors {
        let Some(field) = error.get("field").and_then(Value::as_str) else {
            tracing::debug!(error = %error, "Dropping error entry without field");
            continue;
        };
        if let Value::Array(list) = map
            .entry(field)
            .or_insert_with(|| Value::Array(Vec::new()))
        {
            list.push(error.clone());
        }
    }

    map
}
