//! Query String Encoding
//!
//! GET 参数按 qs 约定序列化嵌套结构：
//! - 对象: `a[b]=c`
//! - 数组: `a[0]=x`（indices）、`a[]=x`（brackets）或 `a=x&a=y`（repeat）
//! - null: `a=`
//! - 空对象/空数组: 省略
//!
//! 键按插入顺序输出，空格编码为 `%20`

use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::form_urlencoded;

/// 数组编码方式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrayFormat {
    #[default]
    Indices,
    Brackets,
    Repeat,
}

/// 展开为 (key, value) 列表，key 未编码
pub fn flatten_query(params: &Value, format: ArrayFormat) -> Vec<(String, String)> {
    let mut pairs = Vec::new();

    if let Value::Object(map) = params {
        for (key, value) in map {
            flatten_into(key, value, format, &mut pairs);
        }
    }

    pairs
}

/// 编码为查询字符串（不含 `?`）
pub fn encode_query(params: &Value, format: ArrayFormat) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in flatten_query(params, format) {
        serializer.append_pair(&key, &value);
    }
    // form_urlencoded 将空格写为 `+`，字面 `+` 已转义为 `%2B`
    serializer.finish().replace('+', "%20")
}

fn flatten_into(prefix: &str, value: &Value, format: ArrayFormat, out: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => {
            for (key, nested) in map {
                flatten_into(&format!("{}[{}]", prefix, key), nested, format, out);
            }
        }
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                let key = match format {
                    ArrayFormat::Indices => format!("{}[{}]", prefix, index),
                    ArrayFormat::Brackets => format!("{}[]", prefix),
                    ArrayFormat::Repeat => prefix.to_string(),
                };
                flatten_into(&key, item, format, out);
            }
        }
        Value::Null => out.push((prefix.to_string(), String::new())),
        Value::Bool(b) => out.push((prefix.to_string(), b.to_string())),
        Value::Number(n) => out.push((prefix.to_string(), n.to_string())),
        Value::String(s) => out.push((prefix.to_string(), s.clone())),
    }
}
