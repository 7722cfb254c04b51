//! PHP-style form encoding of nested parameters.
//!
//! Moodle reads web-service arguments the way PHP parses
//! `application/x-www-form-urlencoded` bodies, so nested structures travel as
//! bracketed keys: `{"users": [{"username": "alice"}]}` becomes
//! `users[0][username]=alice`.

use serde_json::Value;

/// Flatten a JSON object into ordered `(key, value)` form pairs.
///
/// Nulls are dropped, booleans become `1`/`0`. A non-object root yields no
/// pairs.
pub fn flatten(params: &Value) -> Vec<(String, String)> {
    let mut pairs = Vec::new();

    if let Value::Object(map) = params {
        for (key, value) in map {
            flatten_into(key.clone(), value, &mut pairs);
        }
    }

    pairs
}

fn flatten_into(prefix: String, value: &Value, pairs: &mut Vec<(String, String)>) {
    match value {
        Value::Null => {}
        Value::Bool(flag) => pairs.push((prefix, String::from(if *flag { "1" } else { "0" }))),
        Value::Number(number) => pairs.push((prefix, number.to_string())),
        Value::String(text) => pairs.push((prefix, text.clone())),
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                flatten_into(format!("{}[{}]", prefix, index), item, pairs);
            }
        }
        Value::Object(map) => {
            for (key, item) in map {
                flatten_into(format!("{}[{}]", prefix, key), item, pairs);
            }
        }
    }
}
