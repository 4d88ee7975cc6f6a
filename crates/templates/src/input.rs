//! Helpers for reading loosely-typed builder input.

use serde_json::Value;

/// String field with a fallback for absent or non-string values.
pub fn str_or<'a>(data: &'a Value, key: &str, fallback: &'a str) -> &'a str {
    data.get(key).and_then(Value::as_str).unwrap_or(fallback)
}

pub fn opt_str<'a>(data: &'a Value, key: &str) -> Option<&'a str> {
    data.get(key).and_then(Value::as_str)
}

/// Array field; absent or non-array values read as empty.
pub fn array<'a>(data: &'a Value, key: &str) -> &'a [Value] {
    data.get(key).and_then(Value::as_array).map_or(&[], Vec::as_slice)
}

/// Array of strings; non-string entries are skipped.
pub fn string_items(data: &Value, key: &str) -> Vec<String> {
    array(data, key)
        .iter()
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect()
}
