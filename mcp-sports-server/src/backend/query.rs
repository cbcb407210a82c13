//! Query-string encoding for the sports API.
//!
//! Rules: scalars become `key=value`, arrays become one `key[]=value` pair per
//! non-null element (order kept), null values are dropped. Keys and values
//! are percent-encoded; the `[]` array marker is sent as is.

use serde_json::{Map, Number, Value};

/// Flatten arguments into ordered `(key, value)` pairs, before encoding
pub fn query_pairs(params: &Map<String, Value>) -> Vec<(String, String)> {
    let mut pairs = Vec::new();

    for (key, value) in params {
        match value {
            Value::Array(items) => {
                let array_key = format!("{}[]", key);
                for item in items {
                    if let Some(rendered) = render_value(item) {
                        pairs.push((array_key.clone(), rendered));
                    }
                }
            }
            other => {
                if let Some(rendered) = render_value(other) {
                    pairs.push((key.clone(), rendered));
                }
            }
        }
    }

    pairs
}

/// Build the encoded query string (without the leading `?`)
pub fn build_query_string(params: &Map<String, Value>) -> String {
    query_pairs(params)
        .iter()
        .map(|(key, value)| match key.strip_suffix("[]") {
            Some(name) => format!("{}[]={}", encode_component(name), encode_component(value)),
            None => format!("{}={}", encode_component(key), encode_component(value)),
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Text form of an argument as it appears in a URL, `None` for null.
///
/// Shared by query parameters and path placeholders.
pub fn render_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(render_number(n)),
        // nested structures have no query representation; send their JSON text
        other => Some(other.to_string()),
    }
}

/// Integral floats (`1.0`) print without the fraction
fn render_number(number: &Number) -> String {
    if number.is_f64() {
        if let Some(f) = number.as_f64() {
            if f.is_finite() && f.fract() == 0.0 && f.abs() < 9.0e15 {
                return format!("{}", f as i64);
            }
        }
    }
    number.to_string()
}

/// Percent-encode one key or value; spaces become `%20`
pub fn encode_component(raw: &str) -> String {
    url::form_urlencoded::byte_serialize(raw.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
