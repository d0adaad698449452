//! [`JsonValue`] — the in-memory model of a parsed JSON document.

/// A parsed JSON value.
///
/// Covers the six JSON value kinds. Numbers are split three ways, matching
/// how [`serde_json::Number`] classifies parsed literals:
/// - Integers that fit `i64`
/// - Unsigned integers above `i64::MAX`
/// - Everything else as `f64`
///
/// Objects hold their members as an ordered sequence of pairs rather than a
/// map, so member order is explicit and duplicate keys are representable.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonValue {
    /// JSON null
    Null,
    /// Boolean value
    Bool(bool),
    /// Signed integer (fits in i64)
    Integer(i64),
    /// Unsigned integer > i64::MAX
    UInteger(u64),
    /// Floating-point number
    Float(f64),
    /// String
    Str(String),
    /// Array of values
    Array(Vec<JsonValue>),
    /// Object (ordered key-value pairs)
    Object(Vec<(String, JsonValue)>),
}

impl From<serde_json::Value> for JsonValue {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => JsonValue::Null,
            serde_json::Value::Bool(b) => JsonValue::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    JsonValue::Integer(i)
                } else if let Some(u) = n.as_u64() {
                    JsonValue::UInteger(u)
                } else {
                    JsonValue::Float(n.as_f64().unwrap_or(0.0))
                }
            }
            serde_json::Value::String(s) => JsonValue::Str(s),
            serde_json::Value::Array(arr) => {
                JsonValue::Array(arr.into_iter().map(JsonValue::from).collect())
            }
            serde_json::Value::Object(obj) => JsonValue::Object(
                obj.into_iter()
                    .map(|(k, v)| (k, JsonValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<JsonValue> for serde_json::Value {
    fn from(v: JsonValue) -> Self {
        match v {
            JsonValue::Null => serde_json::Value::Null,
            JsonValue::Bool(b) => serde_json::Value::Bool(b),
            JsonValue::Integer(i) => serde_json::json!(i),
            JsonValue::UInteger(u) => serde_json::json!(u),
            JsonValue::Float(f) => serde_json::json!(f),
            JsonValue::Str(s) => serde_json::Value::String(s),
            JsonValue::Array(arr) => {
                serde_json::Value::Array(arr.into_iter().map(serde_json::Value::from).collect())
            }
            JsonValue::Object(obj) => serde_json::Value::Object(
                obj.into_iter()
                    .map(|(k, v)| (k, serde_json::Value::from(v)))
                    .collect(),
            ),
        }
    }
}
