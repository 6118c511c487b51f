use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use crate::text::string::escape_string_into;

/// Materialized object: field name to value, in document order.
pub type Map = IndexMap<String, Value>;

/// Dynamically typed value produced by materializing a [`crate::Node`].
///
/// `Null` is its own variant; it never collapses into `String("null")`.
#[derive(Clone, Debug, PartialEq, Default, Serialize)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Array(Vec<Value>),
    Object(Map),
}

impl Value {
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Floats as-is, integers widened.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(map) => map.get(key),
            _ => None,
        }
    }

    pub fn get_index(&self, index: usize) -> Option<&Value> {
        match self {
            Value::Array(items) => items.get(index),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Integer(i) => f.write_str(itoa::Buffer::new().format(*i)),
            Value::Float(fl) => f.write_str(ryu::Buffer::new().format(*fl)),
            Value::String(s) => write_quoted(f, s),
            Value::Array(items) => {
                write!(f, "[")?;
                for (i, v) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{v}")?;
                }
                write!(f, "]")
            }
            Value::Object(map) => {
                write!(f, "{{")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write_quoted(f, k)?;
                    write!(f, ": {v}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    let mut buf = String::with_capacity(text.len() + 2);
    buf.push('"');
    escape_string_into(&mut buf, text);
    buf.push('"');
    f.write_str(&buf)
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(b),
            Value::Integer(i) => serde_json::Value::Number(i.into()),
            Value::Float(f) => serde_json::Number::from_f64(f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::String(s) => serde_json::Value::String(s),
            Value::Array(items) => {
                serde_json::Value::Array(items.into_iter().map(Into::into).collect())
            }
            Value::Object(map) => {
                let mut new_obj = serde_json::Map::new();
                for (k, v) in map {
                    new_obj.insert(k, v.into());
                }
                serde_json::Value::Object(new_obj)
            }
        }
    }
}

impl From<&Value> for serde_json::Value {
    fn from(value: &Value) -> Self {
        value.clone().into()
    }
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;
    use serde_json::json;

    use super::Value;

    fn sample() -> Value {
        let mut map = IndexMap::new();
        map.insert("name".to_string(), Value::from("Ada"));
        map.insert("age".to_string(), Value::from(37));
        map.insert("ratio".to_string(), Value::from(0.5));
        map.insert(
            "tags".to_string(),
            Value::Array(vec![Value::Bool(true), Value::Null]),
        );
        Value::Object(map)
    }

    #[rstest::rstest]
    fn test_accessors() {
        let value = sample();
        assert!(value.as_object().is_some());
        assert_eq!(value.get("name").and_then(Value::as_str), Some("Ada"));
        assert_eq!(value.get("age").and_then(Value::as_i64), Some(37));
        assert_eq!(value.get("age").and_then(Value::as_f64), Some(37.0));
        assert_eq!(value.get("ratio").and_then(Value::as_i64), None);
        let tags = value.get("tags").unwrap();
        assert_eq!(tags.get_index(0).and_then(Value::as_bool), Some(true));
        assert!(tags.get_index(1).unwrap().is_null());
        assert!(tags.get_index(2).is_none());
        assert!(tags.get("0").is_none());
    }

    #[rstest::rstest]
    fn test_null_is_distinct_from_null_string() {
        assert_ne!(Value::Null, Value::from("null"));
        assert_eq!(Value::default(), Value::Null);
    }

    #[rstest::rstest]
    fn test_display_keeps_order() {
        assert_eq!(
            sample().to_string(),
            r#"{"name": "Ada", "age": 37, "ratio": 0.5, "tags": [true, null]}"#
        );
    }

    #[rstest::rstest]
    fn test_display_escapes_quotes_and_backslashes() {
        let mut map = IndexMap::new();
        map.insert("k\"ey".to_string(), Value::from("a\"b\\c"));
        assert_eq!(
            Value::Object(map).to_string(),
            r#"{"k\"ey": "a\"b\\c"}"#
        );
        assert_eq!(Value::from("wor\"ld").to_string(), r#""wor\"ld""#);
    }

    #[rstest::rstest]
    fn test_serde_json_conversion() {
        let converted: serde_json::Value = sample().into();
        assert_eq!(
            converted,
            json!({"name": "Ada", "age": 37, "ratio": 0.5, "tags": [true, null]})
        );
        let serialized = serde_json::to_string(&sample()).unwrap();
        assert_eq!(
            serialized,
            r#"{"name":"Ada","age":37,"ratio":0.5,"tags":[true,null]}"#
        );
    }

    #[rstest::rstest]
    fn test_non_finite_float_converts_to_null() {
        let converted: serde_json::Value = (&Value::Float(f64::NAN)).into();
        assert_eq!(converted, json!(null));
    }
}
