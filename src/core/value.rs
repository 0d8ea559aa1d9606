// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Decoded value type system.
//!
//! Provides the value tree produced by the decoders. It mirrors the JSON data
//! model with one extra variant, [`Value::Date`], which holds string leaves
//! that were revived into native dates.

use chrono::{DateTime, FixedOffset, SecondsFormat};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Native date type produced by revival.
///
/// Keeps the offset parsed from an ISO string; equality compares instants.
pub type DateValue = DateTime<FixedOffset>;

/// Type alias for a decoded object as member name -> value mapping.
///
/// Unordered: re-encoding does not keep the source member order.
pub type JsonObject = HashMap<String, Value>;

/// Decoded JSON value with native dates.
///
/// # Design Principles
///
/// - **Serde support**: All variants are serializable for downstream processing
/// - **Owned types**: Uses owned `String` and `Vec` for clarity and simplicity
/// - **Lossless numbers**: Integers stay integers, only real numbers become `Float64`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    // Null literal
    Null,

    // Boolean
    Bool(bool),

    // Numbers
    Int64(i64),
    UInt64(u64),
    Float64(f64),

    // String (UTF-8)
    String(String),

    // Revived date
    Date(DateValue),

    // Array of values
    Array(Vec<Value>),

    // Nested object
    Object(JsonObject),
}

impl Value {
    // ========================================================================
    // Type Checking Predicates
    // ========================================================================

    /// Check if this value is a numeric type.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Int64(_) | Value::UInt64(_) | Value::Float64(_))
    }

    /// Check if this value is a revived date.
    pub fn is_date(&self) -> bool {
        matches!(self, Value::Date(_))
    }

    /// Check if this value is a string.
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Check if this value is a container type (array or object).
    pub fn is_container(&self) -> bool {
        matches!(self, Value::Array(_) | Value::Object(_))
    }

    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Check if this value is falsy in the JSON host sense.
    ///
    /// `null`, `false`, zero, `NaN` and the empty string are falsy.
    /// Containers and dates never are.
    pub fn is_falsy(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Bool(b) => !b,
            Value::Int64(v) => *v == 0,
            Value::UInt64(v) => *v == 0,
            Value::Float64(v) => *v == 0.0 || v.is_nan(),
            Value::String(s) => s.is_empty(),
            Value::Date(_) | Value::Array(_) | Value::Object(_) => false,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Try to get the inner string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get the inner date.
    pub fn as_date(&self) -> Option<&DateValue> {
        match self {
            Value::Date(d) => Some(d),
            _ => None,
        }
    }

    /// Get the date as milliseconds since the Unix epoch.
    pub fn as_epoch_millis(&self) -> Option<i64> {
        self.as_date().map(|d| d.timestamp_millis())
    }

    /// Try to convert this value to f64 (for numeric values only).
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int64(v) => Some(*v as f64),
            Value::UInt64(v) => Some(*v as f64),
            Value::Float64(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to convert this value to i64 (for integer types only).
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int64(v) => Some(*v),
            Value::UInt64(v) => i64::try_from(*v).ok(),
            _ => None,
        }
    }

    /// Try to get the inner object.
    pub fn as_object(&self) -> Option<&JsonObject> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Try to get the inner array.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// Look up a member of an object value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|o| o.get(key))
    }

    /// Get the type name of this value as a string.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int64(_) => "int64",
            Value::UInt64(_) => "uint64",
            Value::Float64(_) => "float64",
            Value::String(_) => "string",
            Value::Date(_) => "date",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    // ========================================================================
    // serde_json Interop
    // ========================================================================

    /// Convert to a `serde_json::Value`.
    ///
    /// Dates become RFC 3339 strings with millisecond precision, which the
    /// ISO pattern recognizes again on the next decode. Non-finite floats
    /// become `null`.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Int64(i) => serde_json::Value::from(*i),
            Value::UInt64(u) => serde_json::Value::from(*u),
            Value::Float64(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Date(d) => {
                serde_json::Value::String(d.to_rfc3339_opts(SecondsFormat::Millis, true))
            }
            Value::Array(arr) => serde_json::Value::Array(arr.iter().map(Value::to_json).collect()),
            Value::Object(obj) => serde_json::Value::Object(
                obj.iter().map(|(k, v)| (k.clone(), v.to_json())).collect(),
            ),
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int64(i)
                } else if let Some(u) = n.as_u64() {
                    Value::UInt64(u)
                } else {
                    Value::Float64(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(arr) => Value::Array(arr.into_iter().map(Value::from).collect()),
            serde_json::Value::Object(obj) => {
                Value::Object(obj.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
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

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int64(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float64(v)
    }
}

impl From<DateValue> for Value {
    fn from(d: DateValue) -> Self {
        Value::Date(d)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::Int64(v) => write!(f, "{v}"),
            Value::UInt64(v) => write!(f, "{v}"),
            Value::Float64(v) => write!(f, "{v}"),
            Value::String(v) => write!(f, "\"{v}\""),
            Value::Date(v) => write!(f, "Date({})", v.to_rfc3339()),
            Value::Array(v) => write!(f, "[{} elements]", v.len()),
            Value::Object(v) => write!(f, "{{{} fields}}", v.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_checking() {
        assert!(Value::Int64(42).is_numeric());
        assert!(Value::Float64(2.5).is_numeric());
        assert!(!Value::String("hello".to_string()).is_numeric());
        assert!(Value::Array(vec![]).is_container());
        assert!(Value::Null.is_null());
    }

    #[test]
    fn test_falsy() {
        assert!(Value::Null.is_falsy());
        assert!(Value::Bool(false).is_falsy());
        assert!(Value::Int64(0).is_falsy());
        assert!(Value::Float64(f64::NAN).is_falsy());
        assert!(Value::from("").is_falsy());

        assert!(!Value::Bool(true).is_falsy());
        assert!(!Value::Int64(-1).is_falsy());
        assert!(!Value::from("0").is_falsy());
        assert!(!Value::Array(vec![]).is_falsy());
        assert!(!Value::Object(JsonObject::new()).is_falsy());
    }

    #[test]
    fn test_from_serde_json() {
        let json = serde_json::json!({"n": 1, "big": u64::MAX, "f": 1.5, "s": "x", "a": [null, true]});
        let value = Value::from(json);

        assert_eq!(value.get("n"), Some(&Value::Int64(1)));
        assert_eq!(value.get("big"), Some(&Value::UInt64(u64::MAX)));
        assert_eq!(value.get("f"), Some(&Value::Float64(1.5)));
        assert_eq!(value.get("s"), Some(&Value::from("x")));
        assert_eq!(
            value.get("a"),
            Some(&Value::Array(vec![Value::Null, Value::Bool(true)]))
        );
    }

    #[test]
    fn test_date_to_json_uses_iso_millis() {
        let date = DateTime::parse_from_rfc3339("2014-03-01T10:00:00Z").unwrap();
        let json = Value::Date(date).to_json();
        assert_eq!(json, serde_json::json!("2014-03-01T10:00:00.000Z"));
    }

    #[test]
    fn test_as_epoch_millis() {
        let date = DateTime::parse_from_rfc3339("1970-01-01T00:00:01Z").unwrap();
        assert_eq!(Value::Date(date).as_epoch_millis(), Some(1000));
        assert_eq!(Value::from("1970").as_epoch_millis(), None);
    }

    #[test]
    fn test_serde_keeps_dates_typed() {
        let date = DateTime::parse_from_rfc3339("2014-03-01T10:00:00.250+01:00").unwrap();
        let mut object = JsonObject::new();
        object.insert("at".to_string(), Value::Date(date));
        object.insert("n".to_string(), Value::Int64(-3));
        object.insert(
            "tags".to_string(),
            Value::Array(vec![Value::from("a"), Value::Null]),
        );
        let value = Value::Object(object);

        let text = serde_json::to_string(&value).unwrap();
        let back: Value = serde_json::from_str(&text).unwrap();

        assert_eq!(back, value);
        assert_eq!(back.get("at").and_then(Value::as_date), Some(&date));
    }

    #[test]
    fn test_option_into_value() {
        assert_eq!(Value::from(None::<&str>), Value::Null);
        assert_eq!(Value::from(Some("N/A")), Value::from("N/A"));
    }
}
