//! Structured key-value fields
//!
//! A [`Field`] is a key plus a tagged [`FieldValue`]. Besides plain scalars the
//! tag covers three structural cases the JSON encoder understands:
//!
//! - `Object`: a composite field, written as a nested object
//! - `Namespace`: a marker; every later sibling field nests under its key
//! - `Unknown`: "no field". Never written, silently dropped wherever fields
//!   are collected for a record

use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;
use std::time::Duration;

/// Value type for structured logging fields
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    String(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    Null,
    /// Pre-serialized value produced by [`Field::any`]
    Json(serde_json::Value),
    Object(Vec<Field>),
    Namespace,
    Unknown,
}

impl FieldValue {
    /// Convert to serde_json::Value for JSON serialization
    ///
    /// `Namespace` and `Unknown` carry no value of their own and map to `None`;
    /// the encoder treats them structurally.
    #[must_use]
    pub fn to_json_value(&self) -> Option<serde_json::Value> {
        let value = match self {
            FieldValue::String(s) => serde_json::Value::String(s.clone()),
            FieldValue::Int(i) => serde_json::Value::Number((*i).into()),
            FieldValue::UInt(u) => serde_json::Value::Number((*u).into()),
            FieldValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            FieldValue::Bool(b) => serde_json::Value::Bool(*b),
            FieldValue::Null => serde_json::Value::Null,
            FieldValue::Json(v) => v.clone(),
            FieldValue::Object(fields) => serde_json::Value::Object(encode_fields(fields)),
            FieldValue::Namespace | FieldValue::Unknown => return None,
        };
        Some(value)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::String(s) => write!(f, "{}", s),
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::UInt(u) => write!(f, "{}", u),
            FieldValue::Float(fl) => write!(f, "{}", fl),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Null => write!(f, "null"),
            FieldValue::Json(v) => write!(f, "{}", v),
            FieldValue::Object(fields) => {
                write!(f, "{{")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", field)?;
                }
                write!(f, "}}")
            }
            FieldValue::Namespace => write!(f, "<namespace>"),
            FieldValue::Unknown => write!(f, "<unknown>"),
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Int(i)
    }
}

impl From<i32> for FieldValue {
    fn from(i: i32) -> Self {
        FieldValue::Int(i as i64)
    }
}

impl From<u64> for FieldValue {
    fn from(u: u64) -> Self {
        FieldValue::UInt(u)
    }
}

impl From<u32> for FieldValue {
    fn from(u: u32) -> Self {
        FieldValue::UInt(u as u64)
    }
}

impl From<usize> for FieldValue {
    fn from(u: usize) -> Self {
        FieldValue::UInt(u as u64)
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(FieldValue::Null)
    }
}

/// A single structured field
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub key: String,
    pub value: FieldValue,
}

impl Field {
    pub fn new<K, V>(key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn string(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(key, FieldValue::String(value.into()))
    }

    pub fn int(key: impl Into<String>, value: i64) -> Self {
        Self::new(key, FieldValue::Int(value))
    }

    pub fn uint(key: impl Into<String>, value: u64) -> Self {
        Self::new(key, FieldValue::UInt(value))
    }

    pub fn float(key: impl Into<String>, value: f64) -> Self {
        Self::new(key, FieldValue::Float(value))
    }

    pub fn bool(key: impl Into<String>, value: bool) -> Self {
        Self::new(key, FieldValue::Bool(value))
    }

    pub fn null(key: impl Into<String>) -> Self {
        Self::new(key, FieldValue::Null)
    }

    /// Field holding any serializable value
    ///
    /// A value that fails to serialize produces an unknown field, which is
    /// dropped from the record instead of failing the log call.
    pub fn any<T: Serialize + ?Sized>(key: impl Into<String>, value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(json) => Self::new(key, FieldValue::Json(json)),
            Err(_) => Self::skip(),
        }
    }

    /// Composite field written as a nested object
    pub fn object(key: impl Into<String>, fields: Vec<Field>) -> Self {
        Self::new(key, FieldValue::Object(fields))
    }

    /// Marker opening a nested object; later sibling fields are written inside it
    pub fn namespace(key: impl Into<String>) -> Self {
        Self::new(key, FieldValue::Namespace)
    }

    pub fn error(key: impl Into<String>, err: &dyn std::error::Error) -> Self {
        Self::string(key, err.to_string())
    }

    /// Duration in milliseconds
    pub fn duration(key: impl Into<String>, value: Duration) -> Self {
        Self::float(key, value.as_nanos() as f64 / 1_000_000.0)
    }

    /// The "no field" sentinel
    pub fn skip() -> Self {
        Self {
            key: String::new(),
            value: FieldValue::Unknown,
        }
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        !matches!(self.value, FieldValue::Unknown)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// Encode fields into a fresh object, honouring namespaces and skipping unknowns
pub fn encode_fields(fields: &[Field]) -> Map<String, Value> {
    let mut map = Map::new();
    encode_into(&mut map, &mut fields.iter());
    map
}

/// Encode `fields` into `map` until the iterator is exhausted
///
/// A namespace consumes the rest of the iterator into its nested object.
pub(crate) fn encode_into<'a, I>(map: &mut Map<String, Value>, fields: &mut I)
where
    I: Iterator<Item = &'a Field>,
{
    while let Some(field) = fields.next() {
        match field.value {
            FieldValue::Unknown => continue,
            FieldValue::Namespace => {
                let mut nested = Map::new();
                encode_into(&mut nested, fields);
                map.insert(field.key.clone(), Value::Object(nested));
                return;
            }
            ref value => {
                if let Some(json) = value.to_json_value() {
                    map.insert(field.key.clone(), json);
                }
            }
        }
    }
}

/// Build an array of [`Field`]s from `key => value` pairs
///
/// # Example
///
/// ```
/// use rust_monolog::{fields, Field};
///
/// let fs = fields!["user" => "alice", "attempts" => 3];
/// assert_eq!(fs[0], Field::string("user", "alice"));
/// assert_eq!(fs[1], Field::int("attempts", 3));
/// ```
#[macro_export]
macro_rules! fields {
    () => {{
        let empty: [$crate::Field; 0] = [];
        empty
    }};
    ($($key:expr => $value:expr),+ $(,)?) => {
        [$($crate::Field::new($key, $value)),+]
    };
}
