//! Dynamic value representation for parsed JSON documents.
//!
//! This module provides the [`JsonValue`] enum which represents any valid
//! JSON value, plus the structural tree walks the engine's analysis step
//! relies on (nesting depth, key counting, recursive key sorting).
//!
//! ## Core Types
//!
//! - [`JsonValue`]: a closed sum type over the six JSON value kinds
//!   (null, boolean, number, string, array, object)
//! - [`Number`]: an integer/float tagged numeric value
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use json_tidy::JsonValue;
//!
//! let null = JsonValue::Null;
//! let boolean = JsonValue::from(true);
//! let number = JsonValue::from(42);
//! let text = JsonValue::from("hello");
//!
//! // Using the jval! macro
//! use json_tidy::jval;
//! let obj = jval!({
//!     "name": "Alice",
//!     "age": 30
//! });
//! ```
//!
//! ### Structural Analysis
//!
//! ```rust
//! use json_tidy::parse;
//!
//! let value = parse(r#"{"a":{"b":1}}"#).unwrap();
//! assert_eq!(value.depth(), 2);
//! assert_eq!(value.key_count(), 2);
//! ```
//!
//! ### Key Sorting
//!
//! ```rust
//! use json_tidy::parse;
//!
//! let value = parse(r#"{"b":2,"a":1}"#).unwrap();
//! let sorted = value.sorted();
//! let keys: Vec<_> = sorted.as_object().unwrap().keys().cloned().collect();
//! assert_eq!(keys, vec!["a", "b"]);
//! ```

use crate::JsonMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A dynamically-typed representation of any valid JSON value.
///
/// The engine exclusively owns a tree of these for the duration of one
/// operation; it is produced by [`parse`](crate::parse), transformed, and
/// discarded after serialization.
///
/// # Examples
///
/// ```rust
/// use json_tidy::{JsonValue, Number};
///
/// let null = JsonValue::Null;
/// let num = JsonValue::Number(Number::Integer(42));
/// let text = JsonValue::String("hello".to_string());
///
/// assert!(null.is_null());
/// assert!(num.is_number());
/// assert!(text.is_string());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum JsonValue {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<JsonValue>),
    Object(JsonMap),
}

/// A JSON numeric value.
///
/// The parser yields `Integer` for tokens with no fraction or exponent that
/// fit in `i64`, and `Float` for everything else. The distinction survives
/// serialization: floats always render with a fractional part or exponent,
/// so a re-parse reproduces the same variant.
///
/// # Examples
///
/// ```rust
/// use json_tidy::Number;
///
/// let integer = Number::Integer(42);
/// let float = Number::Float(3.5);
///
/// assert!(integer.is_integer());
/// assert_eq!(integer.as_i64(), Some(42));
/// assert_eq!(float.as_f64(), 3.5);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    /// Returns `true` if this is an integer value.
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    /// Returns `true` if this is a floating-point value.
    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Converts this number to an `i64` if possible.
    ///
    /// Returns `Some(i64)` for integers and for floats with no fractional
    /// part that fit in `i64` range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_tidy::Number;
    ///
    /// assert_eq!(Number::Integer(42).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.0).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.5).as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(i) => Some(*i),
            Number::Float(f) => {
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                    Some(*f as i64)
                } else {
                    None
                }
            }
        }
    }

    /// Converts this number to an `f64`. Always succeeds.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
        }
    }
}

impl fmt::Display for Number {
    /// Writes the JSON token for this number.
    ///
    /// Floats always carry a fractional part or exponent (`1.0`, not `1`),
    /// and non-finite floats render as `null` since JSON has no token for
    /// them.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) => {
                if !fl.is_finite() {
                    return write!(f, "null");
                }
                let repr = fl.to_string();
                if repr.contains('.') || repr.contains('e') || repr.contains('E') {
                    write!(f, "{}", repr)
                } else {
                    write!(f, "{}.0", repr)
                }
            }
        }
    }
}

impl From<i8> for Number {
    fn from(value: i8) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<i16> for Number {
    fn from(value: i16) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Integer(value)
    }
}

impl From<u8> for Number {
    fn from(value: u8) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<u16> for Number {
    fn from(value: u16) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Float(value as f64)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl JsonValue {
    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }

    /// Returns `true` if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, JsonValue::Bool(_))
    }

    /// Returns `true` if the value is a number.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, JsonValue::Number(_))
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, JsonValue::String(_))
    }

    /// Returns `true` if the value is an array.
    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, JsonValue::Array(_))
    }

    /// Returns `true` if the value is an object.
    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, JsonValue::Object(_))
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JsonValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it. Otherwise
    /// returns `None`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is an integer or a whole-number float, returns it.
    /// Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            JsonValue::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    /// If the value is a number, returns it as `f64`. Otherwise returns
    /// `None`.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            JsonValue::Number(n) => Some(n.as_f64()),
            _ => None,
        }
    }

    /// If the value is an array, returns a reference to it. Otherwise
    /// returns `None`.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<JsonValue>> {
        match self {
            JsonValue::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// If the value is an object, returns a reference to it. Otherwise
    /// returns `None`.
    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&JsonMap> {
        match self {
            JsonValue::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// The number of nested container levels in this tree.
    ///
    /// An empty container counts one level; a non-empty container counts
    /// one plus the deepest container among its children, where scalar
    /// children contribute no level of their own. A scalar at the root
    /// still occupies one level.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_tidy::parse;
    ///
    /// assert_eq!(parse("{}").unwrap().depth(), 1);
    /// assert_eq!(parse(r#"{"a":{"b":1}}"#).unwrap().depth(), 2);
    /// assert_eq!(parse("[1,[2,[3]]]").unwrap().depth(), 3);
    /// ```
    #[must_use]
    pub fn depth(&self) -> usize {
        match self.container_depth() {
            0 => 1,
            d => d,
        }
    }

    fn container_depth(&self) -> usize {
        match self {
            JsonValue::Array(items) => {
                1 + items
                    .iter()
                    .map(JsonValue::container_depth)
                    .max()
                    .unwrap_or(0)
            }
            JsonValue::Object(map) => {
                1 + map
                    .values()
                    .map(JsonValue::container_depth)
                    .max()
                    .unwrap_or(0)
            }
            _ => 0,
        }
    }

    /// The total number of key-value pairs across every nested object in
    /// this tree. Array elements are traversed but contribute no count
    /// themselves.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_tidy::parse;
    ///
    /// let value = parse(r#"{"a":1,"b":[{"c":2}]}"#).unwrap();
    /// assert_eq!(value.key_count(), 3);
    /// ```
    #[must_use]
    pub fn key_count(&self) -> usize {
        match self {
            JsonValue::Object(map) => {
                map.len() + map.values().map(JsonValue::key_count).sum::<usize>()
            }
            JsonValue::Array(items) => items.iter().map(JsonValue::key_count).sum(),
            _ => 0,
        }
    }

    /// Rebuilds the tree with every object's keys in ascending code-point
    /// order. Array element order is never altered; scalars pass through
    /// unchanged.
    ///
    /// Sorting is idempotent: `v.sorted().sorted() == v.sorted()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_tidy::parse;
    ///
    /// let sorted = parse(r#"{"b":2,"a":1}"#).unwrap().sorted();
    /// let keys: Vec<_> = sorted.as_object().unwrap().keys().cloned().collect();
    /// assert_eq!(keys, vec!["a", "b"]);
    /// ```
    #[must_use]
    pub fn sorted(&self) -> JsonValue {
        match self {
            JsonValue::Object(map) => {
                let mut entries: Vec<_> =
                    map.iter().map(|(k, v)| (k.clone(), v.sorted())).collect();
                entries.sort_by(|a, b| a.0.cmp(&b.0));
                JsonValue::Object(entries.into_iter().collect())
            }
            JsonValue::Array(items) => {
                JsonValue::Array(items.iter().map(JsonValue::sorted).collect())
            }
            other => other.clone(),
        }
    }
}

impl Serialize for JsonValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            JsonValue::Null => serializer.serialize_unit(),
            JsonValue::Bool(b) => serializer.serialize_bool(*b),
            JsonValue::Number(Number::Integer(i)) => serializer.serialize_i64(*i),
            JsonValue::Number(Number::Float(f)) => serializer.serialize_f64(*f),
            JsonValue::String(s) => serializer.serialize_str(s),
            JsonValue::Array(arr) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            JsonValue::Object(obj) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(obj.len()))?;
                for (k, v) in obj.iter() {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for JsonValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct JsonValueVisitor;

        impl<'de> Visitor<'de> for JsonValueVisitor {
            type Value = JsonValue;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any valid JSON value")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(JsonValue::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(JsonValue::Number(Number::Integer(value)))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                if value <= i64::MAX as u64 {
                    Ok(JsonValue::Number(Number::Integer(value as i64)))
                } else {
                    Ok(JsonValue::Number(Number::Float(value as f64)))
                }
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(JsonValue::Number(Number::Float(value)))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(JsonValue::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(JsonValue::String(value))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(JsonValue::Null)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(JsonValue::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut vec = Vec::new();
                while let Some(elem) = seq.next_element()? {
                    vec.push(elem);
                }
                Ok(JsonValue::Array(vec))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut values = JsonMap::new();
                while let Some((key, value)) = map.next_entry()? {
                    values.insert(key, value);
                }
                Ok(JsonValue::Object(values))
            }
        }

        deserializer.deserialize_any(JsonValueVisitor)
    }
}

impl TryFrom<JsonValue> for i64 {
    type Error = crate::Error;

    fn try_from(value: JsonValue) -> crate::Result<Self> {
        match value {
            JsonValue::Number(Number::Integer(i)) => Ok(i),
            JsonValue::Number(Number::Float(f)) => {
                if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
                    Ok(f as i64)
                } else {
                    Err(crate::Error::custom(format!(
                        "cannot convert float {} to i64",
                        f
                    )))
                }
            }
            _ => Err(crate::Error::custom(format!(
                "expected integer, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<JsonValue> for f64 {
    type Error = crate::Error;

    fn try_from(value: JsonValue) -> crate::Result<Self> {
        match value {
            JsonValue::Number(n) => Ok(n.as_f64()),
            _ => Err(crate::Error::custom(format!(
                "expected number, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<JsonValue> for bool {
    type Error = crate::Error;

    fn try_from(value: JsonValue) -> crate::Result<Self> {
        match value {
            JsonValue::Bool(b) => Ok(b),
            _ => Err(crate::Error::custom(format!(
                "expected bool, found {:?}",
                value
            ))),
        }
    }
}

impl TryFrom<JsonValue> for String {
    type Error = crate::Error;

    fn try_from(value: JsonValue) -> crate::Result<Self> {
        match value {
            JsonValue::String(s) => Ok(s),
            _ => Err(crate::Error::custom(format!(
                "expected string, found {:?}",
                value
            ))),
        }
    }
}

impl From<bool> for JsonValue {
    fn from(value: bool) -> Self {
        JsonValue::Bool(value)
    }
}

impl From<i8> for JsonValue {
    fn from(value: i8) -> Self {
        JsonValue::Number(Number::Integer(value as i64))
    }
}

impl From<i16> for JsonValue {
    fn from(value: i16) -> Self {
        JsonValue::Number(Number::Integer(value as i64))
    }
}

impl From<i32> for JsonValue {
    fn from(value: i32) -> Self {
        JsonValue::Number(Number::Integer(value as i64))
    }
}

impl From<i64> for JsonValue {
    fn from(value: i64) -> Self {
        JsonValue::Number(Number::Integer(value))
    }
}

impl From<u8> for JsonValue {
    fn from(value: u8) -> Self {
        JsonValue::Number(Number::Integer(value as i64))
    }
}

impl From<u16> for JsonValue {
    fn from(value: u16) -> Self {
        JsonValue::Number(Number::Integer(value as i64))
    }
}

impl From<u32> for JsonValue {
    fn from(value: u32) -> Self {
        JsonValue::Number(Number::Integer(value as i64))
    }
}

impl From<f32> for JsonValue {
    fn from(value: f32) -> Self {
        JsonValue::Number(Number::Float(value as f64))
    }
}

impl From<f64> for JsonValue {
    fn from(value: f64) -> Self {
        JsonValue::Number(Number::Float(value))
    }
}

impl From<String> for JsonValue {
    fn from(value: String) -> Self {
        JsonValue::String(value)
    }
}

impl From<&str> for JsonValue {
    fn from(value: &str) -> Self {
        JsonValue::String(value.to_string())
    }
}

impl From<Vec<JsonValue>> for JsonValue {
    fn from(value: Vec<JsonValue>) -> Self {
        JsonValue::Array(value)
    }
}

impl From<JsonMap> for JsonValue {
    fn from(value: JsonMap) -> Self {
        JsonValue::Object(value)
    }
}
