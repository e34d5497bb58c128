//! JSON text output.
//!
//! This module provides the [`Serializer`] that renders a
//! [`JsonValue`] tree as JSON text, in either of the two layouts the
//! engine produces:
//!
//! - **Pretty**: one member per line, configurable indentation, a space
//!   after each colon
//! - **Compact**: no whitespace between tokens at all
//!
//! Both layouts emit object members in the order the tree holds them and
//! escape strings identically, so pretty and compact output of the same
//! tree differ only in whitespace.
//!
//! It also provides [`JsonValueSerializer`], the `serde::Serializer` that
//! builds a [`JsonValue`] from any `Serialize` type. This backs
//! [`to_value`].
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use json_tidy::{beautify, minify};
//!
//! let pretty = beautify(r#"{"a":1,"b":[true,null]}"#).unwrap();
//! assert_eq!(pretty.output, "{\n  \"a\": 1,\n  \"b\": [\n    true,\n    null\n  ]\n}");
//! ```
//!
//! ## Direct Serializer Usage
//!
//! ```rust
//! use json_tidy::{jval, FormatOptions, Serializer};
//!
//! let mut serializer = Serializer::new(FormatOptions::compact());
//! serializer.write_value(&jval!([1, 2, 3]));
//! assert_eq!(serializer.into_inner(), "[1,2,3]");
//! ```

use crate::{Error, FormatOptions, JsonMap, JsonValue, Number, Result};
use serde::{ser, Serialize};

/// The JSON text serializer.
///
/// Writes a [`JsonValue`] tree into an owned output buffer according to
/// [`FormatOptions`]. Created via [`Serializer::new`]; the finished text is
/// taken out with [`Serializer::into_inner`].
pub struct Serializer {
    output: String,
    options: FormatOptions,
    indent_level: usize,
}

impl Serializer {
    #[must_use]
    pub fn new(options: FormatOptions) -> Self {
        Serializer {
            output: String::with_capacity(256),
            options,
            indent_level: 0,
        }
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.output
    }

    /// Writes one JSON value at the current indentation level.
    pub fn write_value(&mut self, value: &JsonValue) {
        match value {
            JsonValue::Null => self.output.push_str("null"),
            JsonValue::Bool(b) => self.output.push_str(if *b { "true" } else { "false" }),
            JsonValue::Number(n) => self.output.push_str(&n.to_string()),
            JsonValue::String(s) => self.write_string(s),
            JsonValue::Array(items) => self.write_array(items),
            JsonValue::Object(map) => self.write_object(map),
        }
    }

    fn write_array(&mut self, items: &[JsonValue]) {
        if items.is_empty() {
            self.output.push_str("[]");
            return;
        }
        self.output.push('[');
        self.indent_level += 1;
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.output.push(',');
            }
            self.write_newline_indent();
            self.write_value(item);
        }
        self.indent_level -= 1;
        self.write_newline_indent();
        self.output.push(']');
    }

    fn write_object(&mut self, map: &JsonMap) {
        if map.is_empty() {
            self.output.push_str("{}");
            return;
        }
        self.output.push('{');
        self.indent_level += 1;
        for (i, (key, value)) in map.iter().enumerate() {
            if i > 0 {
                self.output.push(',');
            }
            self.write_newline_indent();
            self.write_string(key);
            self.output.push(':');
            if self.options.pretty {
                self.output.push(' ');
            }
            self.write_value(value);
        }
        self.indent_level -= 1;
        self.write_newline_indent();
        self.output.push('}');
    }

    fn write_newline_indent(&mut self) {
        if self.options.pretty {
            self.output.push('\n');
            for _ in 0..self.indent_level * self.options.indent {
                self.output.push(' ');
            }
        }
    }

    /// Writes a string literal with its quotes. The two mandatory escapes
    /// (`"` and `\`) and the short forms for common control characters are
    /// used; any other character below U+0020 becomes `\u00XX`. Everything
    /// else passes through verbatim, multibyte characters included.
    fn write_string(&mut self, s: &str) {
        self.output.push('"');
        for ch in s.chars() {
            match ch {
                '"' => self.output.push_str("\\\""),
                '\\' => self.output.push_str("\\\\"),
                '\n' => self.output.push_str("\\n"),
                '\r' => self.output.push_str("\\r"),
                '\t' => self.output.push_str("\\t"),
                '\u{0008}' => self.output.push_str("\\b"),
                '\u{000C}' => self.output.push_str("\\f"),
                ch if (ch as u32) < 0x20 => {
                    self.output.push_str(&format!("\\u{:04x}", ch as u32));
                }
                ch => self.output.push(ch),
            }
        }
        self.output.push('"');
    }
}

/// Converts any `Serialize` type into a [`JsonValue`] tree.
///
/// # Errors
///
/// Fails only when the type cannot be represented as JSON, e.g. a map
/// with non-string keys.
///
/// # Examples
///
/// ```rust
/// use json_tidy::to_value;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert_eq!(value.as_object().unwrap().get("x").and_then(|v| v.as_i64()), Some(1));
/// ```
pub fn to_value<T>(value: &T) -> Result<JsonValue>
where
    T: Serialize + ?Sized,
{
    value.serialize(JsonValueSerializer)
}

/// A `serde::Serializer` whose output type is [`JsonValue`].
pub struct JsonValueSerializer;

pub struct SerializeVec {
    vec: Vec<JsonValue>,
}

pub struct SerializeTupleVariant {
    name: String,
    vec: Vec<JsonValue>,
}

pub struct SerializeMap {
    map: JsonMap,
    current_key: Option<String>,
}

pub struct SerializeStructVariant {
    name: String,
    map: JsonMap,
}

impl ser::Serializer for JsonValueSerializer {
    type Ok = JsonValue;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeTupleVariant;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;
    type SerializeStructVariant = SerializeStructVariant;

    fn serialize_bool(self, v: bool) -> Result<JsonValue> {
        Ok(JsonValue::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<JsonValue> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i16(self, v: i16) -> Result<JsonValue> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i32(self, v: i32) -> Result<JsonValue> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i64(self, v: i64) -> Result<JsonValue> {
        Ok(JsonValue::Number(Number::Integer(v)))
    }

    fn serialize_u8(self, v: u8) -> Result<JsonValue> {
        self.serialize_i64(v as i64)
    }

    fn serialize_u16(self, v: u16) -> Result<JsonValue> {
        self.serialize_i64(v as i64)
    }

    fn serialize_u32(self, v: u32) -> Result<JsonValue> {
        self.serialize_i64(v as i64)
    }

    fn serialize_u64(self, v: u64) -> Result<JsonValue> {
        if v <= i64::MAX as u64 {
            Ok(JsonValue::Number(Number::Integer(v as i64)))
        } else {
            Ok(JsonValue::Number(Number::Float(v as f64)))
        }
    }

    fn serialize_f32(self, v: f32) -> Result<JsonValue> {
        Ok(JsonValue::Number(Number::Float(v as f64)))
    }

    fn serialize_f64(self, v: f64) -> Result<JsonValue> {
        Ok(JsonValue::Number(Number::Float(v)))
    }

    fn serialize_char(self, v: char) -> Result<JsonValue> {
        Ok(JsonValue::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<JsonValue> {
        Ok(JsonValue::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<JsonValue> {
        let vec = v
            .iter()
            .map(|&b| JsonValue::Number(Number::Integer(b as i64)))
            .collect();
        Ok(JsonValue::Array(vec))
    }

    fn serialize_none(self) -> Result<JsonValue> {
        Ok(JsonValue::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<JsonValue>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<JsonValue> {
        Ok(JsonValue::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<JsonValue> {
        Ok(JsonValue::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<JsonValue> {
        Ok(JsonValue::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<JsonValue>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<JsonValue>
    where
        T: ?Sized + Serialize,
    {
        let mut map = JsonMap::new();
        map.insert(variant.to_string(), to_value(value)?);
        Ok(JsonValue::Object(map))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec::new())
    }

    fn serialize_tuple(self, _len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new())
    }

    fn serialize_tuple_struct(self, _name: &'static str, _len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new())
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<SerializeTupleVariant> {
        Ok(SerializeTupleVariant {
            name: variant.to_string(),
            vec: Vec::new(),
        })
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap::new())
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<SerializeMap> {
        Ok(SerializeMap::new())
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<SerializeStructVariant> {
        Ok(SerializeStructVariant {
            name: variant.to_string(),
            map: JsonMap::new(),
        })
    }
}

impl SerializeVec {
    fn new() -> Self {
        SerializeVec { vec: Vec::new() }
    }
}

impl SerializeMap {
    fn new() -> Self {
        SerializeMap {
            map: JsonMap::new(),
            current_key: None,
        }
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = JsonValue;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<JsonValue> {
        Ok(JsonValue::Array(self.vec))
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = JsonValue;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<JsonValue> {
        Ok(JsonValue::Array(self.vec))
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = JsonValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<JsonValue> {
        Ok(JsonValue::Array(self.vec))
    }
}

impl ser::SerializeTupleVariant for SerializeTupleVariant {
    type Ok = JsonValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<JsonValue> {
        let mut map = JsonMap::new();
        map.insert(self.name, JsonValue::Array(self.vec));
        Ok(JsonValue::Object(map))
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = JsonValue;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        match to_value(key)? {
            JsonValue::String(s) => {
                self.current_key = Some(s);
                Ok(())
            }
            _ => Err(Error::custom("map keys must be strings")),
        }
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.map.insert(key, to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<JsonValue> {
        Ok(JsonValue::Object(self.map))
    }
}

impl ser::SerializeStruct for SerializeMap {
    type Ok = JsonValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<JsonValue> {
        Ok(JsonValue::Object(self.map))
    }
}

impl ser::SerializeStructVariant for SerializeStructVariant {
    type Ok = JsonValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key.to_string(), to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<JsonValue> {
        let mut map = JsonMap::new();
        map.insert(self.name, JsonValue::Object(self.map));
        Ok(JsonValue::Object(map))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jval;

    fn pretty(value: &JsonValue) -> String {
        let mut ser = Serializer::new(FormatOptions::pretty());
        ser.write_value(value);
        ser.into_inner()
    }

    fn compact(value: &JsonValue) -> String {
        let mut ser = Serializer::new(FormatOptions::compact());
        ser.write_value(value);
        ser.into_inner()
    }

    #[test]
    fn pretty_object_layout() {
        let value = jval!({"a": 1, "b": [true, null]});
        assert_eq!(
            pretty(&value),
            "{\n  \"a\": 1,\n  \"b\": [\n    true,\n    null\n  ]\n}"
        );
    }

    #[test]
    fn compact_has_no_whitespace() {
        let value = jval!({"a": 1, "b": [true, null], "c": "x y"});
        assert_eq!(compact(&value), r#"{"a":1,"b":[true,null],"c":"x y"}"#);
    }

    #[test]
    fn empty_containers_stay_inline() {
        assert_eq!(pretty(&jval!({})), "{}");
        assert_eq!(pretty(&jval!([])), "[]");
        assert_eq!(pretty(&jval!({"a": [], "b": {}})), "{\n  \"a\": [],\n  \"b\": {}\n}");
    }

    #[test]
    fn custom_indent_width() {
        let mut ser = Serializer::new(FormatOptions::pretty().with_indent(4));
        ser.write_value(&jval!({"a": 1}));
        assert_eq!(ser.into_inner(), "{\n    \"a\": 1\n}");
    }

    #[test]
    fn string_escapes() {
        assert_eq!(compact(&jval!("a\"b\\c")), r#""a\"b\\c""#);
        assert_eq!(compact(&jval!("\n\r\t\u{0008}\u{000C}")), r#""\n\r\t\b\f""#);
        assert_eq!(compact(&jval!("\u{0001}")), "\"\\u0001\"");
        // Multibyte characters pass through unescaped
        assert_eq!(compact(&jval!("héllo")), "\"héllo\"");
    }

    #[test]
    fn float_values_keep_a_decimal_marker() {
        assert_eq!(compact(&jval!(1.0)), "1.0");
        assert_eq!(compact(&jval!(2.5)), "2.5");
        assert_eq!(compact(&jval!(1)), "1");
    }

    #[test]
    fn to_value_builds_trees() {
        use std::collections::BTreeMap;

        #[derive(Serialize)]
        struct Point {
            x: i32,
            y: i32,
        }

        let value = to_value(&Point { x: 1, y: 2 }).unwrap();
        assert_eq!(value, jval!({"x": 1, "y": 2}));

        let mut map = BTreeMap::new();
        map.insert("k", vec![1, 2]);
        assert_eq!(to_value(&map).unwrap(), jval!({"k": [1, 2]}));

        assert_eq!(to_value(&Option::<i32>::None).unwrap(), jval!(null));
        assert_eq!(to_value(&Some(7)).unwrap(), jval!(7));
    }

    #[test]
    fn to_value_rejects_non_string_keys() {
        use std::collections::BTreeMap;

        let mut map = BTreeMap::new();
        map.insert(1, "one");
        assert!(to_value(&map).is_err());
    }

    #[test]
    fn to_value_large_u64_becomes_float() {
        let value = to_value(&u64::MAX).unwrap();
        assert!(matches!(value, JsonValue::Number(Number::Float(_))));
    }
}
