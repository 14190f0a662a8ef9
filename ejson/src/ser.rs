use crate::error::{Error, Result};
use crate::options::{SerializerOptions, StringEscape, Style};
use crate::value::{Map, Value};
use serde::ser;
use std::fmt::{self, Write};

/// Renders a [`Value`] tree as text into any [`fmt::Write`].
///
/// The serializer only reads the tree; rendering the same value twice always
/// produces the same text.
pub struct Serializer<W> {
    writer: W,
    options: SerializerOptions,
}

impl<W: Write> Serializer<W> {
    pub fn new(writer: W, options: SerializerOptions) -> Self {
        Serializer { writer, options }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    pub fn serialize_value(&mut self, value: &Value) -> fmt::Result {
        match self.options.style {
            Style::Compact => self.write_compact(value),
            Style::Indented => self.write_indented(value, 0),
        }
    }

    fn write_spaces(&mut self, n: usize) -> fmt::Result {
        for _ in 0..n {
            self.writer.write_char(' ')?;
        }
        Ok(())
    }

    fn write_scalar(&mut self, value: &Value) -> fmt::Result {
        match value {
            Value::Null => self.writer.write_str("null"),
            Value::Bool(b) => self.writer.write_str(if *b { "true" } else { "false" }),
            Value::Int(n) => write!(self.writer, "{}", n),
            Value::Double(n) => self.write_double(*n),
            Value::String(s) => {
                let quoted = quote(s, self.options.escape);
                self.writer.write_str(&quoted)
            }
            Value::Array(_) | Value::Object(_) => self.write_compact(value),
        }
    }

    // Shortest round-trip decimal, never exponent notation. A `.0` suffix keeps
    // integral doubles distinguishable from integers.
    fn write_double(&mut self, n: f64) -> fmt::Result {
        if !n.is_finite() {
            return self.writer.write_str("null");
        }
        let text = n.to_string();
        self.writer.write_str(&text)?;
        if !text.contains('.') {
            self.writer.write_str(".0")?;
        }
        Ok(())
    }

    fn write_compact(&mut self, value: &Value) -> fmt::Result {
        match value {
            Value::Array(arr) => {
                self.writer.write_char('[')?;
                for (i, item) in arr.iter().enumerate() {
                    if i != 0 {
                        self.writer.write_char(',')?;
                    }
                    self.write_compact(item)?;
                }
                self.writer.write_char(']')
            }
            Value::Object(obj) => {
                self.writer.write_char('{')?;
                for (i, (key, item)) in obj.iter().enumerate() {
                    if i != 0 {
                        self.writer.write_char(',')?;
                    }
                    let quoted = quote(key, self.options.escape);
                    self.writer.write_str(&quoted)?;
                    self.writer.write_char(':')?;
                    self.write_compact(item)?;
                }
                self.writer.write_char('}')
            }
            scalar => self.write_scalar(scalar),
        }
    }

    /// `column` is where the value itself starts; children are indented
    /// relative to it.
    fn write_indented(&mut self, value: &Value, column: usize) -> fmt::Result {
        let step = self.options.indent;
        match value {
            Value::Array(arr) if arr.is_empty() => self.writer.write_str("[]"),
            Value::Object(obj) if obj.is_empty() => self.writer.write_str("{}"),
            Value::Array(arr) => {
                self.writer.write_str("[\n")?;
                for (i, item) in arr.iter().enumerate() {
                    if i != 0 {
                        self.writer.write_str(",\n")?;
                    }
                    self.write_spaces(column + step)?;
                    self.write_indented(item, column + step)?;
                }
                self.writer.write_char('\n')?;
                self.write_spaces(column)?;
                self.writer.write_char(']')
            }
            Value::Object(obj) => {
                self.writer.write_str("{\n")?;
                for (i, (key, item)) in obj.iter().enumerate() {
                    if i != 0 {
                        self.writer.write_str(",\n")?;
                    }
                    self.write_spaces(column + step)?;
                    let quoted = quote(key, self.options.escape);
                    self.writer.write_str(&quoted)?;
                    self.writer.write_str(" : ")?;
                    let value_column = column + step + quoted.chars().count() + 3;
                    self.write_indented(item, value_column)?;
                }
                self.writer.write_char('\n')?;
                self.write_spaces(column)?;
                self.writer.write_char('}')
            }
            scalar => self.write_scalar(scalar),
        }
    }
}

fn quote(s: &str, escape: StringEscape) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    match escape {
        StringEscape::Raw => out.push_str(s),
        StringEscape::Json => {
            for ch in s.chars() {
                match ch {
                    '"' => out.push_str("\\\""),
                    '\\' => out.push_str("\\\\"),
                    '\n' => out.push_str("\\n"),
                    '\r' => out.push_str("\\r"),
                    '\t' => out.push_str("\\t"),
                    '\u{8}' => out.push_str("\\b"),
                    '\u{c}' => out.push_str("\\f"),
                    c if (c as u32) < 0x20 => {
                        let _ = write!(out, "\\u{:04x}", c as u32);
                    }
                    c => out.push(c),
                }
            }
        }
    }
    out.push('"');
    out
}

/// Renders a value compactly: no inserted whitespace, object keys in order.
///
/// String contents are emitted as stored, without escaping.
///
/// # Examples
///
/// ```
/// let v = ejson::parse(r#"{ "b": [1, 2.5], "a": null }"#).unwrap();
/// assert_eq!(ejson::to_string(&v), r#"{"a":null,"b":[1,2.5]}"#);
/// ```
pub fn to_string(value: &Value) -> String {
    to_string_with_options(value, SerializerOptions::compact())
}

/// Renders a value with two-space indentation.
///
/// # Examples
///
/// ```
/// let v = ejson::parse(r#"{"id":[1,2]}"#).unwrap();
/// assert_eq!(
///     ejson::to_string_pretty(&v),
///     "{\n  \"id\" : [\n           1,\n           2\n         ]\n}"
/// );
/// ```
pub fn to_string_pretty(value: &Value) -> String {
    to_string_with_options(value, SerializerOptions::indented())
}

pub fn to_string_with_options(value: &Value, options: SerializerOptions) -> String {
    let mut buf = String::new();
    // Writing into a String never fails.
    let _ = Serializer::new(&mut buf, options).serialize_value(value);
    buf
}

/// Converts any `T: Serialize` to a [`Value`] and renders it compactly with
/// escaped strings, so the output always parses back.
///
/// # Examples
///
/// ```
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// let text = ejson::to_json_string(&Point { x: 1, y: -2 }).unwrap();
/// assert_eq!(text, r#"{"x":1,"y":-2}"#);
/// ```
pub fn to_json_string<T: ser::Serialize + ?Sized>(value: &T) -> Result<String> {
    let value = to_value(value)?;
    Ok(to_string_with_options(
        &value,
        SerializerOptions {
            escape: StringEscape::Json,
            ..Default::default()
        },
    ))
}

impl ser::Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(n) => serializer.serialize_i32(*n),
            Value::Double(n) => serializer.serialize_f64(*n),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(arr) => arr.serialize(serializer),
            Value::Object(obj) => obj.serialize(serializer),
        }
    }
}

/// Converts any `T: Serialize` into a [`Value`] tree.
///
/// Structs and maps become objects, sequences and tuples become arrays, unit
/// and `None` become null, unit variants become strings and other enum
/// variants become single-entry objects keyed by the variant name. Integers
/// outside the 32-bit range fail with
/// [`ErrorKind::NumericOverflow`](crate::error::ErrorKind::NumericOverflow).
pub fn to_value<T: ser::Serialize + ?Sized>(value: &T) -> Result<Value> {
    value.serialize(ValueSerializer)
}

struct ValueSerializer;

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = ValueSeqSerializer;
    type SerializeTuple = ValueSeqSerializer;
    type SerializeTupleStruct = ValueSeqSerializer;
    type SerializeTupleVariant = ValueSeqSerializer;
    type SerializeMap = ValueMapSerializer;
    type SerializeStruct = ValueMapSerializer;
    type SerializeStructVariant = ValueMapSerializer;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        Ok(Value::Int(v))
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Value::try_from(v)
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        Value::try_from(v)
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        Value::try_from(v)
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Ok(Value::Double(v))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        Ok(v.iter().copied().collect())
    }

    fn serialize_none(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_some<T: ?Sized + ser::Serialize>(self, value: &T) -> Result<Value> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::from(variant))
    }

    fn serialize_newtype_struct<T: ?Sized + ser::Serialize>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<Value> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: ?Sized + ser::Serialize>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value> {
        let mut obj = Map::new();
        obj.insert(variant.to_string(), to_value(value)?);
        Ok(Value::Object(obj))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<Self::SerializeSeq> {
        Ok(ValueSeqSerializer {
            items: Vec::with_capacity(len.unwrap_or(0)),
            variant: None,
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<Self::SerializeTuple> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Ok(ValueSeqSerializer {
            items: Vec::with_capacity(len),
            variant: Some(variant),
        })
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Ok(ValueMapSerializer {
            entries: Map::new(),
            current_key: None,
            variant: None,
        })
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<Self::SerializeStruct> {
        self.serialize_map(Some(len))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Ok(ValueMapSerializer {
            entries: Map::new(),
            current_key: None,
            variant: Some(variant),
        })
    }
}

struct ValueSeqSerializer {
    items: Vec<Value>,
    variant: Option<&'static str>,
}

impl ValueSeqSerializer {
    fn finish(self) -> Value {
        let arr = Value::Array(self.items);
        match self.variant {
            Some(variant) => {
                let mut obj = Map::new();
                obj.insert(variant.to_string(), arr);
                Value::Object(obj)
            }
            None => arr,
        }
    }
}

impl ser::SerializeSeq for ValueSeqSerializer {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T: ?Sized + ser::Serialize>(&mut self, value: &T) -> Result<()> {
        self.items.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeTuple for ValueSeqSerializer {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T: ?Sized + ser::Serialize>(&mut self, value: &T) -> Result<()> {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeTupleStruct for ValueSeqSerializer {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T: ?Sized + ser::Serialize>(&mut self, value: &T) -> Result<()> {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeTupleVariant for ValueSeqSerializer {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T: ?Sized + ser::Serialize>(&mut self, value: &T) -> Result<()> {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

struct ValueMapSerializer {
    entries: Map<String, Value>,
    current_key: Option<String>,
    variant: Option<&'static str>,
}

impl ValueMapSerializer {
    fn finish(self) -> Value {
        let obj = Value::Object(self.entries);
        match self.variant {
            Some(variant) => {
                let mut outer = Map::new();
                outer.insert(variant.to_string(), obj);
                Value::Object(outer)
            }
            None => obj,
        }
    }
}

impl ser::SerializeMap for ValueMapSerializer {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T: ?Sized + ser::Serialize>(&mut self, key: &T) -> Result<()> {
        let key = match to_value(key)? {
            Value::String(s) => s,
            Value::Int(n) => n.to_string(),
            Value::Double(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            other => {
                return Err(Error::custom(format!(
                    "map keys must be strings or primitives, found {}",
                    other.value_type()
                )));
            }
        };
        self.current_key = Some(key);
        Ok(())
    }

    fn serialize_value<T: ?Sized + ser::Serialize>(&mut self, value: &T) -> Result<()> {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without key"))?;
        self.entries.insert(key, to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeStruct for ValueMapSerializer {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T: ?Sized + ser::Serialize>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<()> {
        self.entries.insert(key.to_string(), to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeStructVariant for ValueMapSerializer {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T: ?Sized + ser::Serialize>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<()> {
        ser::SerializeStruct::serialize_field(self, key, value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}
