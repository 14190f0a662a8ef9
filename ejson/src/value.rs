use crate::error::{Error, Result};
use crate::index::Index;
use std::collections::BTreeMap;
use std::fmt;
use std::mem;

/// Object storage. Keys iterate and serialize in lexicographic order.
pub type Map<K, V> = BTreeMap<K, V>;

/// A dynamically-typed JSON value.
///
/// A `Value` exclusively owns its payload, including every nested element, so
/// `clone` is a deep copy and no two values ever share storage.
///
/// # Examples
///
/// ```
/// use ejson::{Map, Value};
///
/// let mut obj = Value::from(Map::new());
/// obj.insert("tags", vec!["a", "b"]).unwrap();
/// obj.insert("count", 2).unwrap();
///
/// assert_eq!(obj["tags"][1], Value::from("b"));
/// assert_eq!(obj.to_compact_string(), r#"{"count":2,"tags":["a","b"]}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i32),
    Double(f64),
    String(String),
    Array(Vec<Value>),
    Object(Map<String, Value>),
}

/// The tag of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Null,
    Bool,
    Int,
    Double,
    String,
    Array,
    Object,
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Type::Null => "null",
            Type::Bool => "bool",
            Type::Int => "int",
            Type::Double => "double",
            Type::String => "string",
            Type::Array => "array",
            Type::Object => "object",
        };
        f.write_str(name)
    }
}

impl Value {
    /// Creates the empty value of the given type: `null`, `false`, `0`, `0.0`,
    /// `""`, `[]` or `{}`.
    pub fn new(ty: Type) -> Self {
        match ty {
            Type::Null => Value::Null,
            Type::Bool => Value::Bool(false),
            Type::Int => Value::Int(0),
            Type::Double => Value::Double(0.0),
            Type::String => Value::String(String::new()),
            Type::Array => Value::Array(Vec::new()),
            Type::Object => Value::Object(Map::new()),
        }
    }

    pub fn value_type(&self) -> Type {
        match self {
            Value::Null => Type::Null,
            Value::Bool(_) => Type::Bool,
            Value::Int(_) => Type::Int,
            Value::Double(_) => Type::Double,
            Value::String(_) => Type::String,
            Value::Array(_) => Type::Array,
            Value::Object(_) => Type::Object,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    pub fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    pub fn is_double(&self) -> bool {
        matches!(self, Value::Double(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer payload. Doubles are not converted.
    pub fn as_int(&self) -> Option<i32> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the floating-point payload. Integers are not converted.
    pub fn as_double(&self) -> Option<f64> {
        match self {
            Value::Double(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_string_mut(&mut self) -> Option<&mut String> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Map<String, Value>> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut Map<String, Value>> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Number of characters in a string; `None` for every other type.
    ///
    /// ```
    /// use ejson::Value;
    ///
    /// assert_eq!(Value::from("héllo").length(), Some(5));
    /// assert_eq!(Value::from(vec![1]).length(), None);
    /// ```
    pub fn length(&self) -> Option<usize> {
        match self {
            Value::String(s) => Some(s.chars().count()),
            _ => None,
        }
    }

    /// Byte length of a string, or element count of an array or object;
    /// `None` for scalars.
    pub fn size(&self) -> Option<usize> {
        match self {
            Value::String(s) => Some(s.len()),
            Value::Array(arr) => Some(arr.len()),
            Value::Object(obj) => Some(obj.len()),
            _ => None,
        }
    }

    /// Whether an array or object has no elements.
    ///
    /// Unlike [`size`](Value::size), this fails with
    /// [`ErrorKind::TypeMismatch`](crate::error::ErrorKind::TypeMismatch) for every other type, strings included.
    pub fn is_empty(&self) -> Result<bool> {
        match self {
            Value::Array(arr) => Ok(arr.is_empty()),
            Value::Object(obj) => Ok(obj.is_empty()),
            other => Err(Error::type_mismatch(
                "is_empty",
                "an array or object",
                other.value_type(),
            )),
        }
    }

    /// Looks up an array position or an object key.
    ///
    /// Positions fail with [`ErrorKind::IndexOutOfRange`](crate::error::ErrorKind::IndexOutOfRange) past the end, keys
    /// fail with [`ErrorKind::KeyNotFound`](crate::error::ErrorKind::KeyNotFound) when absent, and a position used on
    /// a non-array (or a key on a non-object) fails with
    /// [`ErrorKind::TypeMismatch`](crate::error::ErrorKind::TypeMismatch). A missing key is never inserted.
    ///
    /// ```
    /// use ejson::{error::ErrorKind, Value};
    ///
    /// let v = ejson::parse(r#"{"a":[10,20]}"#).unwrap();
    /// assert_eq!(v.get("a").unwrap().get(1).unwrap(), &Value::from(20));
    /// assert_eq!(v.get("b").unwrap_err().kind(), &ErrorKind::KeyNotFound);
    /// assert_eq!(v.get(0).unwrap_err().kind(), &ErrorKind::TypeMismatch);
    /// ```
    pub fn get<I: Index>(&self, index: I) -> Result<&Value> {
        index.index_into(self)
    }

    pub fn get_mut<I: Index>(&mut self, index: I) -> Result<&mut Value> {
        index.index_into_mut(self)
    }

    /// Removes an array element or an object entry.
    ///
    /// With a position, the element is removed and later elements shift down by
    /// one; the position must be less than the length. With a key, the entry is
    /// removed if present and `Ok(None)` is returned if it is absent: removing a
    /// missing key is a no-op, not an error.
    ///
    /// ```
    /// use ejson::Value;
    ///
    /// let mut arr = Value::from(vec![1, 2, 3]);
    /// assert_eq!(arr.remove(0).unwrap(), Some(Value::from(1)));
    /// assert_eq!(arr, Value::from(vec![2, 3]));
    ///
    /// let mut obj = ejson::parse(r#"{"a":1}"#).unwrap();
    /// assert_eq!(obj.remove("missing").unwrap(), None);
    /// assert_eq!(obj.remove("a").unwrap(), Some(Value::from(1)));
    /// ```
    pub fn remove<I: Index>(&mut self, index: I) -> Result<Option<Value>> {
        index.remove_from(self)
    }

    /// Looks up a key without failing when it is absent.
    pub fn find(&self, key: &str) -> Result<Option<&Value>> {
        match self {
            Value::Object(obj) => Ok(obj.get(key)),
            other => Err(Error::type_mismatch("find", "an object", other.value_type())),
        }
    }

    pub fn contains_key(&self, key: &str) -> Result<bool> {
        self.find(key).map(|v| v.is_some())
    }

    /// Appends to an array.
    pub fn push(&mut self, value: impl Into<Value>) -> Result<()> {
        match self {
            Value::Array(arr) => {
                arr.push(value.into());
                Ok(())
            }
            other => Err(Error::type_mismatch("push", "an array", other.value_type())),
        }
    }

    /// Adds or overwrites an object entry, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Result<Option<Value>> {
        match self {
            Value::Object(obj) => Ok(obj.insert(key.into(), value.into())),
            other => Err(Error::type_mismatch("insert", "an object", other.value_type())),
        }
    }

    pub fn swap(&mut self, other: &mut Value) {
        mem::swap(self, other);
    }

    /// Moves the payload out, leaving `Null` behind.
    ///
    /// ```
    /// use ejson::Value;
    ///
    /// let mut src = Value::from(vec![1, 2]);
    /// let dst = src.take();
    /// assert!(src.is_null());
    /// assert_eq!(dst, Value::from(vec![1, 2]));
    /// ```
    pub fn take(&mut self) -> Value {
        mem::take(self)
    }

    /// Replaces the whole value, returning the old one.
    pub fn replace(&mut self, value: impl Into<Value>) -> Value {
        mem::replace(self, value.into())
    }

    pub fn clear(&mut self) {
        *self = Value::Null;
    }

    pub fn to_compact_string(&self) -> String {
        crate::ser::to_string(self)
    }

    pub fn to_pretty_string(&self) -> String {
        crate::ser::to_string_pretty(self)
    }
}

impl<I: Index> std::ops::Index<I> for Value {
    type Output = Value;

    /// # Panics
    ///
    /// Panics where [`Value::get`] would return an error.
    fn index(&self, index: I) -> &Value {
        match index.index_into(self) {
            Ok(v) => v,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<I: Index> std::ops::IndexMut<I> for Value {
    fn index_mut(&mut self, index: I) -> &mut Value {
        match index.index_into_mut(self) {
            Ok(v) => v,
            Err(e) => panic!("{}", e),
        }
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! from_lossless_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Int(i32::from(n))
                }
            }
        )*
    };
}

from_lossless_int!(i8, i16, i32, u8, u16);

macro_rules! try_from_wide_int {
    ($($ty:ty),*) => {
        $(
            impl TryFrom<$ty> for Value {
                type Error = Error;

                fn try_from(n: $ty) -> Result<Self> {
                    i32::try_from(n)
                        .map(Value::Int)
                        .map_err(|_| Error::numeric_overflow(n))
                }
            }
        )*
    };
}

try_from_wide_int!(i64, u32, u64, isize, usize);

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Double(f64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Double(n)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::String(c.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::Array(v.into_iter().map(Into::into).collect())
    }
}

impl From<Map<String, Value>> for Value {
    fn from(m: Map<String, Value>) -> Self {
        Value::Object(m)
    }
}

impl<T: Into<Value>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Value::Array(iter.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Value::Object(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl fmt::Display for Value {
    /// Renders compactly; the alternate flag (`{:#}`) renders indented.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let options = if f.alternate() {
            crate::options::SerializerOptions::indented()
        } else {
            crate::options::SerializerOptions::compact()
        };
        crate::ser::Serializer::new(f, options).serialize_value(self)
    }
}

impl std::str::FromStr for Value {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        crate::parser::parse(s)
    }
}
