use crate::error::{Error, Result};
use crate::value::Value;

/// A type that can address into a [`Value`]: `usize` for array positions,
/// `str` and `String` for object keys.
///
/// This trait is sealed and only used through [`Value::get`],
/// [`Value::get_mut`], [`Value::remove`] and the `[]` operator.
pub trait Index: private::Sealed {
    #[doc(hidden)]
    fn index_into<'v>(&self, v: &'v Value) -> Result<&'v Value>;

    #[doc(hidden)]
    fn index_into_mut<'v>(&self, v: &'v mut Value) -> Result<&'v mut Value>;

    #[doc(hidden)]
    fn remove_from(&self, v: &mut Value) -> Result<Option<Value>>;
}

impl Index for usize {
    fn index_into<'v>(&self, v: &'v Value) -> Result<&'v Value> {
        match v {
            Value::Array(arr) => arr
                .get(*self)
                .ok_or_else(|| Error::index_out_of_range(*self, arr.len())),
            other => Err(Error::type_mismatch(
                "indexing by position",
                "an array",
                other.value_type(),
            )),
        }
    }

    fn index_into_mut<'v>(&self, v: &'v mut Value) -> Result<&'v mut Value> {
        match v {
            Value::Array(arr) => {
                let len = arr.len();
                arr.get_mut(*self)
                    .ok_or_else(|| Error::index_out_of_range(*self, len))
            }
            other => Err(Error::type_mismatch(
                "indexing by position",
                "an array",
                other.value_type(),
            )),
        }
    }

    fn remove_from(&self, v: &mut Value) -> Result<Option<Value>> {
        match v {
            Value::Array(arr) => {
                if *self >= arr.len() {
                    return Err(Error::index_out_of_range(*self, arr.len()));
                }
                Ok(Some(arr.remove(*self)))
            }
            other => Err(Error::type_mismatch(
                "removing by position",
                "an array",
                other.value_type(),
            )),
        }
    }
}

impl Index for str {
    fn index_into<'v>(&self, v: &'v Value) -> Result<&'v Value> {
        match v {
            Value::Object(obj) => obj.get(self).ok_or_else(|| Error::key_not_found(self)),
            other => Err(Error::type_mismatch(
                "indexing by key",
                "an object",
                other.value_type(),
            )),
        }
    }

    fn index_into_mut<'v>(&self, v: &'v mut Value) -> Result<&'v mut Value> {
        match v {
            Value::Object(obj) => obj.get_mut(self).ok_or_else(|| Error::key_not_found(self)),
            other => Err(Error::type_mismatch(
                "indexing by key",
                "an object",
                other.value_type(),
            )),
        }
    }

    // An absent key is not an error here.
    fn remove_from(&self, v: &mut Value) -> Result<Option<Value>> {
        match v {
            Value::Object(obj) => Ok(obj.remove(self)),
            other => Err(Error::type_mismatch(
                "removing by key",
                "an object",
                other.value_type(),
            )),
        }
    }
}

impl Index for String {
    fn index_into<'v>(&self, v: &'v Value) -> Result<&'v Value> {
        self.as_str().index_into(v)
    }

    fn index_into_mut<'v>(&self, v: &'v mut Value) -> Result<&'v mut Value> {
        self.as_str().index_into_mut(v)
    }

    fn remove_from(&self, v: &mut Value) -> Result<Option<Value>> {
        self.as_str().remove_from(v)
    }
}

impl<T> Index for &T
where
    T: ?Sized + Index,
{
    fn index_into<'v>(&self, v: &'v Value) -> Result<&'v Value> {
        (**self).index_into(v)
    }

    fn index_into_mut<'v>(&self, v: &'v mut Value) -> Result<&'v mut Value> {
        (**self).index_into_mut(v)
    }

    fn remove_from(&self, v: &mut Value) -> Result<Option<Value>> {
        (**self).remove_from(v)
    }
}

mod private {
    pub trait Sealed {}
    impl Sealed for usize {}
    impl Sealed for str {}
    impl Sealed for String {}
    impl<T> Sealed for &T where T: ?Sized + Sealed {}
}
