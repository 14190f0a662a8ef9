//! Error types for value access, parsing and serde conversion.
//!
//! Every fallible operation in this crate returns [`Result`]. Parse errors carry
//! the line and column of the offending byte; access and mutation errors do not.

use std::fmt;

/// A specialized `Result` type for ejson operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for ejson operations.
///
/// # Examples
///
/// ```
/// use ejson::{parse, error::ErrorKind};
///
/// let err = parse(r#"{"a":}"#).unwrap_err();
/// assert_eq!(err.kind(), &ErrorKind::Syntax);
/// assert_eq!(err.location(), Some((1, 6)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    kind: ErrorKind,
    message: String,
    line: Option<usize>,
    column: Option<usize>,
}

/// Specific kinds of errors that can occur.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// An operation was invoked on a value of an incompatible type, such as
    /// pushing onto an object.
    TypeMismatch,
    /// An array position was not less than the array's length.
    IndexOutOfRange,
    /// An object was indexed with a key it does not contain.
    KeyNotFound,
    /// The input text violates the grammar.
    Syntax,
    /// An integer literal or conversion does not fit the 32-bit integer payload,
    /// or a floating literal overflows `f64`.
    NumericOverflow,
    /// A message raised by a `Serialize`/`Deserialize` implementation.
    Custom,
}

impl Error {
    /// Creates a new error with the specified kind and message.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Error {
            kind,
            message: message.into(),
            line: None,
            column: None,
        }
    }

    /// Adds location information to this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use ejson::error::{Error, ErrorKind};
    ///
    /// let err = Error::new(ErrorKind::Syntax, "expected `:`").with_location(5, 12);
    ///
    /// let msg = err.to_string();
    /// assert!(msg.contains("line 5"));
    /// assert!(msg.contains("column 12"));
    /// ```
    pub fn with_location(mut self, line: usize, column: usize) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }

    /// Creates a custom error with a free-form message.
    pub fn custom(msg: impl Into<String>) -> Self {
        Error::new(ErrorKind::Custom, msg)
    }

    pub(crate) fn type_mismatch(operation: &str, expected: &str, found: impl fmt::Display) -> Self {
        Error::new(
            ErrorKind::TypeMismatch,
            format!("{} requires {}, found {}", operation, expected, found),
        )
    }

    pub(crate) fn index_out_of_range(index: usize, len: usize) -> Self {
        Error::new(
            ErrorKind::IndexOutOfRange,
            format!("index {} out of range for array of length {}", index, len),
        )
    }

    pub(crate) fn key_not_found(key: &str) -> Self {
        Error::new(ErrorKind::KeyNotFound, format!("key \"{}\" not found", key))
    }

    pub(crate) fn numeric_overflow(what: impl fmt::Display) -> Self {
        Error::new(
            ErrorKind::NumericOverflow,
            format!("{} is out of range for a 32-bit integer", what),
        )
    }

    /// Returns the kind of this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Returns the message without location information.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the 1-based `(line, column)` where a parse error was detected.
    pub fn location(&self) -> Option<(usize, usize)> {
        self.line.zip(self.column)
    }

    pub fn is_syntax(&self) -> bool {
        self.kind == ErrorKind::Syntax
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let (Some(line), Some(col)) = (self.line, self.column) {
            write!(f, "{} at line {}, column {}", self.message, line, col)
        } else {
            write!(f, "{}", self.message)
        }
    }
}

impl std::error::Error for Error {}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::custom(msg.to_string())
    }
}
