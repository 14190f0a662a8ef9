//! Configuration options for parsing and serialization.

/// Options for controlling parser behavior.
///
/// # Examples
///
/// ```
/// use ejson::{ParserOptions, UnicodeEscapes};
///
/// let opts = ParserOptions {
///     unicode_escapes: UnicodeEscapes::Decode,
///     ..Default::default()
/// };
/// let value = ejson::parse_with_options(r#""caf\u00e9""#, opts).unwrap();
/// assert_eq!(value.as_str(), Some("café"));
/// ```
#[derive(Debug, Clone)]
pub struct ParserOptions {
    /// How `\uXXXX` escapes inside string literals are handled.
    ///
    /// Default: [`UnicodeEscapes::Verbatim`]
    pub unicode_escapes: UnicodeEscapes,

    /// Maximum nesting of arrays and objects. Deeper documents fail with a
    /// syntax error even when they are otherwise valid.
    ///
    /// Default: `128`
    pub max_depth: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        ParserOptions {
            unicode_escapes: UnicodeEscapes::Verbatim,
            max_depth: 128,
        }
    }
}

/// Controls how `\u` escapes are turned into string contents.
///
/// ```text
/// input:     "\u00e9"
/// Verbatim:  \u00e9   (six characters, copied as written, hex or not)
/// Decode:    é
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnicodeEscapes {
    /// Copy the escape into the string as literal text (default).
    ///
    /// The four characters after `\u` are taken as they are, hex or not, and
    /// are not decoded. The `\u` itself is kept in front of them, so the
    /// stored string holds six characters and rendering it again reproduces
    /// the escape. A string that ends before four characters are read is a
    /// syntax error.
    ///
    /// ```
    /// let v = ejson::parse(r#""\uZZZZ""#).unwrap();
    /// assert_eq!(v.as_str(), Some("\\uZZZZ"));
    /// ```
    Verbatim,
    /// Decode the escape to its character, combining surrogate pairs.
    ///
    /// The four characters must be hex digits and surrogates must be paired.
    Decode,
}

/// Options for controlling serializer output.
///
/// # Examples
///
/// ```
/// use ejson::{SerializerOptions, Style, Value};
///
/// let value: Value = vec![1, 2].into();
/// let opts = SerializerOptions {
///     style: Style::Indented,
///     indent: 4,
///     ..Default::default()
/// };
/// assert_eq!(ejson::to_string_with_options(&value, opts), "[\n    1,\n    2\n]");
/// ```
#[derive(Debug, Clone)]
pub struct SerializerOptions {
    /// Compact or indented layout.
    ///
    /// Default: [`Style::Compact`]
    pub style: Style,

    /// Number of spaces per indentation level in [`Style::Indented`].
    ///
    /// Default: `2`
    pub indent: usize,

    /// Whether string contents are escaped on output.
    ///
    /// Default: [`StringEscape::Raw`]
    pub escape: StringEscape,
}

impl Default for SerializerOptions {
    fn default() -> Self {
        SerializerOptions {
            style: Style::Compact,
            indent: 2,
            escape: StringEscape::Raw,
        }
    }
}

impl SerializerOptions {
    pub fn compact() -> Self {
        SerializerOptions::default()
    }

    pub fn indented() -> Self {
        SerializerOptions {
            style: Style::Indented,
            ..Default::default()
        }
    }
}

/// Output layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// No inserted whitespace: `{"a":[1,2]}`
    Compact,
    /// One element per line.
    Indented,
}

/// Controls escaping of string contents on output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringEscape {
    /// Emit string contents byte-for-byte between quotes (default).
    ///
    /// Strings containing `"`, `\` or control characters will not re-parse.
    Raw,
    /// Escape `"`, `\` and control characters so the output always re-parses.
    Json,
}
