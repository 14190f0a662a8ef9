//! Recursive-descent parser from text to [`Value`].

use crate::error::{Error, ErrorKind, Result};
use crate::options::{ParserOptions, UnicodeEscapes};
use crate::value::{Map, Value};

/// A parser over one fully buffered input.
///
/// The parser keeps the last successfully parsed value and can be re-seeded
/// with new text through [`Parser::reset`].
///
/// # Examples
///
/// ```
/// use ejson::{Parser, Value};
///
/// let mut parser = Parser::new("[1, 2]");
/// assert_eq!(parser.parse().unwrap(), &Value::from(vec![1, 2]));
///
/// parser.reset("true");
/// assert!(parser.value().is_none());
/// assert_eq!(parser.parse().unwrap(), &Value::Bool(true));
/// ```
pub struct Parser<'a> {
    input: &'a str,
    pos: usize,
    depth: usize,
    options: ParserOptions,
    value: Option<Value>,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Parser::with_options(input, ParserOptions::default())
    }

    pub fn with_options(input: &'a str, options: ParserOptions) -> Self {
        Parser {
            input,
            pos: 0,
            depth: 0,
            options,
            value: None,
        }
    }

    /// Replaces the input, discarding the cursor and any previous result.
    pub fn reset(&mut self, input: &'a str) {
        self.input = input;
        self.pos = 0;
        self.depth = 0;
        self.value = None;
    }

    /// Parses the whole input as exactly one value.
    ///
    /// Only whitespace may follow the value. On failure the previous result is
    /// discarded and no partial value is kept.
    pub fn parse(&mut self) -> Result<&Value> {
        self.value = None;
        let value = self.parse_document()?;
        Ok(&*self.value.insert(value))
    }

    /// The result of the last successful [`parse`](Parser::parse).
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    pub fn into_value(self) -> Option<Value> {
        self.value
    }

    fn parse_document(&mut self) -> Result<Value> {
        self.pos = 0;
        self.depth = 0;
        let value = self.parse_value()?;
        self.skip_whitespace();
        if self.pos < self.input.len() {
            return Err(self.error(format!(
                "trailing characters after value, found {}",
                self.describe_current()
            )));
        }
        Ok(value)
    }

    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
            self.pos += 1;
        }
    }

    fn error(&self, message: impl Into<String>) -> Error {
        self.error_at(self.pos, ErrorKind::Syntax, message)
    }

    fn error_at(&self, pos: usize, kind: ErrorKind, message: impl Into<String>) -> Error {
        let (line, column) = self.location(pos);
        Error::new(kind, message).with_location(line, column)
    }

    /// 1-based line and column (in characters) of a byte offset.
    fn location(&self, pos: usize) -> (usize, usize) {
        let before = &self.input.as_bytes()[..pos.min(self.input.len())];
        let line_start = before
            .iter()
            .rposition(|&b| b == b'\n')
            .map_or(0, |i| i + 1);
        let line = before.iter().filter(|&&b| b == b'\n').count() + 1;
        let column = before[line_start..]
            .iter()
            .filter(|&&b| b & 0xC0 != 0x80)
            .count()
            + 1;
        (line, column)
    }

    fn describe_current(&self) -> String {
        match self.input.get(self.pos..).and_then(|rest| rest.chars().next()) {
            Some(c) => format!("`{}`", c.escape_debug()),
            None if self.pos >= self.input.len() => "end of input".to_string(),
            None => format!("byte 0x{:02x}", self.input.as_bytes()[self.pos]),
        }
    }

    fn parse_value(&mut self) -> Result<Value> {
        self.skip_whitespace();
        match self.peek() {
            None => Err(self.error("expected a value, found end of input")),
            Some(b'n') => self.parse_literal("null", Value::Null),
            Some(b't') => self.parse_literal("true", Value::Bool(true)),
            Some(b'f') => self.parse_literal("false", Value::Bool(false)),
            Some(b'"') => self.parse_string().map(Value::String),
            Some(b'[') => self.parse_array(),
            Some(b'{') => self.parse_object(),
            Some(_) => self.parse_number(),
        }
    }

    fn parse_literal(&mut self, literal: &'static str, value: Value) -> Result<Value> {
        if self.input.as_bytes()[self.pos..].starts_with(literal.as_bytes()) {
            self.pos += literal.len();
            Ok(value)
        } else {
            Err(self.error(format!("expected `{}`", literal)))
        }
    }

    fn eat_digits(&mut self) -> usize {
        let start = self.pos;
        while let Some(b'0'..=b'9') = self.peek() {
            self.pos += 1;
        }
        self.pos - start
    }

    fn parse_number(&mut self) -> Result<Value> {
        let start = self.pos;
        let mut is_float = false;

        if self.peek() == Some(b'-') {
            self.pos += 1;
        }

        match self.peek() {
            Some(b'0') => self.pos += 1,
            Some(b'1'..=b'9') => {
                self.eat_digits();
            }
            _ if self.pos == start => {
                return Err(self.error(format!(
                    "expected a value, found {}",
                    self.describe_current()
                )));
            }
            _ => {
                return Err(self.error(format!(
                    "expected a digit after `-`, found {}",
                    self.describe_current()
                )));
            }
        }

        if self.peek() == Some(b'.') {
            self.pos += 1;
            if self.eat_digits() == 0 {
                return Err(self.error(format!(
                    "expected a digit after the decimal point, found {}",
                    self.describe_current()
                )));
            }
            is_float = true;
        }

        if let Some(b'e' | b'E') = self.peek() {
            self.pos += 1;
            if let Some(b'+' | b'-') = self.peek() {
                self.pos += 1;
            }
            if self.eat_digits() == 0 {
                return Err(self.error(format!(
                    "expected a digit in the exponent, found {}",
                    self.describe_current()
                )));
            }
            is_float = true;
        }

        let text = &self.input[start..self.pos];
        if is_float {
            match text.parse::<f64>() {
                Ok(n) if n.is_finite() => Ok(Value::Double(n)),
                _ => Err(self.error_at(
                    start,
                    ErrorKind::NumericOverflow,
                    format!("number `{}` is out of range for a double", text),
                )),
            }
        } else {
            text.parse::<i32>().map(Value::Int).map_err(|_| {
                let (line, column) = self.location(start);
                Error::numeric_overflow(format!("integer literal `{}`", text))
                    .with_location(line, column)
            })
        }
    }

    fn parse_string(&mut self) -> Result<String> {
        let bytes = self.input.as_bytes();
        self.pos += 1;
        let mut out = String::new();
        let mut run_start = self.pos;

        loop {
            let Some(&b) = bytes.get(self.pos) else {
                return Err(self.error("unterminated string, found end of input"));
            };
            match b {
                b'"' => {
                    out.push_str(&self.input[run_start..self.pos]);
                    self.pos += 1;
                    return Ok(out);
                }
                b'\\' => {
                    out.push_str(&self.input[run_start..self.pos]);
                    self.pos += 1;
                    self.parse_escape(&mut out)?;
                    run_start = self.pos;
                }
                0x00..=0x1F => {
                    return Err(self.error(format!(
                        "unescaped control character 0x{:02x} in string",
                        b
                    )));
                }
                _ => self.pos += 1,
            }
        }
    }

    fn parse_escape(&mut self, out: &mut String) -> Result<()> {
        let unescaped = match self.peek() {
            None => return Err(self.error("unterminated string, found end of input")),
            Some(b'"') => '"',
            Some(b'\\') => '\\',
            Some(b'/') => '/',
            Some(b'b') => '\u{8}',
            Some(b'f') => '\u{c}',
            Some(b'n') => '\n',
            Some(b'r') => '\r',
            Some(b't') => '\t',
            Some(b'u') => {
                self.pos += 1;
                return self.parse_unicode_escape(out);
            }
            Some(_) => {
                return Err(self.error(format!(
                    "invalid escape sequence `\\{}`",
                    self.describe_current().trim_matches('`')
                )));
            }
        };
        out.push(unescaped);
        self.pos += 1;
        Ok(())
    }

    fn read_hex4(&mut self) -> Result<u16> {
        let bytes = self.input.as_bytes();
        let mut unit: u16 = 0;
        for i in 0..4 {
            let digit = bytes
                .get(self.pos + i)
                .and_then(|&b| (b as char).to_digit(16))
                .ok_or_else(|| {
                    self.error_at(
                        self.pos + i,
                        ErrorKind::Syntax,
                        "expected four hex digits after `\\u`",
                    )
                })?;
            unit = unit * 16 + digit as u16;
        }
        self.pos += 4;
        Ok(unit)
    }

    // The `\u` and the next four characters, whatever they are, are copied as
    // written. Only a raw control character or the end of input stops it.
    fn copy_verbatim_escape(&mut self, out: &mut String) -> Result<()> {
        out.push_str("\\u");
        for _ in 0..4 {
            let Some(c) = self.input.get(self.pos..).and_then(|rest| rest.chars().next()) else {
                return Err(self.error("unterminated string, found end of input"));
            };
            if (c as u32) < 0x20 {
                return Err(self.error(format!(
                    "unescaped control character 0x{:02x} in string",
                    c as u32
                )));
            }
            out.push(c);
            self.pos += c.len_utf8();
        }
        Ok(())
    }

    fn parse_unicode_escape(&mut self, out: &mut String) -> Result<()> {
        if self.options.unicode_escapes == UnicodeEscapes::Verbatim {
            return self.copy_verbatim_escape(out);
        }

        let escape_start = self.pos - 2;
        let unit = self.read_hex4()?;

        let code = match unit {
            0xD800..=0xDBFF => {
                if !self.input.as_bytes()[self.pos..].starts_with(b"\\u") {
                    return Err(self.error_at(
                        escape_start,
                        ErrorKind::Syntax,
                        "unpaired surrogate in `\\u` escape",
                    ));
                }
                self.pos += 2;
                let low = self.read_hex4()?;
                if !(0xDC00..=0xDFFF).contains(&low) {
                    return Err(self.error_at(
                        escape_start,
                        ErrorKind::Syntax,
                        "unpaired surrogate in `\\u` escape",
                    ));
                }
                0x10000 + ((u32::from(unit) - 0xD800) << 10) + (u32::from(low) - 0xDC00)
            }
            0xDC00..=0xDFFF => {
                return Err(self.error_at(
                    escape_start,
                    ErrorKind::Syntax,
                    "unpaired surrogate in `\\u` escape",
                ));
            }
            _ => u32::from(unit),
        };

        match char::from_u32(code) {
            Some(c) => {
                out.push(c);
                Ok(())
            }
            None => Err(self.error_at(
                escape_start,
                ErrorKind::Syntax,
                "invalid code point in `\\u` escape",
            )),
        }
    }

    fn enter_container(&mut self) -> Result<()> {
        self.depth += 1;
        if self.depth > self.options.max_depth {
            return Err(self.error(format!(
                "nesting exceeds the limit of {} levels",
                self.options.max_depth
            )));
        }
        Ok(())
    }

    fn parse_array(&mut self) -> Result<Value> {
        self.enter_container()?;
        self.pos += 1;
        let mut arr = Vec::new();

        self.skip_whitespace();
        if self.peek() == Some(b']') {
            self.pos += 1;
            self.depth -= 1;
            return Ok(Value::Array(arr));
        }

        loop {
            arr.push(self.parse_value()?);
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => self.pos += 1,
                Some(b']') => {
                    self.pos += 1;
                    break;
                }
                _ => {
                    return Err(self.error(format!(
                        "expected `,` or `]` in array, found {}",
                        self.describe_current()
                    )));
                }
            }
        }

        self.depth -= 1;
        Ok(Value::Array(arr))
    }

    fn parse_object(&mut self) -> Result<Value> {
        self.enter_container()?;
        self.pos += 1;
        let mut obj = Map::new();

        self.skip_whitespace();
        if self.peek() == Some(b'}') {
            self.pos += 1;
            self.depth -= 1;
            return Ok(Value::Object(obj));
        }

        loop {
            self.skip_whitespace();
            if self.peek() != Some(b'"') {
                return Err(self.error(format!(
                    "expected a string key, found {}",
                    self.describe_current()
                )));
            }
            let key = self.parse_string()?;

            self.skip_whitespace();
            if self.peek() != Some(b':') {
                return Err(self.error(format!(
                    "expected `:` after object key, found {}",
                    self.describe_current()
                )));
            }
            self.pos += 1;

            // Duplicate keys: the last one wins.
            let value = self.parse_value()?;
            obj.insert(key, value);

            self.skip_whitespace();
            match self.peek() {
                Some(b',') => self.pos += 1,
                Some(b'}') => {
                    self.pos += 1;
                    break;
                }
                _ => {
                    return Err(self.error(format!(
                        "expected `,` or `}}` in object, found {}",
                        self.describe_current()
                    )));
                }
            }
        }

        self.depth -= 1;
        Ok(Value::Object(obj))
    }
}

/// Parses text into a [`Value`] using default options.
///
/// # Examples
///
/// ```
/// use ejson::{parse, Value};
///
/// let v = parse(r#"{"a":1,"b":[true,false,null]}"#).unwrap();
/// assert_eq!(v["a"], Value::Int(1));
/// assert_eq!(v["b"][2], Value::Null);
/// ```
pub fn parse(input: &str) -> Result<Value> {
    parse_with_options(input, ParserOptions::default())
}

pub fn parse_with_options(input: &str, options: ParserOptions) -> Result<Value> {
    Parser::with_options(input, options).parse_document()
}

/// Parses UTF-8 bytes into a [`Value`] using default options.
pub fn parse_slice(input: &[u8]) -> Result<Value> {
    let s = std::str::from_utf8(input).map_err(|e| {
        Error::new(
            ErrorKind::Syntax,
            format!("invalid UTF-8 at byte {}", e.valid_up_to()),
        )
    })?;
    parse(s)
}
