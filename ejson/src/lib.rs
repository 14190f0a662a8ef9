//! A small in-memory JSON value container with a recursive-descent parser
//! and a compact or indented serializer.
//!
//! The central type is [`Value`], a tagged tree of null, booleans, 32-bit
//! integers, doubles, strings, arrays and string-keyed objects. Objects keep
//! their keys in sorted order, so rendering is deterministic.
//!
//! # Usage
//!
//! ## Parsing
//!
//! ```
//! use ejson::{Type, Value};
//!
//! let v = ejson::parse(r#"{"name":"Ada","langs":["en","fr"],"age":36}"#).unwrap();
//! assert_eq!(v.value_type(), Type::Object);
//! assert_eq!(v["langs"][1], Value::from("fr"));
//! assert_eq!(v["age"].as_int(), Some(36));
//! ```
//!
//! ## Building and rendering
//!
//! ```
//! use ejson::Value;
//!
//! let mut v = Value::from(vec![1, 2]);
//! v.push("three").unwrap();
//! assert_eq!(v.to_string(), r#"[1,2,"three"]"#);
//! assert_eq!(format!("{:#}", v), "[\n  1,\n  2,\n  \"three\"\n]");
//! ```
//!
//! ## Serde
//!
//! Any `Serialize` type converts into a [`Value`], and any `Deserialize`
//! type can be read back out of one:
//!
//! ```
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize, Debug, PartialEq)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! let v = ejson::to_value(&Point { x: 1, y: 2 }).unwrap();
//! assert_eq!(v.to_string(), r#"{"x":1,"y":2}"#);
//! let p: Point = ejson::from_value(v).unwrap();
//! assert_eq!(p, Point { x: 1, y: 2 });
//! ```
//!
//! # Configuration Options
//!
//! ```
//! use ejson::{SerializerOptions, StringEscape, Style};
//!
//! let opts = SerializerOptions {
//!     style: Style::Compact,
//!     escape: StringEscape::Json,
//!     ..Default::default()
//! };
//! let v = ejson::Value::from("line\nbreak");
//! assert_eq!(ejson::to_string_with_options(&v, opts), r#""line\nbreak""#);
//! ```
//!
//! # Error Handling
//!
//! Parse errors carry the line and column where they were detected:
//!
//! ```
//! let err = ejson::parse("[1, 2,]").unwrap_err();
//! assert!(err.is_syntax());
//! assert_eq!(err.location(), Some((1, 7)));
//! ```
//!
//! ## Nesting limit
//!
//! Arrays and objects may nest at most [`ParserOptions::max_depth`] levels,
//! 128 by default. Deeper input is rejected with a syntax error even when it
//! is otherwise valid. Raise the limit to accept it:
//!
//! ```
//! use ejson::ParserOptions;
//!
//! let doc = format!("{}{}", "[".repeat(200), "]".repeat(200));
//! assert!(ejson::parse(&doc).unwrap_err().is_syntax());
//!
//! let opts = ParserOptions { max_depth: 256, ..Default::default() };
//! assert!(ejson::parse_with_options(&doc, opts).is_ok());
//! ```

pub mod de;
pub mod error;
pub mod index;
pub mod options;
pub mod parser;
pub mod ser;
pub mod value;

pub use de::{from_str, from_str_with_options, from_value};
pub use error::{Error, ErrorKind, Result};
pub use index::Index;
pub use options::{ParserOptions, SerializerOptions, StringEscape, Style, UnicodeEscapes};
pub use parser::{Parser, parse, parse_slice, parse_with_options};
pub use ser::{
    Serializer, to_json_string, to_string, to_string_pretty, to_string_with_options, to_value,
};
pub use value::{Map, Type, Value};
