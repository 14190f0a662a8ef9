use ejson::{ErrorKind, Parser, ParserOptions, Type, UnicodeEscapes, Value, parse, parse_with_options};

fn syntax_error(input: &str) -> ejson::Error {
    let err = parse(input).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::Syntax, "input: {:?}", input);
    err
}

#[test]
fn test_scalars() {
    assert_eq!(parse("null").unwrap(), Value::Null);
    assert_eq!(parse("true").unwrap(), Value::Bool(true));
    assert_eq!(parse("false").unwrap(), Value::Bool(false));
    assert_eq!(parse(r#""hi""#).unwrap(), Value::from("hi"));
}

#[test]
fn test_numbers_pick_int_or_double() {
    assert_eq!(parse("123").unwrap(), Value::Int(123));
    assert_eq!(parse("-7").unwrap(), Value::Int(-7));
    assert_eq!(parse("0").unwrap(), Value::Int(0));
    assert_eq!(parse("-0.5").unwrap(), Value::Double(-0.5));
    assert_eq!(parse("1e-5").unwrap(), Value::Double(1e-5));
    assert_eq!(parse("2E3").unwrap(), Value::Double(2000.0));
    assert_eq!(parse("1.0").unwrap().value_type(), Type::Double);
}

#[test]
fn test_int_bounds() {
    assert_eq!(parse("2147483647").unwrap(), Value::Int(i32::MAX));
    assert_eq!(parse("-2147483648").unwrap(), Value::Int(i32::MIN));

    let err = parse("9999999999").unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::NumericOverflow);
    let err = parse("2147483648").unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::NumericOverflow);
}

#[test]
fn test_double_overflow() {
    let err = parse("1e999").unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::NumericOverflow);
}

#[test]
fn test_malformed_numbers() {
    syntax_error("-");
    syntax_error("1.");
    syntax_error(".5");
    syntax_error("1e");
    syntax_error("+1");
    // Leading zeros leave trailing digits behind.
    syntax_error("01");
}

#[test]
fn test_missing_value_after_colon() {
    let err = syntax_error(r#"{"a":}"#);
    assert_eq!(err.location(), Some((1, 6)));
}

#[test]
fn test_empty_and_whitespace_input() {
    syntax_error("");
    syntax_error(" \n\t ");
}

#[test]
fn test_trailing_content_is_rejected() {
    let err = syntax_error("[1] x");
    assert_eq!(err.location(), Some((1, 5)));
    syntax_error("1 2");
    assert_eq!(parse("  [1]  \n").unwrap(), Value::from(vec![1]));
}

#[test]
fn test_whitespace_between_tokens() {
    let v = parse(" {\n\t\"a\" :\r\n [ 1 , 2 ] } ").unwrap();
    assert_eq!(v.to_string(), r#"{"a":[1,2]}"#);
}

#[test]
fn test_empty_containers() {
    assert_eq!(parse("[]").unwrap(), Value::new(Type::Array));
    assert_eq!(parse("{ }").unwrap(), Value::new(Type::Object));
    assert_eq!(parse("[[],{}]").unwrap().to_string(), "[[],{}]");
}

#[test]
fn test_nested_document() {
    let v = parse(r#"{"users":[{"id":1,"tags":["a","b"]},{"id":2,"tags":[]}],"count":2}"#).unwrap();
    assert_eq!(v["users"][0]["tags"][1], Value::from("b"));
    assert_eq!(v["users"][1]["tags"].size(), Some(0));
    assert_eq!(v["count"], Value::Int(2));
}

#[test]
fn test_trailing_commas_are_rejected() {
    syntax_error("[1,]");
    syntax_error(r#"{"a":1,}"#);
    syntax_error("[,]");
}

#[test]
fn test_unclosed_containers() {
    let err = syntax_error("[1, 2");
    assert!(err.message().contains("end of input"), "{}", err);
    syntax_error(r#"{"a":1"#);
    syntax_error("[1 2]");
}

#[test]
fn test_object_keys_must_be_strings() {
    let err = syntax_error("{a:1}");
    assert!(err.message().contains("string key"), "{}", err);
    syntax_error("{1:1}");
    syntax_error(r#"{"a" 1}"#);
}

#[test]
fn test_duplicate_keys_keep_last() {
    let v = parse(r#"{"k":1,"k":2}"#).unwrap();
    assert_eq!(v.size(), Some(1));
    assert_eq!(v["k"], Value::Int(2));
}

#[test]
fn test_bad_literals() {
    syntax_error("nul");
    syntax_error("True");
    syntax_error("falsy");
}

#[test]
fn test_simple_escapes() {
    let v = parse(r#""a\"b\\c\/d\n\t\r\b\f""#).unwrap();
    assert_eq!(v.as_str(), Some("a\"b\\c/d\n\t\r\u{8}\u{c}"));
}

#[test]
fn test_invalid_escape() {
    let err = syntax_error(r#""\x""#);
    assert!(err.message().contains("escape"), "{}", err);
}

#[test]
fn test_unicode_escape_kept_verbatim_by_default() {
    let v = parse(r#""caf\u00e9""#).unwrap();
    assert_eq!(v.as_str(), Some("caf\\u00e9"));
    assert_eq!(v.length(), Some(9));
    assert_eq!(v.to_string(), r#""caf\u00e9""#);
}

#[test]
fn test_unicode_escape_decoded_on_request() {
    let opts = ParserOptions {
        unicode_escapes: UnicodeEscapes::Decode,
        ..Default::default()
    };
    let v = parse_with_options(r#""caf\u00e9 \ud83d\ude00""#, opts).unwrap();
    assert_eq!(v.as_str(), Some("caf\u{e9} \u{1f600}"));
}

#[test]
fn test_unpaired_surrogate_rejected_when_decoding() {
    let opts = ParserOptions {
        unicode_escapes: UnicodeEscapes::Decode,
        ..Default::default()
    };
    let err = parse_with_options(r#""\ud83d""#, opts.clone()).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::Syntax);
    let err = parse_with_options(r#""\ude00""#, opts).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::Syntax);
}

#[test]
fn test_verbatim_escape_takes_any_four_characters() {
    let v = parse(r#""\uZZZZ!""#).unwrap();
    assert_eq!(v.as_str(), Some("\\uZZZZ!"));
    assert_eq!(v.to_string(), r#""\uZZZZ!""#);

    let v = parse(r#"["\u12\\n"]"#).unwrap();
    assert_eq!(v[0].as_str(), Some(r"\u12\\n"));

    let err = syntax_error(r#""\u12"#);
    assert!(err.message().contains("end of input"), "{}", err);
    syntax_error("\"\\u1\n23\"");
}

#[test]
fn test_decoded_escape_needs_four_hex_digits() {
    let opts = ParserOptions {
        unicode_escapes: UnicodeEscapes::Decode,
        ..Default::default()
    };
    let err = parse_with_options(r#""\uZZZZ""#, opts.clone()).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::Syntax);
    assert_eq!(err.location(), Some((1, 4)));
    let err = parse_with_options(r#""\u12""#, opts).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::Syntax);
}

#[test]
fn test_control_characters_must_be_escaped() {
    let err = syntax_error("\"a\nb\"");
    assert!(err.message().contains("control character"), "{}", err);
    syntax_error("\"\t\"");
}

#[test]
fn test_unterminated_string() {
    let err = syntax_error(r#"["abc"#);
    assert!(err.message().contains("unterminated"), "{}", err);
    syntax_error(r#""abc\"#);
}

#[test]
fn test_non_ascii_passes_through() {
    let v = parse("\"\u{4e2d}\u{6587}\"").unwrap();
    assert_eq!(v.length(), Some(2));
    assert_eq!(v.size(), Some(6));
}

#[test]
fn test_max_depth() {
    let opts = ParserOptions {
        max_depth: 3,
        ..Default::default()
    };
    assert!(parse_with_options("[[[1]]]", opts.clone()).is_ok());
    let err = parse_with_options("[[[[1]]]]", opts).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::Syntax);
    assert!(err.message().contains("nesting"), "{}", err);

    let deep = "[".repeat(10_000);
    assert!(parse(&deep).is_err());
}

#[test]
fn test_default_depth_rejects_deep_valid_document() {
    let doc = format!("{}{}", "[".repeat(200), "]".repeat(200));
    let err = parse(&doc).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::Syntax);
    assert!(err.message().contains("128"), "{}", err);

    let opts = ParserOptions {
        max_depth: 256,
        ..Default::default()
    };
    assert!(parse_with_options(&doc, opts).is_ok());
}

#[test]
fn test_parser_reuse() {
    let mut parser = Parser::new(r#"{"a":1}"#);
    assert_eq!(parser.parse().unwrap()["a"], Value::Int(1));
    assert_eq!(parser.value().map(|v| v.value_type()), Some(Type::Object));

    parser.reset("[oops");
    assert!(parser.parse().is_err());
    assert!(parser.value().is_none());

    parser.reset("42");
    parser.parse().unwrap();
    assert_eq!(parser.into_value(), Some(Value::Int(42)));
}

#[test]
fn test_parse_slice_checks_utf8() {
    assert_eq!(ejson::parse_slice(b"[true]").unwrap(), Value::from(vec![true]));
    let err = ejson::parse_slice(b"\"\xff\"").unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::Syntax);
}

#[test]
fn test_from_str_trait() {
    let v: Value = "[1, 2.5]".parse().unwrap();
    assert_eq!(v, Value::Array(vec![Value::Int(1), Value::Double(2.5)]));
}

#[test]
fn test_error_display_has_location() {
    let err = parse("[\n  1,\n  ?\n]").unwrap_err();
    assert_eq!(err.location(), Some((3, 3)));
    assert!(err.to_string().ends_with("at line 3, column 3"), "{}", err);
}
