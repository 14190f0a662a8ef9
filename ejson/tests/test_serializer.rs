use ejson::{
    Serializer, SerializerOptions, StringEscape, Style, Type, Value, parse, to_string,
    to_string_pretty, to_string_with_options,
};

#[test]
fn test_compact_scalars() {
    assert_eq!(to_string(&Value::Null), "null");
    assert_eq!(to_string(&Value::Bool(false)), "false");
    assert_eq!(to_string(&Value::Int(-42)), "-42");
    assert_eq!(to_string(&Value::from("x")), r#""x""#);
}

#[test]
fn test_doubles_keep_a_fraction() {
    assert_eq!(to_string(&Value::Double(2.0)), "2.0");
    assert_eq!(to_string(&Value::Double(-0.5)), "-0.5");
    assert_eq!(to_string(&Value::Double(0.1)), "0.1");
    assert_eq!(to_string(&Value::Double(1e-5)), "0.00001");
    assert_eq!(to_string(&Value::Double(1e21)), "1000000000000000000000.0");
    assert_eq!(to_string(&Value::Double(-0.0)), "-0.0");
}

#[test]
fn test_non_finite_doubles_render_null() {
    assert_eq!(to_string(&Value::Double(f64::NAN)), "null");
    assert_eq!(to_string(&Value::Double(f64::INFINITY)), "null");
}

#[test]
fn test_compact_keys_sorted() {
    let mut v = Value::new(Type::Object);
    v.insert("zeta", 1).unwrap();
    v.insert("alpha", 2).unwrap();
    v.insert("Mid", 3).unwrap();
    assert_eq!(to_string(&v), r#"{"Mid":3,"alpha":2,"zeta":1}"#);
}

#[test]
fn test_compact_nested() {
    let v = parse(r#" { "list" : [ 1 , [ ] , { } , "s" ] } "#).unwrap();
    assert_eq!(to_string(&v), r#"{"list":[1,[],{},"s"]}"#);
}

#[test]
fn test_indented_scalar_has_no_whitespace() {
    assert_eq!(to_string_pretty(&Value::Int(1)), "1");
    assert_eq!(to_string_pretty(&Value::new(Type::Array)), "[]");
    assert_eq!(to_string_pretty(&Value::new(Type::Object)), "{}");
}

#[test]
fn test_indented_array_of_objects() {
    let v = parse(r#"[{"a":1},2]"#).unwrap();
    assert_eq!(
        to_string_pretty(&v),
        "[\n  {\n    \"a\" : 1\n  },\n  2\n]"
    );
}

#[test]
fn test_indented_values_align_after_key() {
    let v = parse(r#"{"o":{"k":true},"xs":[null]}"#).unwrap();
    let expected = concat!(
        "{\n",
        "  \"o\" : {\n",
        "          \"k\" : true\n",
        "        },\n",
        "  \"xs\" : [\n",
        "           null\n",
        "         ]\n",
        "}"
    );
    assert_eq!(to_string_pretty(&v), expected);
}

#[test]
fn test_indent_width_option() {
    let v = parse("[[1]]").unwrap();
    let opts = SerializerOptions {
        style: Style::Indented,
        indent: 4,
        ..Default::default()
    };
    assert_eq!(
        to_string_with_options(&v, opts),
        "[\n    [\n        1\n    ]\n]"
    );
}

#[test]
fn test_raw_strings_are_not_escaped() {
    let v = Value::from("a\"b\\c\nd");
    assert_eq!(to_string(&v), "\"a\"b\\c\nd\"");
}

#[test]
fn test_json_escape_option() {
    let v = Value::from("a\"b\\c\nd\t\u{1}");
    let opts = SerializerOptions {
        escape: StringEscape::Json,
        ..Default::default()
    };
    assert_eq!(
        to_string_with_options(&v, opts),
        r#""a\"b\\c\nd\t\u0001""#
    );
}

#[test]
fn test_json_escape_applies_to_keys() {
    let mut v = Value::new(Type::Object);
    v.insert("q\"k", 1).unwrap();
    let opts = SerializerOptions {
        escape: StringEscape::Json,
        ..SerializerOptions::compact()
    };
    assert_eq!(to_string_with_options(&v, opts), r#"{"q\"k":1}"#);
}

#[test]
fn test_display_uses_compact_and_alternate_uses_indented() {
    let v = parse(r#"{"a":[1]}"#).unwrap();
    assert_eq!(format!("{}", v), r#"{"a":[1]}"#);
    assert_eq!(format!("{:#}", v), to_string_pretty(&v));
    assert_eq!(v.to_compact_string(), v.to_string());
    assert_eq!(v.to_pretty_string(), format!("{:#}", v));
}

#[test]
fn test_serializer_into_custom_writer() {
    let v = parse(r#"[true,"x"]"#).unwrap();
    let mut ser = Serializer::new(String::from(">> "), SerializerOptions::compact());
    ser.serialize_value(&v).unwrap();
    assert_eq!(ser.into_inner(), r#">> [true,"x"]"#);
}

#[test]
fn test_rendering_is_repeatable() {
    let v = parse(r#"{"b":[1,2.5,"s"],"a":{"c":null}}"#).unwrap();
    assert_eq!(to_string(&v), to_string(&v));
    assert_eq!(to_string_pretty(&v), to_string_pretty(&v));
}
