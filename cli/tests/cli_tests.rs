//! Integration tests for the `ejson` binary.

// `Command::cargo_bin` is deprecated in newer assert_cmd releases.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

fn sample_json_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/sample.json")
}

fn ejson() -> Command {
    Command::cargo_bin("ejson").unwrap()
}

#[test]
fn raw_text_is_indented_by_default() {
    ejson()
        .arg(r#"{"b":[1,2],"a":true}"#)
        .assert()
        .success()
        .stdout("{\n  \"a\" : true,\n  \"b\" : [\n          1,\n          2\n        ]\n}\n");
}

#[test]
fn compact_flag_renders_one_line() {
    ejson()
        .args(["--compact", r#"{ "b" : [1, 2], "a" : true }"#])
        .assert()
        .success()
        .stdout("{\"a\":true,\"b\":[1,2]}\n");
}

#[test]
fn reads_file_input() {
    ejson()
        .args(["--compact", sample_json_path()])
        .assert()
        .success()
        .stdout("{\"active\":true,\"name\":\"Alice\",\"scores\":[90,85.5,null]}\n");
}

#[test]
fn reads_stdin_with_dash() {
    ejson()
        .args(["--compact", "-"])
        .write_stdin("[ 1e-5 , -0.5 ]")
        .assert()
        .success()
        .stdout("[0.00001,-0.5]\n");
}

#[test]
fn unicode_escapes_verbatim_or_decoded() {
    ejson()
        .args(["--compact", r#""caf\u00e9""#])
        .assert()
        .success()
        .stdout("\"caf\\u00e9\"\n");

    ejson()
        .args(["--compact", "--decode-unicode", r#""caf\u00e9""#])
        .assert()
        .success()
        .stdout("\"caf\u{e9}\"\n");
}

#[test]
fn escape_flag_quotes_special_characters() {
    ejson()
        .args(["--compact", r#"["a\"b"]"#])
        .assert()
        .success()
        .stdout("[\"a\"b\"]\n");

    ejson()
        .args(["--compact", "--escape", r#"["a\"b"]"#])
        .assert()
        .success()
        .stdout("[\"a\\\"b\"]\n");
}

#[test]
fn check_prints_nothing_on_success() {
    ejson()
        .args(["--check", r#"{"ok":[null]}"#])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn invalid_input_fails_with_location() {
    ejson()
        .arg(r#"{"a":}"#)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("line 1, column 6"))
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn integer_overflow_is_reported() {
    ejson()
        .args(["--check", "9999999999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn missing_input_is_a_usage_error() {
    ejson().assert().failure();
}
