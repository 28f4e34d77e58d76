use alloc::string::ToString;
use alloc::vec::Vec;

use rstest::rstest;

use crate::{Parser, SyntaxErrorKind, TreeBuilder, Value, from_slice, from_str};

#[rstest]
#[case::literal_tru(r#"{"a": tru}"#, SyntaxErrorKind::InvalidLiteral("tru".into()), "boolean_or_null_or_number", 1)]
#[case::literal_nul(r#"{"a": nul,"b":1}"#, SyntaxErrorKind::InvalidLiteral("nul".into()), "boolean_or_null_or_number", 1)]
#[case::leading_zero(r#"{"a": 01}"#, SyntaxErrorKind::InvalidLiteral("01".into()), "boolean_or_null_or_number", 1)]
#[case::bare_minus(r#"{"a": -}"#, SyntaxErrorKind::InvalidLiteral("-".into()), "boolean_or_null_or_number", 1)]
#[case::dangling_point(r#"{"a": 1.}"#, SyntaxErrorKind::InvalidLiteral("1.".into()), "boolean_or_null_or_number", 1)]
#[case::dangling_exponent(r#"{"a": 1e}"#, SyntaxErrorKind::InvalidLiteral("1e".into()), "boolean_or_null_or_number", 1)]
#[case::root_array("[1,2]", SyntaxErrorKind::UnexpectedCharacter('['), "idle", 1)]
#[case::root_number("42", SyntaxErrorKind::UnexpectedCharacter('4'), "idle", 1)]
#[case::root_string(r#""x""#, SyntaxErrorKind::UnexpectedCharacter('"'), "idle", 1)]
#[case::array_closed_as_object(r#"{"a":[1}"#, SyntaxErrorKind::UnexpectedCharacter('}'), "boolean_or_null_or_number", 1)]
#[case::object_closed_as_array(r#"{"a":"x"]"#, SyntaxErrorKind::UnexpectedCharacter(']'), "comma", 1)]
#[case::close_after_comma(r#"{"a":1,]"#, SyntaxErrorKind::UnexpectedCharacter(']'), "object", 1)]
#[case::missing_colon(r#"{"a" 1}"#, SyntaxErrorKind::UnexpectedCharacter('1'), "colon", 1)]
#[case::equals_for_colon(r#"{"a"=1}"#, SyntaxErrorKind::UnexpectedCharacter('='), "colon", 1)]
#[case::unquoted_key("{a:1}", SyntaxErrorKind::UnexpectedCharacter('a'), "object", 1)]
#[case::bad_value_start(r#"{"a": x}"#, SyntaxErrorKind::UnexpectedCharacter('x'), "value", 1)]
#[case::double_comma(r#"{"a":1,,"b":2}"#, SyntaxErrorKind::UnexpectedCharacter(','), "object", 1)]
#[case::trailing_garbage("{} x", SyntaxErrorKind::UnexpectedCharacter('x'), "idle", 1)]
#[case::second_line("{\n  \"a\": tru}", SyntaxErrorKind::InvalidLiteral("tru".into()), "boolean_or_null_or_number", 2)]
fn rejects(
    #[case] src: &str,
    #[case] kind: SyntaxErrorKind,
    #[case] state: &str,
    #[case] line: usize,
) {
    let err = from_str(src).unwrap_err();
    assert_eq!(err.kind, kind, "on {src:?}");
    assert_eq!(err.state, state, "on {src:?}");
    assert_eq!(err.line, line, "on {src:?}");
}

#[rstest]
#[case::open_object("{", "object")]
#[case::after_key(r#"{"a""#, "colon")]
#[case::after_colon(r#"{"a":"#, "value")]
#[case::open_string(r#"{"a":"xy"#, "string")]
#[case::open_escape(r#"{"a":"xy\"#, "string_escape_sequence")]
#[case::open_array(r#"{"a":["#, "array")]
#[case::open_literal(r#"{"a":[tru"#, "boolean_or_null_or_number")]
#[case::after_value(r#"{"a":[true "#, "comma")]
fn truncated_documents(#[case] src: &str, #[case] state: &str) {
    let err = from_str(src).unwrap_err();
    assert_eq!(err.kind, SyntaxErrorKind::UnexpectedEndOfInput, "on {src:?}");
    assert_eq!(err.state, state, "on {src:?}");
}

#[test]
fn bad_escape_character() {
    let err = from_str(r#"{"a":"\x"}"#).unwrap_err();
    assert_eq!(err.kind, SyntaxErrorKind::InvalidEscape('x'));
    assert_eq!(err.state, "string_escape_sequence");
}

#[test]
fn surrogate_escape_is_rejected() {
    let err = from_str(r#"{"a":"\uD800"}"#).unwrap_err();
    assert_eq!(err.kind, SyntaxErrorKind::InvalidUnicodeEscape(0xD800));
    assert_eq!(err.state, "unicode_escape");
}

#[test]
fn non_hex_unicode_digit() {
    let err = from_str(r#"{"a":"\u00G1"}"#).unwrap_err();
    assert_eq!(err.kind, SyntaxErrorKind::UnexpectedCharacter('G'));
    assert_eq!(err.state, "unicode_escape");
}

#[test]
fn error_message_shape() {
    let err = from_str("{\n\"a\": tru}").unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid literal \"tru\" in boolean_or_null_or_number state at line 2"
    );
}

#[test]
fn errors_are_latched() {
    let mut parser = Parser::new(TreeBuilder::new());
    let first = parser.feed("[").unwrap_err();
    // the parse is terminal: further input reports the same error
    assert_eq!(parser.feed("{}").unwrap_err(), first);
    assert_eq!(parser.finish().unwrap_err(), first);
}

#[test]
fn line_counter_tracks_feeds() {
    let mut parser = Parser::new(TreeBuilder::new());
    parser.feed("{\n\"a\": [\n").unwrap();
    let err = parser.feed("oops\n").unwrap_err();
    assert_eq!(err.line, 3);
}

#[test]
fn invalid_utf8_bytes() {
    let err = from_slice(b"{\"a\": \xff}").unwrap_err();
    assert_eq!(err.kind, SyntaxErrorKind::InvalidUtf8);
}

#[test]
fn invalid_continuation_after_split_sequence() {
    let mut parser = Parser::new(TreeBuilder::new());
    // first byte of a two-byte sequence, then a plain ASCII byte
    parser.feed_bytes(b"{\"a\": \"\xc3").unwrap();
    let err = parser.feed_bytes(b"x\"}").unwrap_err();
    assert_eq!(err.kind, SyntaxErrorKind::InvalidUtf8);
}

#[test]
fn truncated_utf8_at_end_of_input() {
    let mut parser = Parser::new(TreeBuilder::new());
    parser.feed_bytes(b"{\"a\": \"\xf0\x9f").unwrap();
    let err = parser.finish().unwrap_err();
    assert_eq!(err.kind, SyntaxErrorKind::UnexpectedEndOfInput);
}

#[test]
fn writing_non_object_root_is_refused() {
    let mut out = Vec::new();
    let err = crate::write(&mut out, &Value::Null).unwrap_err();
    assert!(matches!(err, crate::WriteError::NonObjectRoot));
    assert!(out.is_empty());

    let arr = Value::Array(alloc::vec![Value::Boolean(true)]);
    assert!(matches!(
        crate::write(&mut out, &arr).unwrap_err(),
        crate::WriteError::NonObjectRoot
    ));
}
