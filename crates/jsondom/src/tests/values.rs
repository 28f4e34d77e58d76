use alloc::string::ToString;
use alloc::vec;

use crate::{Map, StringNumber, Value, ValueKind};

#[test]
fn kind_and_predicates() {
    let cases = [
        (Value::Null, ValueKind::Null),
        (Value::Boolean(true), ValueKind::Boolean),
        (Value::Number(StringNumber::new("1")), ValueKind::Number),
        (Value::String("s".into()), ValueKind::String),
        (Value::Array(vec![]), ValueKind::Array),
        (Value::Object(Map::new()), ValueKind::Object),
    ];
    for (value, kind) in cases {
        assert_eq!(value.kind(), kind);
        assert_eq!(value.is_null(), kind == ValueKind::Null);
        assert_eq!(value.is_boolean(), kind == ValueKind::Boolean);
        assert_eq!(value.is_number(), kind == ValueKind::Number);
        assert_eq!(value.is_string(), kind == ValueKind::String);
        assert_eq!(value.is_array(), kind == ValueKind::Array);
        assert_eq!(value.is_object(), kind == ValueKind::Object);
    }
}

#[test]
fn mismatched_access_reports_both_kinds() {
    let v = Value::Number(StringNumber::new("7"));
    let err = v.string().unwrap_err();
    assert_eq!(err.requested, ValueKind::String);
    assert_eq!(err.actual, ValueKind::Number);
    assert_eq!(
        err.to_string(),
        "could not access string value, stored value is of another type (number)"
    );
}

#[test]
fn accessors_fail_on_every_other_kind() {
    let v = Value::Null;
    assert!(v.boolean().is_err());
    assert!(v.number().is_err());
    assert!(v.string().is_err());
    assert!(v.array().is_err());
    assert!(v.object().is_err());

    let mut v = Value::Boolean(false);
    assert!(v.number_mut().is_err());
    assert!(v.string_mut().is_err());
    assert!(v.array_mut().is_err());
    assert!(v.object_mut().is_err());
    assert!(v.boolean_mut().is_ok());
}

#[test]
fn mutable_access_edits_in_place() {
    let mut v = Value::Boolean(false);
    *v.boolean_mut().unwrap() = true;
    assert_eq!(v.boolean().unwrap(), true);

    let mut v = Value::String("ab".into());
    v.string_mut().unwrap().push('c');
    assert_eq!(v.string().unwrap(), "abc");

    let mut v = Value::Array(vec![]);
    v.array_mut().unwrap().push(Value::Null);
    assert_eq!(v.array().unwrap().len(), 1);

    let mut v = Value::Object(Map::new());
    v.object_mut().unwrap().insert("k".into(), 5i64.into());
    assert_eq!(v.object().unwrap()["k"].number().unwrap().as_str(), "5");

    let mut v = Value::Number(StringNumber::new("1"));
    *v.number_mut().unwrap() = StringNumber::from(2u32);
    assert_eq!(v.number().unwrap().as_str(), "2");
}

#[test]
fn from_conversions() {
    assert_eq!(Value::from(true), Value::Boolean(true));
    assert_eq!(Value::from("s"), Value::String("s".into()));
    assert_eq!(Value::from(-4i32), Value::Number(StringNumber::new("-4")));
    assert_eq!(Value::from(0.5f64), Value::Number(StringNumber::new("0.5")));
    assert_eq!(Value::from(vec![Value::Null]).kind(), ValueKind::Array);
    assert_eq!(Value::from(Map::new()).kind(), ValueKind::Object);
    assert_eq!(Value::default(), Value::Null);
}

#[test]
fn scalar_display() {
    assert_eq!(Value::Null.to_string(), "null");
    assert_eq!(Value::Boolean(true).to_string(), "true");
    assert_eq!(Value::Boolean(false).to_string(), "false");
    assert_eq!(Value::Number(StringNumber::new("1.5e0")).to_string(), "1.5e0");
    assert_eq!(Value::String("a\"b".into()).to_string(), "\"a\\\"b\"");
    // rendering a bare value has no object-root restriction
    assert_eq!(Value::Array(vec![Value::Null]).to_string(), "[null]");
}
