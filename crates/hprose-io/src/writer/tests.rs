// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com
//! Wire format tests for the writer.

use super::*;
use crate::temporal::ZoneId;

fn written(f: impl FnOnce(&mut Writer)) -> String {
    let mut w = Writer::new();
    f(&mut w);
    String::from_utf8(w.into_bytes()).expect("utf8 output")
}

#[test]
fn test_integers() {
    assert_eq!(written(|w| w.write_integer(7)), "7");
    assert_eq!(written(|w| w.write_integer(10)), "i10;");
    assert_eq!(written(|w| w.write_integer(-1)), "i-1;");
    assert_eq!(written(|w| w.write_long(3)), "3");
    assert_eq!(written(|w| w.write_long(1 << 40)), "l1099511627776;");
    assert_eq!(written(|w| w.write_big_integer(5u128)), "l5;");
    assert_eq!(
        written(|w| w.write_big_integer(u128::MAX)),
        "l340282366920938463463374607431768211455;"
    );
}

#[test]
fn test_doubles() {
    assert_eq!(written(|w| w.write_double(1.5)), "d1.5;");
    assert_eq!(written(|w| w.write_double(f64::NAN)), "N");
    assert_eq!(written(|w| w.write_double(f64::INFINITY)), "I+");
    assert_eq!(written(|w| w.write_double(f64::NEG_INFINITY)), "I-");
    assert_eq!(written(|w| w.write_float(0.1)), "d0.1;");
    assert_eq!(written(|w| w.write_float(f32::NEG_INFINITY)), "I-");
}

#[test]
fn test_decimals_keep_scale() {
    assert_eq!(written(|w| w.write_decimal(&Decimal::new(150, 2))), "d1.50;");
    assert_eq!(written(|w| w.write_decimal(&Decimal::new(-5, 1))), "d-0.5;");
    assert_eq!(written(|w| w.write_decimal(&Decimal::ZERO)), "d0;");
}

#[test]
fn test_scalars() {
    assert_eq!(written(Writer::write_null), "n");
    assert_eq!(written(|w| w.write_bool(true)), "t");
    assert_eq!(written(|w| w.write_bool(false)), "f");
    assert_eq!(written(|w| w.write_char('x')), "ux");
    assert_eq!(written(|w| w.write_char('é')), "ué");
}

#[test]
fn test_strings_count_utf16_units() {
    assert_eq!(written(|w| w.write_string("")), "e");
    assert_eq!(written(|w| w.write_string("a")), "ua");
    assert_eq!(written(|w| w.write_string("hello")), "s5\"hello\"");
    // U+1F600 is one char but two UTF-16 units.
    assert_eq!(written(|w| w.write_string("\u{1F600}")), "s2\"\u{1F600}\"");
    assert_eq!(written(|w| w.write_char('\u{1F600}')), "s2\"\u{1F600}\"");
}

#[test]
fn test_bytes_and_uuid() {
    assert_eq!(written(|w| w.write_bytes(b"abc")), "b3\"abc\"");
    assert_eq!(written(|w| w.write_bytes(b"")), "b\"\"");
    let id = uuid::Uuid::nil();
    assert_eq!(
        written(|w| w.write_uuid(&id)),
        "g{00000000-0000-0000-0000-000000000000}"
    );
}

#[test]
fn test_dates_and_times() {
    let date = Date::new(2024, 2, 29).unwrap();
    let time = Time::new(12, 34, 56, 500_000_000).unwrap();
    assert_eq!(written(|w| w.write_date(&date)), "D20240229;");
    assert_eq!(written(|w| w.write_time(&time)), "T123456.500;");
    assert_eq!(
        written(|w| w.write_datetime(&DateTime::utc(date, time))),
        "D20240229T123456.500Z"
    );
    assert_eq!(
        written(|w| w.write_datetime(&DateTime::local(date, Time::MIDNIGHT))),
        "D20240229;"
    );
    assert_eq!(
        written(|w| w.write_timestamp(&DateTime::utc(date, Time::MIDNIGHT))),
        "D20240229T000000Z"
    );

    let micros = Time::new(1, 2, 3, 4_000).unwrap();
    assert_eq!(written(|w| w.write_time(&micros)), "T010203.000004;");
    let nanos = Time::new(1, 2, 3, 5).unwrap();
    assert_eq!(written(|w| w.write_time(&nanos)), "T010203.000000005;");
}

#[test]
fn test_calendar_marks_only_utc() {
    let date = Date::new(2020, 1, 2).unwrap();
    let time = Time::new(3, 4, 5, 0).unwrap();
    let paris = Calendar::new(date, time, ZoneId::new("Europe/Paris"));
    let utc = Calendar::new(date, time, ZoneId::utc());
    assert_eq!(written(|w| w.write_calendar(&paris)), "D20200102T030405;");
    assert_eq!(written(|w| w.write_calendar(&utc)), "D20200102T030405Z");
}

#[test]
fn test_containers() {
    let list = Value::List(vec![Value::I32(1), Value::String("ab".into())]);
    assert_eq!(written(|w| w.write_value(&list).unwrap()), "a2{1s2\"ab\"}");
    assert_eq!(written(|w| w.write_value(&Value::List(vec![])).unwrap()), "a{}");

    let map = Value::Map(vec![(Value::String("k".into()), Value::Bool(true))]);
    assert_eq!(written(|w| w.write_value(&map).unwrap()), "m1{ukt}");
}

#[test]
fn test_objects_define_class_once() {
    let point = |x: i32| Value::object("Point", [("x", Value::I32(x)), ("y", Value::I32(2))]);
    let mut w = Writer::new();
    w.write_value(&point(1)).unwrap();
    w.write_value(&point(3)).unwrap();
    assert_eq!(w.class_count(), 1);
    assert_eq!(
        String::from_utf8(w.into_bytes()).unwrap(),
        "c5\"Point\"2{uxuy}o0{12}o0{32}"
    );
}

#[test]
fn test_invalid_values_are_rejected() {
    let mut w = Writer::new();
    let err = w
        .write_value(&Value::object("", Vec::<(String, Value)>::new()))
        .unwrap_err();
    assert!(matches!(err, SerializeError::InvalidValue(_)));
    assert!(w.write_value(&Value::enumeration("", 0)).is_err());
}

#[test]
fn test_wide_integers_and_enums() {
    assert_eq!(written(|w| w.write_value(&Value::U32(9)).unwrap()), "9");
    assert_eq!(
        written(|w| w.write_value(&Value::U64(u64::MAX)).unwrap()),
        "l18446744073709551615;"
    );
    assert_eq!(
        written(|w| w.write_value(&Value::enumeration("Green", 1)).unwrap()),
        "s5\"Green\""
    );
}

#[test]
fn test_reset_forgets_classes() {
    let mut w = Writer::with_capacity(64);
    w.write_value(&Value::object("A", [("f", Value::Null)])).unwrap();
    assert!(!w.is_empty());
    w.reset();
    assert!(w.is_empty());
    assert_eq!(w.class_count(), 0);
}
