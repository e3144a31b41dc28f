// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com
//
// End-to-end wire output: native values resolved through the registry and
// encoded into Hprose bytes.

use hprose_io::{
    describe, to_bytes, Date, DateTime, Encoder, SerializeError, SerializerRegistry, Time,
    ToValue, Value,
};
use std::collections::BTreeMap;
use std::net::Ipv4Addr;
use std::time::{Duration, UNIX_EPOCH};

#[derive(Clone, Copy)]
enum Level {
    Low,
    High,
}

impl ToValue for Level {
    fn to_value(&self) -> Value {
        match self {
            Level::Low => Value::enumeration("Low", 0),
            Level::High => Value::enumeration("High", 1),
        }
    }
}

struct Reading {
    id: u32,
    level: Level,
    tags: Vec<String>,
}

impl ToValue for Reading {
    fn to_value(&self) -> Value {
        Value::object(
            "Reading",
            [
                ("id", self.id.to_value()),
                ("level", self.level.to_value()),
                ("tags", self.tags.to_value()),
            ],
        )
    }
}

describe!(enum Level);
describe!(object Reading);

fn text(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes).expect("utf8 output")
}

#[test]
fn test_scalars() {
    let registry = SerializerRegistry::new();
    assert_eq!(text(to_bytes(&registry, &()).unwrap()), "n");
    assert_eq!(text(to_bytes(&registry, &7u8).unwrap()), "7");
    assert_eq!(text(to_bytes(&registry, &-42i32).unwrap()), "i-42;");
    assert_eq!(text(to_bytes(&registry, &1_000_000_000_000i64).unwrap()), "l1000000000000;");
    assert_eq!(text(to_bytes(&registry, &f64::INFINITY).unwrap()), "I+");
    assert_eq!(text(to_bytes(&registry, &Some('z')).unwrap()), "uz");
    assert_eq!(text(to_bytes(&registry, "").unwrap()), "e");
    assert_eq!(text(to_bytes(&registry, &"héllo".to_string()).unwrap()), "s5\"héllo\"");
    assert_eq!(
        text(to_bytes(&registry, &Ipv4Addr::LOCALHOST).unwrap()),
        "s9\"127.0.0.1\""
    );
    assert_eq!(
        text(to_bytes(&registry, &Duration::from_millis(1500)).unwrap()),
        "s4\"1.5s\""
    );
}

#[test]
fn test_temporal() {
    let registry = SerializerRegistry::new();
    let date = Date::new(2021, 7, 4).unwrap();
    assert_eq!(text(to_bytes(&registry, &date).unwrap()), "D20210704;");

    let dt = DateTime::local(date, Time::new(8, 30, 0, 250_000_000).unwrap());
    assert_eq!(text(to_bytes(&registry, &dt).unwrap()), "D20210704T083000.250;");

    let instant = UNIX_EPOCH + Duration::from_secs(86_400);
    assert_eq!(text(to_bytes(&registry, &instant).unwrap()), "D19700102T000000Z");
}

#[test]
fn test_user_types() {
    let registry = SerializerRegistry::new();
    assert_eq!(text(to_bytes(&registry, &Level::High).unwrap()), "s4\"High\"");

    let reading = Reading {
        id: 12,
        level: Level::Low,
        tags: vec!["a".into(), "bc".into()],
    };
    assert_eq!(
        text(to_bytes(&registry, &reading).unwrap()),
        "c7\"Reading\"3{s2\"id\"s5\"level\"s4\"tags\"}o0{l12;s3\"Low\"a2{uas2\"bc\"}}"
    );
}

#[test]
fn test_class_definitions_are_shared_in_one_stream() {
    let registry = SerializerRegistry::new();
    let mut encoder = Encoder::new(&registry);
    let make = |id| Reading {
        id,
        level: Level::High,
        tags: Vec::new(),
    };
    encoder.encode(&make(1)).unwrap().encode(&make(2)).unwrap();
    let out = text(encoder.into_bytes());
    assert_eq!(out.matches("c7\"Reading\"").count(), 1);
    assert!(out.ends_with("o0{1s4\"High\"a{}}o0{2s4\"High\"a{}}"));
}

#[test]
fn test_arrays_and_maps() {
    let registry = SerializerRegistry::new();
    let levels = [Level::Low, Level::High];
    assert_eq!(
        text(to_bytes(&registry, &levels).unwrap()),
        "a2{s3\"Low\"s4\"High\"}"
    );

    let grid: Box<[Box<[i32]>]> = vec![vec![1, 2].into_boxed_slice(), Vec::<i32>::new().into_boxed_slice()].into();
    assert_eq!(text(to_bytes(&registry, &grid).unwrap()), "a2{a2{12}a{}}");

    let mut scores = BTreeMap::new();
    scores.insert("x".to_string(), 1.5f64);
    assert_eq!(text(to_bytes(&registry, &scores).unwrap()), "m1{uxd1.5;}");
}

#[test]
fn test_mismatch_surfaces_as_error() {
    let registry = SerializerRegistry::new();
    registry.register_type::<Level>(&hprose_io::serialize::builtin::BOOL);
    let err = to_bytes(&registry, &Level::Low).unwrap_err();
    assert_eq!(
        err,
        SerializeError::TypeMismatch {
            serializer: "bool",
            found: "enum"
        }
    );
    assert_eq!(err.to_string(), "bool serializer cannot encode a enum value");
}

#[cfg(feature = "chrono")]
#[test]
fn test_chrono_types() {
    use chrono::{FixedOffset, NaiveDate, TimeZone, Utc, Weekday};

    let registry = SerializerRegistry::new();
    let date = NaiveDate::from_ymd_opt(2022, 3, 1).unwrap();
    assert_eq!(text(to_bytes(&registry, &date).unwrap()), "D20220301;");

    let utc = Utc.with_ymd_and_hms(2022, 3, 1, 10, 0, 0).unwrap();
    assert_eq!(text(to_bytes(&registry, &utc).unwrap()), "D20220301T100000Z");

    let offset = FixedOffset::west_opt(5 * 3600).unwrap();
    let local = offset.with_ymd_and_hms(2022, 3, 1, 10, 0, 0).unwrap();
    assert_eq!(registry.get_for::<chrono::DateTime<FixedOffset>>().name(), "calendar");
    assert_eq!(text(to_bytes(&registry, &local).unwrap()), "D20220301T100000;");

    assert_eq!(text(to_bytes(&registry, &Weekday::Mon).unwrap()), "s3\"Mon\"");
    assert_eq!(text(to_bytes(&registry, &offset).unwrap()), "s6\"-05:00\"");
}

#[test]
fn test_nullable_byte_and_char_arrays_match_bare_form() {
    let registry = SerializerRegistry::new();
    let bytes = vec![1u8, 2];
    let bare = to_bytes(&registry, &bytes).unwrap();
    assert_eq!(bare, b"b2\"\x01\x02\"");
    assert_eq!(to_bytes(&registry, &Some(bytes.clone())).unwrap(), bare);
    assert_eq!(to_bytes(&registry, &None::<Vec<u8>>).unwrap(), b"n");
    assert_eq!(registry.get_for::<Option<Vec<u8>>>().name(), "bytes");

    let boxed: Box<[u8]> = bytes.into_boxed_slice();
    assert_eq!(to_bytes(&registry, &Some(boxed)).unwrap(), bare);

    let chars: Box<[char]> = vec!['a', 'b'].into_boxed_slice();
    assert_eq!(text(to_bytes(&registry, &chars).unwrap()), "s2\"ab\"");
    assert_eq!(text(to_bytes(&registry, &Some(chars)).unwrap()), "s2\"ab\"");

    // Fixed-size byte arrays are classified, then written compactly.
    assert_eq!(registry.get_for::<[u8; 2]>().name(), "array");
    assert_eq!(to_bytes(&registry, &[1u8, 2]).unwrap(), bare);
}

#[test]
fn test_decimals_and_atomic_arrays() {
    use rust_decimal::Decimal;
    use std::sync::atomic::{AtomicI32, AtomicI64};

    let registry = SerializerRegistry::new();
    let price = Decimal::new(1999, 2);
    assert_eq!(text(to_bytes(&registry, &price).unwrap()), "d19.99;");
    assert_eq!(text(to_bytes(&registry, &None::<Decimal>).unwrap()), "n");

    let prices: Box<[Decimal]> = vec![Decimal::new(10, 1), Decimal::ZERO].into();
    assert_eq!(registry.get_for::<Box<[Decimal]>>().name(), "decimal-array");
    assert_eq!(text(to_bytes(&registry, &prices).unwrap()), "a2{d1.0;d0;}");

    let counters: Box<[AtomicI32]> = vec![AtomicI32::new(3), AtomicI32::new(40)].into();
    assert_eq!(registry.get_for::<Box<[AtomicI32]>>().name(), "int-array");
    assert_eq!(text(to_bytes(&registry, &counters).unwrap()), "a2{3i40;}");

    let totals: Box<[AtomicI64]> = vec![AtomicI64::new(1 << 40)].into();
    assert_eq!(registry.get_for::<Box<[AtomicI64]>>().name(), "long-array");
    assert_eq!(text(to_bytes(&registry, &totals).unwrap()), "a1{l1099511627776;}");
}
