// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Dynamic value model consumed by serializers.

use crate::temporal::{Calendar, Date, DateTime, Time, ZoneId};
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::path::PathBuf;
use std::sync::atomic::{
    AtomicBool, AtomicI16, AtomicI32, AtomicI64, AtomicI8, AtomicU16, AtomicU32, AtomicU64,
    AtomicU8, Ordering,
};
use std::sync::Arc;
use rust_decimal::Decimal;
use std::time::{Duration, SystemTime};
use uuid::Uuid;

/// A value of any encodable type.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Char(char),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    I128(i128),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    U128(u128),
    F32(f32),
    F64(f64),
    /// Exact decimal, written in its textual form.
    Decimal(Decimal),
    String(String),
    Bytes(Vec<u8>),
    Uuid(Uuid),
    Date(Date),
    Time(Time),
    DateTime(DateTime),
    /// Date-time observed in a named zone.
    Zoned(Calendar),
    List(Vec<Value>),
    /// Key/value pairs in iteration order.
    Map(Vec<(Value, Value)>),
    /// Enumeration constant, identified by name; the ordinal is informative.
    Enum { name: String, ordinal: i64 },
    /// Structured value with named fields in declaration order.
    Object {
        class: String,
        fields: Vec<(String, Value)>,
    },
}

impl Value {
    /// Build an object value from `(field, value)` pairs.
    pub fn object<I, K>(class: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        Self::Object {
            class: class.into(),
            fields: fields.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Build an enum value.
    pub fn enumeration(name: impl Into<String>, ordinal: i64) -> Self {
        Self::Enum {
            name: name.into(),
            ordinal,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Short variant name, used in error messages.
    pub fn variant_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Char(_) => "char",
            Self::I8(_) => "i8",
            Self::I16(_) => "i16",
            Self::I32(_) => "i32",
            Self::I64(_) => "i64",
            Self::I128(_) => "i128",
            Self::U8(_) => "u8",
            Self::U16(_) => "u16",
            Self::U32(_) => "u32",
            Self::U64(_) => "u64",
            Self::U128(_) => "u128",
            Self::F32(_) => "f32",
            Self::F64(_) => "f64",
            Self::Decimal(_) => "decimal",
            Self::String(_) => "string",
            Self::Bytes(_) => "bytes",
            Self::Uuid(_) => "uuid",
            Self::Date(_) => "date",
            Self::Time(_) => "time",
            Self::DateTime(_) => "datetime",
            Self::Zoned(_) => "zoned",
            Self::List(_) => "list",
            Self::Map(_) => "map",
            Self::Enum { .. } => "enum",
            Self::Object { .. } => "object",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Integer value if it fits in 32 bits.
    pub fn as_i32(&self) -> Option<i32> {
        match *self {
            Self::I8(v) => Some(i32::from(v)),
            Self::I16(v) => Some(i32::from(v)),
            Self::I32(v) => Some(v),
            Self::U8(v) => Some(i32::from(v)),
            Self::U16(v) => Some(i32::from(v)),
            Self::I64(v) => i32::try_from(v).ok(),
            Self::U32(v) => i32::try_from(v).ok(),
            Self::U64(v) => i32::try_from(v).ok(),
            _ => None,
        }
    }

    /// Integer value if it fits in 64 bits (signed).
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Self::I64(v) => Some(v),
            Self::U32(v) => Some(i64::from(v)),
            Self::U64(v) => i64::try_from(v).ok(),
            Self::I128(v) => i64::try_from(v).ok(),
            Self::U128(v) => i64::try_from(v).ok(),
            _ => self.as_i32().map(i64::from),
        }
    }

    /// Any floating point or integer value as `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Self::F32(v) => Some(f64::from(v)),
            Self::F64(v) => Some(v),
            _ => self.as_i32().map(f64::from),
        }
    }
}

/// Conversion of a Rust value into a [`Value`].
pub trait ToValue {
    fn to_value(&self) -> Value;
}

macro_rules! impl_to_value_copy {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            impl ToValue for $ty {
                fn to_value(&self) -> Value {
                    Value::$variant(*self)
                }
            }

            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant(v)
                }
            }
        )+
    };
}

impl_to_value_copy!(
    bool => Bool, char => Char,
    i8 => I8, i16 => I16, i32 => I32, i64 => I64, i128 => I128,
    u8 => U8, u16 => U16, u32 => U32, u64 => U64, u128 => U128,
    f32 => F32, f64 => F64, Decimal => Decimal,
    Uuid => Uuid, Date => Date, Time => Time, DateTime => DateTime,
);

macro_rules! impl_to_value_atomic {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            impl ToValue for $ty {
                fn to_value(&self) -> Value {
                    Value::$variant(self.load(Ordering::Acquire))
                }
            }
        )+
    };
}

impl_to_value_atomic!(
    AtomicBool => Bool,
    AtomicI8 => I8, AtomicI16 => I16, AtomicI32 => I32, AtomicI64 => I64,
    AtomicU8 => U8, AtomicU16 => U16, AtomicU32 => U32, AtomicU64 => U64,
);

macro_rules! impl_to_value_display {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl ToValue for $ty {
                fn to_value(&self) -> Value {
                    Value::String(self.to_string())
                }
            }
        )+
    };
}

impl_to_value_display!(IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, ZoneId);

impl ToValue for isize {
    fn to_value(&self) -> Value {
        Value::I64(*self as i64)
    }
}

impl ToValue for usize {
    fn to_value(&self) -> Value {
        Value::U64(*self as u64)
    }
}

impl ToValue for () {
    fn to_value(&self) -> Value {
        Value::Null
    }
}

impl ToValue for str {
    fn to_value(&self) -> Value {
        Value::String(self.to_owned())
    }
}

impl ToValue for String {
    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }
}

impl ToValue for Box<str> {
    fn to_value(&self) -> Value {
        Value::String(self.to_string())
    }
}

impl ToValue for Arc<str> {
    fn to_value(&self) -> Value {
        Value::String(self.to_string())
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl ToValue for PathBuf {
    fn to_value(&self) -> Value {
        Value::String(self.to_string_lossy().into_owned())
    }
}

/// Rendered with `Debug`, e.g. `1.5s`.
impl ToValue for Duration {
    fn to_value(&self) -> Value {
        Value::String(format!("{:?}", self))
    }
}

impl ToValue for SystemTime {
    fn to_value(&self) -> Value {
        Value::DateTime(DateTime::from_system_time(*self))
    }
}

impl ToValue for Calendar {
    fn to_value(&self) -> Value {
        Value::Zoned(self.clone())
    }
}

impl ToValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Value {
        self.as_ref().map_or(Value::Null, ToValue::to_value)
    }
}

fn list_of<'a, T: ToValue + 'a>(items: impl IntoIterator<Item = &'a T>) -> Value {
    Value::List(items.into_iter().map(ToValue::to_value).collect())
}

impl<T: ToValue> ToValue for [T] {
    fn to_value(&self) -> Value {
        list_of(self)
    }
}

impl<T: ToValue, const N: usize> ToValue for [T; N] {
    fn to_value(&self) -> Value {
        list_of(self)
    }
}

impl<T: ToValue> ToValue for Box<[T]> {
    fn to_value(&self) -> Value {
        list_of(self.iter())
    }
}

impl<T: ToValue> ToValue for Vec<T> {
    fn to_value(&self) -> Value {
        list_of(self)
    }
}

impl<T: ToValue> ToValue for VecDeque<T> {
    fn to_value(&self) -> Value {
        list_of(self)
    }
}

impl<T: ToValue> ToValue for LinkedList<T> {
    fn to_value(&self) -> Value {
        list_of(self)
    }
}

impl<T: ToValue, S> ToValue for HashSet<T, S> {
    fn to_value(&self) -> Value {
        list_of(self)
    }
}

impl<T: ToValue> ToValue for BTreeSet<T> {
    fn to_value(&self) -> Value {
        list_of(self)
    }
}

impl<T: ToValue> ToValue for BinaryHeap<T> {
    fn to_value(&self) -> Value {
        list_of(self)
    }
}

impl<K: ToValue, V: ToValue, S> ToValue for HashMap<K, V, S> {
    fn to_value(&self) -> Value {
        Value::Map(self.iter().map(|(k, v)| (k.to_value(), v.to_value())).collect())
    }
}

impl<K: ToValue, V: ToValue> ToValue for BTreeMap<K, V> {
    fn to_value(&self) -> Value {
        Value::Map(self.iter().map(|(k, v)| (k.to_value(), v.to_value())).collect())
    }
}

#[cfg(feature = "chrono")]
mod chrono_impls {
    use super::{ToValue, Value};
    use crate::temporal::{Calendar, Date, DateTime, Time, ZoneId};
    use chrono::{Datelike, Offset, Timelike};

    fn date_of(date: &chrono::NaiveDate) -> Option<Date> {
        let month = u8::try_from(date.month()).ok()?;
        let day = u8::try_from(date.day()).ok()?;
        Date::new(date.year(), month, day)
    }

    fn time_of(time: &chrono::NaiveTime) -> Option<Time> {
        // Leap seconds are folded into the last nanosecond of the minute.
        let nanos = time.nanosecond().min(999_999_999);
        Time::new(
            u8::try_from(time.hour()).ok()?,
            u8::try_from(time.minute()).ok()?,
            u8::try_from(time.second()).ok()?,
            nanos,
        )
    }

    impl ToValue for chrono::NaiveDate {
        fn to_value(&self) -> Value {
            date_of(self).map_or_else(|| Value::String(self.to_string()), Value::Date)
        }
    }

    impl ToValue for chrono::NaiveTime {
        fn to_value(&self) -> Value {
            time_of(self).map_or_else(|| Value::String(self.to_string()), Value::Time)
        }
    }

    impl ToValue for chrono::NaiveDateTime {
        fn to_value(&self) -> Value {
            match (date_of(&self.date()), time_of(&self.time())) {
                (Some(date), Some(time)) => Value::DateTime(DateTime::local(date, time)),
                _ => Value::String(self.to_string()),
            }
        }
    }

    /// UTC instants become UTC date-times; anything else keeps its offset as zone.
    impl<Tz: chrono::TimeZone> ToValue for chrono::DateTime<Tz> {
        fn to_value(&self) -> Value {
            let offset = self.offset().fix();
            let local = self.naive_local();
            let (Some(date), Some(time)) = (date_of(&local.date()), time_of(&local.time())) else {
                return Value::String(local.to_string());
            };
            if offset.local_minus_utc() == 0 {
                Value::DateTime(DateTime::utc(date, time))
            } else {
                Value::Zoned(Calendar::new(date, time, ZoneId::new(offset.to_string())))
            }
        }
    }

    impl ToValue for chrono::TimeDelta {
        fn to_value(&self) -> Value {
            Value::String(self.to_string())
        }
    }

    impl ToValue for chrono::Weekday {
        fn to_value(&self) -> Value {
            Value::String(self.to_string())
        }
    }

    impl ToValue for chrono::Month {
        fn to_value(&self) -> Value {
            Value::String(self.name().to_owned())
        }
    }

    impl ToValue for chrono::Utc {
        fn to_value(&self) -> Value {
            Value::String("UTC".to_owned())
        }
    }

    impl ToValue for chrono::FixedOffset {
        fn to_value(&self) -> Value {
            Value::String(self.to_string())
        }
    }

    impl ToValue for chrono::Local {
        fn to_value(&self) -> Value {
            Value::String("Local".to_owned())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_conversions() {
        assert_eq!(42i32.to_value(), Value::I32(42));
        assert_eq!(true.to_value(), Value::Bool(true));
        assert_eq!("hi".to_value(), Value::String("hi".into()));
        assert_eq!(Some(7u8).to_value(), Value::U8(7));
        assert_eq!(None::<u8>.to_value(), Value::Null);
        assert_eq!(().to_value(), Value::Null);
    }

    #[test]
    fn test_integer_widening() {
        assert_eq!(Value::U16(65_535).as_i32(), Some(65_535));
        assert_eq!(Value::I64(1 << 40).as_i32(), None);
        assert_eq!(Value::I64(1 << 40).as_i64(), Some(1 << 40));
        assert_eq!(Value::U64(u64::MAX).as_i64(), None);
        assert_eq!(Value::F32(1.5).as_f64(), Some(1.5));
        assert_eq!(Value::String("x".into()).as_i32(), None);
    }

    #[test]
    fn test_containers() {
        let v = vec![1u8, 2, 3].to_value();
        assert_eq!(v.as_list().map(<[Value]>::len), Some(3));

        let mut map = BTreeMap::new();
        map.insert("a".to_string(), 1i32);
        assert_eq!(
            map.to_value(),
            Value::Map(vec![(Value::String("a".into()), Value::I32(1))])
        );
    }

    #[test]
    fn test_atomic_reads_current_value() {
        let counter = AtomicI64::new(5);
        counter.fetch_add(2, Ordering::SeqCst);
        assert_eq!(counter.to_value(), Value::I64(7));
    }

    #[test]
    fn test_object_builder() {
        let v = Value::object("Point", [("x", Value::I32(1)), ("y", Value::I32(2))]);
        match v {
            Value::Object { class, fields } => {
                assert_eq!(class, "Point");
                assert_eq!(fields[1].0, "y");
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(Value::enumeration("Red", 0).variant_name(), "enum");
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn test_chrono_conversions() {
        use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};

        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(date.to_value(), Value::Date(Date::new(2024, 2, 29).unwrap()));

        let utc = Utc.with_ymd_and_hms(2020, 1, 2, 3, 4, 5).unwrap();
        match utc.to_value() {
            Value::DateTime(dt) => assert!(dt.utc),
            other => panic!("unexpected {:?}", other),
        }

        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let paris = offset.with_ymd_and_hms(2020, 1, 2, 3, 4, 5).unwrap();
        match paris.to_value() {
            Value::Zoned(cal) => {
                assert_eq!(cal.zone.as_str(), "+02:00");
                assert_eq!(cal.time.hour(), 3);
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
