// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Built-in serializer families and the bootstrap table.
//!
//! Each family is a unit struct with a single `static` instance, except the
//! typed arrays, which share [`TypedArraySerializer`] parameterized by their
//! element family.

pub mod array;
pub mod collection;
pub mod object;
pub mod primitive;
pub mod temporal;
pub mod text;


pub use array::{
    ArraySerializer, BytesSerializer, CharArraySerializer, TypedArraySerializer, ARRAY,
    BIG_INTEGER_ARRAY, BOOL_ARRAY, BYTES, BYTES_ARRAY, CHARS_ARRAY, CHAR_ARRAY, DATETIME_ARRAY,
    DATE_ARRAY, DECIMAL_ARRAY, DOUBLE_ARRAY, FLOAT_ARRAY, INT_ARRAY, LONG_ARRAY, SHORT_ARRAY,
    STRING_ARRAY, TIME_ARRAY, UUID_ARRAY,
};
pub use collection::{CollectionSerializer, ListSerializer, MapSerializer, COLLECTION, LIST, MAP};
pub use object::{EnumSerializer, ObjectSerializer, ValueSerializer, ENUM, OBJECT, VALUE};
pub use primitive::{
    BigIntegerSerializer, BoolSerializer, CharSerializer, DecimalSerializer, DoubleSerializer,
    FloatSerializer, IntegerSerializer, LongSerializer, NullSerializer, BIG_INTEGER, BOOL, CHAR,
    DECIMAL, DOUBLE, FLOAT, INTEGER, LONG, NULL,
};
pub use temporal::{
    CalendarSerializer, DateSerializer, DateTimeSerializer, TimeSerializer, TimeZoneSerializer,
    TimestampSerializer, CALENDAR, DATE, DATETIME, TIME, TIMESTAMP, TIME_ZONE,
};
pub use text::{StringSerializer, ToStringSerializer, UuidSerializer, STRING, TO_STRING, UUID};

use crate::serialize::Serializer;
use crate::temporal::{Calendar, Date, DateTime, Time, ZoneId};
use crate::types::TypeKey;
use crate::value::Value;
use rust_decimal::Decimal;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::path::PathBuf;
use std::sync::atomic::{
    AtomicBool, AtomicI16, AtomicI32, AtomicI64, AtomicI8, AtomicU16, AtomicU32, AtomicU64,
    AtomicU8,
};
use std::sync::Arc;
use std::time::{Duration, SystemTime};
use uuid::Uuid;

/// Registry entry: exact type -> serializer.
pub type Entry = (TypeKey, &'static dyn Serializer);

/// Build a list of entries, `serializer => [types]`.
macro_rules! entries {
    ($($ser:expr => [$($ty:ty),+ $(,)?]),+ $(,)?) => {{
        let mut entries: Vec<$crate::serialize::builtin::Entry> = Vec::new();
        $($(
            entries.push((
                $crate::types::TypeKey::of::<$ty>(),
                &$ser as &'static dyn $crate::serialize::Serializer,
            ));
        )+)+
        entries
    }};
}

pub(crate) use entries;

/// Every statically known type and its dedicated serializer.
#[must_use]
pub fn core_entries() -> Vec<Entry> {
    entries![
        NULL => [()],
        BOOL => [bool, Option<bool>, AtomicBool],
        CHAR => [char, Option<char>],
        INTEGER => [
            i8, i16, i32, u8, u16,
            Option<i8>, Option<i16>, Option<i32>, Option<u8>, Option<u16>,
            AtomicI8, AtomicI16, AtomicI32, AtomicU8, AtomicU16,
        ],
        LONG => [
            i64, u32, u64, isize, usize,
            Option<i64>, Option<u32>, Option<u64>, Option<isize>, Option<usize>,
            AtomicI64, AtomicU32, AtomicU64,
        ],
        FLOAT => [f32, Option<f32>],
        DOUBLE => [f64, Option<f64>],
        BIG_INTEGER => [i128, u128, Option<i128>, Option<u128>],
        DECIMAL => [Decimal, Option<Decimal>],
        STRING => [str, String, Box<str>, Arc<str>, Option<String>],
        UUID => [Uuid, Option<Uuid>],
        TO_STRING => [IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, PathBuf, Duration],
        DATE => [Date, Option<Date>],
        TIME => [Time, Option<Time>],
        DATETIME => [DateTime, Option<DateTime>],
        TIMESTAMP => [SystemTime, Option<SystemTime>],
        CALENDAR => [Calendar],
        TIME_ZONE => [ZoneId],
        // Arrays
        BOOL_ARRAY => [Box<[bool]>],
        CHAR_ARRAY => [Box<[char]>, Option<Box<[char]>>],
        SHORT_ARRAY => [Box<[i8]>, Box<[i16]>],
        INT_ARRAY => [Box<[i32]>, Box<[AtomicI32]>],
        LONG_ARRAY => [Box<[i64]>, Box<[AtomicI64]>],
        FLOAT_ARRAY => [Box<[f32]>],
        DOUBLE_ARRAY => [Box<[f64]>],
        BIG_INTEGER_ARRAY => [Box<[i128]>],
        DECIMAL_ARRAY => [Box<[Decimal]>],
        STRING_ARRAY => [Box<[String]>],
        UUID_ARRAY => [Box<[Uuid]>],
        DATE_ARRAY => [Box<[Date]>],
        TIME_ARRAY => [Box<[Time]>],
        DATETIME_ARRAY => [Box<[DateTime]>],
        BYTES => [Vec<u8>, Box<[u8]>, Option<Vec<u8>>, Option<Box<[u8]>>],
        CHARS_ARRAY => [Box<[Box<[char]>]>],
        BYTES_ARRAY => [Box<[Vec<u8>]>, Box<[Box<[u8]>]>],
        ARRAY => [Box<[Value]>],
        // Containers of dynamic values
        LIST => [Vec<Value>, VecDeque<Value>, LinkedList<Value>],
        COLLECTION => [HashSet<String>, BTreeSet<String>],
        MAP => [HashMap<String, Value>, BTreeMap<String, Value>],
        VALUE => [Value],
    ]
}
