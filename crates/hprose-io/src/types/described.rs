// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! `Described` implementations for standard library and dependency types.

use super::info::{Capabilities, TypeInfo, TypeKind};
use crate::temporal::{Calendar, Date, DateTime, Time, ZoneId};
use crate::value::Value;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicI16, AtomicI32, AtomicI64, AtomicI8, AtomicU16, AtomicU32, AtomicU64, AtomicU8};
use std::sync::Arc;
use std::time::{Duration, SystemTime};

/// A type that can describe its own shape to the classifier.
///
/// Implement it for your own types with [`describe!`](crate::describe).
pub trait Described: 'static {
    fn type_info() -> TypeInfo;
}

/// Implement [`Described`] for a user type.
///
/// ```
/// use hprose_io::describe;
///
/// enum Color { Red, Green }
/// struct Point { x: i32, y: i32 }
/// struct Bag(Vec<u32>);
///
/// describe!(enum Color);
/// describe!(object Point);
/// describe!(Bag: LIST | COLLECTION);
/// ```
#[macro_export]
macro_rules! describe {
    (enum $ty:ty) => {
        impl $crate::types::Described for $ty {
            fn type_info() -> $crate::types::TypeInfo {
                $crate::types::TypeInfo::native::<$ty>(
                    $crate::types::TypeKind::Enum,
                    $crate::types::Capabilities::empty(),
                )
            }
        }
    };
    (object $ty:ty) => {
        impl $crate::types::Described for $ty {
            fn type_info() -> $crate::types::TypeInfo {
                $crate::types::TypeInfo::native::<$ty>(
                    $crate::types::TypeKind::Plain,
                    $crate::types::Capabilities::empty(),
                )
            }
        }
    };
    ($ty:ty : $($cap:ident)|+) => {
        impl $crate::types::Described for $ty {
            fn type_info() -> $crate::types::TypeInfo {
                $crate::types::TypeInfo::native::<$ty>(
                    $crate::types::TypeKind::Plain,
                    $($crate::types::Capabilities::$cap)|+,
                )
            }
        }
    };
}

macro_rules! impl_described {
    ($caps:expr => $($ty:ty),+ $(,)?) => {
        $(
            impl Described for $ty {
                fn type_info() -> TypeInfo {
                    TypeInfo::native::<$ty>(TypeKind::Plain, $caps)
                }
            }
        )+
    };
}

impl_described!(Capabilities::empty() =>
    (), bool, char,
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64,
    str, String, Box<str>, Arc<str>,
    AtomicBool, AtomicI8, AtomicI16, AtomicI32, AtomicI64,
    AtomicU8, AtomicU16, AtomicU32, AtomicU64,
    uuid::Uuid, rust_decimal::Decimal,
    IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, PathBuf,
    Duration, SystemTime,
    Date, Time, DateTime,
    Value,
);

impl_described!(Capabilities::TIME_ZONE => ZoneId);
impl_described!(Capabilities::CALENDAR => Calendar);

impl<T: Described> Described for Option<T> {
    fn type_info() -> TypeInfo {
        T::type_info().rekey::<Self>()
    }
}

impl<T: Described, const N: usize> Described for [T; N] {
    fn type_info() -> TypeInfo {
        TypeInfo::array::<Self>(T::type_info())
    }
}

impl<T: Described> Described for Box<[T]> {
    fn type_info() -> TypeInfo {
        TypeInfo::array::<Self>(T::type_info())
    }
}

macro_rules! impl_described_generic {
    ($caps:expr => $($ty:ident<$($param:ident),+>),+ $(,)?) => {
        $(
            impl<$($param: 'static),+> Described for $ty<$($param),+> {
                fn type_info() -> TypeInfo {
                    TypeInfo::native::<Self>(TypeKind::Plain, $caps)
                }
            }
        )+
    };
}

impl_described_generic!(Capabilities::LIST.union(Capabilities::COLLECTION) =>
    Vec<T>, VecDeque<T>, LinkedList<T>,
);
impl_described_generic!(Capabilities::COLLECTION =>
    HashSet<T, S>, BTreeSet<T>, BinaryHeap<T>,
);
impl_described_generic!(Capabilities::MAP =>
    HashMap<K, V, S>, BTreeMap<K, V>,
);

#[cfg(feature = "chrono")]
mod chrono_impls {
    use super::{Capabilities, Described, TypeInfo, TypeKind};

    impl_described!(Capabilities::empty() =>
        chrono::NaiveDate, chrono::NaiveTime, chrono::NaiveDateTime,
        chrono::TimeDelta, chrono::Weekday, chrono::Month,
    );
    impl_described!(Capabilities::TIME_ZONE =>
        chrono::Utc, chrono::FixedOffset, chrono::Local,
    );

    impl<Tz: chrono::TimeZone + 'static> Described for chrono::DateTime<Tz> {
        fn type_info() -> TypeInfo {
            TypeInfo::native::<Self>(TypeKind::Plain, Capabilities::CALENDAR)
        }
    }
}
