// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com
//! Tests for type descriptors.

use super::*;
use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

struct Sensor;
enum Mode {
    #[allow(dead_code)]
    Idle,
}
struct Ring;

crate::describe!(object Sensor);
crate::describe!(enum Mode);
crate::describe!(Ring: LIST | COLLECTION);

fn hash_of(key: &TypeKey) -> u64 {
    let mut hasher = DefaultHasher::new();
    key.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn test_native_keys_compare_by_type() {
    assert_eq!(TypeKey::of::<i32>(), TypeKey::of::<i32>());
    assert_ne!(TypeKey::of::<i32>(), TypeKey::of::<u32>());
    assert_eq!(hash_of(&TypeKey::of::<String>()), hash_of(&TypeKey::of::<String>()));
    assert!(!TypeKey::of::<i32>().is_dynamic());
}

#[test]
fn test_dynamic_keys_never_collide_on_name() {
    let a = TypeKey::dynamic("demo.Point");
    let b = TypeKey::dynamic("demo.Point");
    assert_eq!(a.name(), b.name());
    assert_ne!(a, b);
    assert_eq!(a, a.clone());
    assert!(a.is_dynamic());
}

#[test]
fn test_primitive_is_plain() {
    let info = TypeInfo::of::<i64>();
    assert_eq!(info.kind(), &TypeKind::Plain);
    assert!(info.capabilities().is_empty());
    assert_eq!(info.key(), &TypeKey::of::<i64>());
    assert_eq!(info.name(), "i64");
}

#[test]
fn test_collection_capabilities() {
    let vec = TypeInfo::of::<Vec<Sensor>>();
    assert!(vec.has(Capabilities::LIST));
    assert!(vec.has(Capabilities::COLLECTION));
    assert!(!vec.has(Capabilities::MAP));

    assert!(TypeInfo::of::<VecDeque<u8>>().has(Capabilities::LIST));

    let set = TypeInfo::of::<HashSet<String>>();
    assert!(set.has(Capabilities::COLLECTION));
    assert!(!set.has(Capabilities::LIST));

    assert_eq!(
        TypeInfo::of::<HashMap<String, i32>>().capabilities(),
        Capabilities::MAP
    );
    assert_eq!(
        TypeInfo::of::<BTreeMap<u8, u8>>().capabilities(),
        Capabilities::MAP
    );
}

#[test]
fn test_arrays_carry_element_descriptor() {
    let info = TypeInfo::of::<[[[i32; 2]; 3]; 4]>();
    assert!(info.is_array());
    assert_eq!(info.array_depth(), 3);
    let innermost = info
        .element()
        .and_then(TypeInfo::element)
        .and_then(TypeInfo::element)
        .expect("three levels");
    assert_eq!(innermost.key(), &TypeKey::of::<i32>());

    let boxed = TypeInfo::of::<Box<[Sensor]>>();
    assert_eq!(boxed.array_depth(), 1);
    assert_eq!(boxed.element().map(TypeInfo::key), Some(&TypeKey::of::<Sensor>()));
}

#[test]
fn test_option_inherits_shape_with_own_identity() {
    let info = TypeInfo::of::<Option<Vec<u8>>>();
    assert!(info.has(Capabilities::LIST));
    assert_eq!(info.key(), &TypeKey::of::<Option<Vec<u8>>>());
    assert_ne!(info.key(), &TypeKey::of::<Vec<u8>>());
}

#[test]
fn test_describe_macro() {
    assert!(TypeInfo::of::<Mode>().is_enum());
    assert_eq!(TypeInfo::of::<Sensor>().kind(), &TypeKind::Plain);
    assert_eq!(
        TypeInfo::of::<Ring>().capabilities(),
        Capabilities::LIST | Capabilities::COLLECTION
    );
}

#[test]
fn test_temporal_capabilities() {
    use crate::temporal::{Calendar, ZoneId};
    assert!(TypeInfo::of::<ZoneId>().has(Capabilities::TIME_ZONE));
    assert!(TypeInfo::of::<Calendar>().has(Capabilities::CALENDAR));
}

#[cfg(feature = "chrono")]
#[test]
fn test_chrono_capabilities() {
    assert!(TypeInfo::of::<chrono::DateTime<chrono::Utc>>().has(Capabilities::CALENDAR));
    assert!(TypeInfo::of::<chrono::FixedOffset>().has(Capabilities::TIME_ZONE));
    assert!(TypeInfo::of::<chrono::NaiveDate>().capabilities().is_empty());
}

#[test]
fn test_dynamic_descriptor() {
    let info = TypeInfo::dynamic("peer.Inventory", TypeKind::Plain, Capabilities::MAP);
    assert_eq!(info.name(), "peer.Inventory");
    assert!(info.key().is_dynamic());
    assert!(info.has(Capabilities::MAP));
}
