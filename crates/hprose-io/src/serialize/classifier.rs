// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Fallback classification for types without a registry entry.
//!
//! The checks run in a fixed order and the first match wins:
//!
//! 1. enum kind
//! 2. array kind (any element type, any nesting depth)
//! 3. `MAP`
//! 4. `LIST`
//! 5. `COLLECTION`
//! 6. `TIME_ZONE`
//! 7. `CALENDAR`
//! 8. generic object
//!
//! A type satisfying several capabilities lands in the earliest family,
//! e.g. `LIST | COLLECTION` is a list and `MAP | LIST` is a map.

use super::builtin;
use super::Serializer;
use crate::types::{Capabilities, TypeInfo, TypeKind};
use std::fmt;

/// Serializer family chosen by [`classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Enum,
    Array,
    Map,
    List,
    Collection,
    TimeZone,
    Calendar,
    Object,
}

impl Family {
    /// All families, in precedence order.
    pub const ALL: [Family; 8] = [
        Family::Enum,
        Family::Array,
        Family::Map,
        Family::List,
        Family::Collection,
        Family::TimeZone,
        Family::Calendar,
        Family::Object,
    ];

    /// The singleton serializer of this family.
    #[must_use]
    pub fn serializer(self) -> &'static dyn Serializer {
        match self {
            Family::Enum => &builtin::ENUM,
            Family::Array => &builtin::ARRAY,
            Family::Map => &builtin::MAP,
            Family::List => &builtin::LIST,
            Family::Collection => &builtin::COLLECTION,
            Family::TimeZone => &builtin::TIME_ZONE,
            Family::Calendar => &builtin::CALENDAR,
            Family::Object => &builtin::OBJECT,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Family::Enum => "enum",
            Family::Array => "array",
            Family::Map => "map",
            Family::List => "list",
            Family::Collection => "collection",
            Family::TimeZone => "time-zone",
            Family::Calendar => "calendar",
            Family::Object => "object",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capability checks after the kind checks, in precedence order.
const CAPABILITY_ORDER: [(Capabilities, Family); 5] = [
    (Capabilities::MAP, Family::Map),
    (Capabilities::LIST, Family::List),
    (Capabilities::COLLECTION, Family::Collection),
    (Capabilities::TIME_ZONE, Family::TimeZone),
    (Capabilities::CALENDAR, Family::Calendar),
];

/// Pick the serializer family for a type. Total and pure.
#[must_use]
pub fn classify(info: &TypeInfo) -> Family {
    match info.kind() {
        TypeKind::Enum => return Family::Enum,
        TypeKind::Array(_) => return Family::Array,
        TypeKind::Plain => {}
    }
    CAPABILITY_ORDER
        .iter()
        .find(|(capability, _)| info.has(*capability))
        .map_or(Family::Object, |&(_, family)| family)
}
