// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # hprose-io - type-to-serializer resolution for Hprose
//!
//! Every encode operation asks the registry which serializer handles the
//! value's type. Known types are answered by a single concurrent map lookup;
//! unknown types are classified once by shape (enum, array, map, list,
//! collection, time zone, calendar, object) and the answer is cached.
//!
//! ## Quick Start
//!
//! ```rust
//! use hprose_io::{describe, to_bytes, SerializerRegistry, ToValue, Value};
//!
//! struct Point { x: i32, y: i32 }
//! describe!(object Point);
//!
//! impl ToValue for Point {
//!     fn to_value(&self) -> Value {
//!         Value::object("Point", [("x", self.x.to_value()), ("y", self.y.to_value())])
//!     }
//! }
//!
//! let registry = SerializerRegistry::new();
//! assert_eq!(registry.get_for::<Point>().name(), "object");
//!
//! let bytes = to_bytes(&registry, &Point { x: 1, y: 2 }).unwrap();
//! assert_eq!(bytes, b"c5\"Point\"2{uxuy}o0{12}");
//! ```
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`SerializerRegistry`] | Concurrent type -> serializer map, lazily extended |
//! | [`Serializer`] | Stateless encoding strategy for one family of types |
//! | [`TypeInfo`] | Identity, shape and capabilities of a type |
//! | [`Value`] | Dynamic value every serializer consumes |
//! | [`Writer`] | Hprose output buffer |
//!
//! ## Features
//!
//! - `chrono` (default): registers the `chrono` date/time types at bootstrap

pub mod config;
pub mod serialize;
pub mod temporal;
pub mod types;
pub mod value;
pub mod writer;

pub use config::{ConfigError, RegistryConfig};
pub use serialize::{
    classify, to_bytes, Encoder, ExtendedTimeFamily, Family, OptionalFamily, ResolutionStats,
    SerializeError, Serializer, SerializerRegistry,
};
pub use temporal::{Calendar, Date, DateTime, Time, ZoneId};
pub use types::{Capabilities, Described, TypeInfo, TypeKey, TypeKind};
pub use value::{ToValue, Value};
pub use writer::Writer;
