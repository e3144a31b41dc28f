// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Serializers and type-to-serializer resolution.
//!
//! - [`Serializer`]: stateless encoding strategy for one family of types
//! - [`SerializerRegistry`]: concurrent type -> serializer map with lazy
//!   classification of unseen types
//! - [`classify`]: the fallback chain for types without an entry
//! - [`Encoder`]: resolve-then-encode pipeline over a [`Writer`]

pub mod builtin;
pub mod classifier;
pub mod encoder;
pub mod error;
pub mod family;
pub mod registry;

pub use classifier::{classify, Family};
pub use encoder::{to_bytes, Encoder};
pub use error::SerializeError;
pub use family::{ExtendedTimeFamily, OptionalFamily};
pub use registry::{ResolutionStats, SerializerRegistry};

use crate::value::Value;
use crate::writer::Writer;
use std::fmt;

/// Encoding strategy for a family of types.
///
/// Implementations hold no per-call state and live for the whole process
/// as `static` singletons, shared by every thread.
pub trait Serializer: Send + Sync + 'static {
    /// Stable family name, unique per serializer.
    fn name(&self) -> &'static str;

    /// Append `value` to `writer`.
    fn encode(&self, value: &Value, writer: &mut Writer) -> Result<(), SerializeError>;
}

impl fmt::Debug for dyn Serializer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Serializer({})", self.name())
    }
}

/// Serializers are identified by name; zero-sized statics may share an address.
impl PartialEq for dyn Serializer {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name()
    }
}

impl Eq for dyn Serializer {}
