// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Type identity and structural descriptors.
//!
//! A [`TypeInfo`] is what the classifier sees of a type: its identity
//! ([`TypeKey`]), its shape ([`TypeKind`]) and the structural
//! [`Capabilities`] it satisfies. Native types obtain one through
//! [`Described`]; types known only at runtime use [`TypeInfo::dynamic`].

mod described;
mod info;
mod key;

pub use described::Described;
pub use info::{Capabilities, TypeInfo, TypeKind};
pub use key::TypeKey;

#[cfg(test)]
mod tests;
