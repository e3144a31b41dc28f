// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Type descriptors: shape tag plus structural capabilities.

use super::key::TypeKey;
use bitflags::bitflags;
use std::borrow::Cow;
use std::sync::Arc;

bitflags! {
    /// Structural capabilities a type may satisfy independent of its exact type.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Capabilities: u8 {
        /// Associative container with unique keys.
        const MAP = 1 << 0;
        /// Indexed sequence, duplicates allowed, stable iteration order.
        const LIST = 1 << 1;
        /// Iterable group of elements, no positional guarantee.
        const COLLECTION = 1 << 2;
        /// Names a time zone.
        const TIME_ZONE = 1 << 3;
        /// Date/time bundled with a zone.
        const CALENDAR = 1 << 4;
    }
}

/// Shape of a type.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeKind {
    /// Anything that is neither an enumeration nor an array.
    Plain,
    /// Enumeration of symbolic constants.
    Enum,
    /// Array of the given element type.
    Array(Arc<TypeInfo>),
}

/// Runtime description of a type, as seen by the classifier.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeInfo {
    key: TypeKey,
    name: Cow<'static, str>,
    kind: TypeKind,
    capabilities: Capabilities,
}

impl TypeInfo {
    /// Describe `T` through its [`Described`](super::Described) implementation.
    #[inline]
    #[must_use]
    pub fn of<T: super::Described + ?Sized>() -> Self {
        T::type_info()
    }

    /// Descriptor for a native type with an explicit shape.
    #[must_use]
    pub fn native<T: ?Sized + 'static>(kind: TypeKind, capabilities: Capabilities) -> Self {
        Self {
            key: TypeKey::of::<T>(),
            name: Cow::Borrowed(std::any::type_name::<T>()),
            kind,
            capabilities,
        }
    }

    /// Descriptor for a type declared at runtime (e.g. a peer's schema).
    ///
    /// Each call allocates a new identity; two calls with the same name
    /// describe two distinct types.
    #[must_use]
    pub fn dynamic(name: impl Into<String>, kind: TypeKind, capabilities: Capabilities) -> Self {
        let name: String = name.into();
        Self {
            key: TypeKey::dynamic(name.as_str()),
            name: Cow::Owned(name),
            kind,
            capabilities,
        }
    }

    /// Array descriptor for a native array type `T` with elements `element`.
    #[must_use]
    pub fn array<T: ?Sized + 'static>(element: TypeInfo) -> Self {
        Self::native::<T>(TypeKind::Array(Arc::new(element)), Capabilities::empty())
    }

    #[must_use]
    pub fn key(&self) -> &TypeKey {
        &self.key
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn kind(&self) -> &TypeKind {
        &self.kind
    }

    #[must_use]
    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    #[must_use]
    pub fn has(&self, capability: Capabilities) -> bool {
        self.capabilities.contains(capability)
    }

    #[must_use]
    pub fn is_enum(&self) -> bool {
        matches!(self.kind, TypeKind::Enum)
    }

    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self.kind, TypeKind::Array(_))
    }

    /// Element descriptor if this is an array.
    #[must_use]
    pub fn element(&self) -> Option<&TypeInfo> {
        match &self.kind {
            TypeKind::Array(element) => Some(element),
            _ => None,
        }
    }

    /// Nesting depth of array types (0 for non-arrays).
    #[must_use]
    pub fn array_depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self;
        while let Some(element) = current.element() {
            depth += 1;
            current = element;
        }
        depth
    }

    /// Same descriptor re-keyed to `T`, keeping shape and capabilities.
    ///
    /// Used for wrappers such as `Option<T>` that inherit the wrapped shape.
    #[must_use]
    pub(crate) fn rekey<T: ?Sized + 'static>(self) -> Self {
        Self {
            key: TypeKey::of::<T>(),
            name: Cow::Borrowed(std::any::type_name::<T>()),
            ..self
        }
    }
}
