// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Type identity used as the registry key.

use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

static NEXT_DYNAMIC_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum KeyId {
    Native(TypeId),
    Dynamic(u64),
}

#[derive(Clone, Debug)]
enum KeyName {
    Static(&'static str),
    Shared(Arc<str>),
}

/// Identifies a type uniquely for the lifetime of the process.
///
/// Native types are keyed by [`TypeId`]; types declared at runtime get a
/// fresh id from a process-wide counter. The name is carried for
/// diagnostics only and never takes part in equality or hashing.
#[derive(Clone)]
pub struct TypeKey {
    id: KeyId,
    name: KeyName,
}

impl TypeKey {
    /// Key of a native Rust type. Does not allocate.
    #[inline]
    #[must_use]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: KeyId::Native(TypeId::of::<T>()),
            name: KeyName::Static(std::any::type_name::<T>()),
        }
    }

    /// Allocate a key for a type declared at runtime.
    ///
    /// Every call returns a key distinct from all others, even for equal names.
    #[must_use]
    pub fn dynamic(name: impl Into<Arc<str>>) -> Self {
        let id = NEXT_DYNAMIC_ID.fetch_add(1, Ordering::Relaxed);
        Self {
            id: KeyId::Dynamic(id),
            name: KeyName::Shared(name.into()),
        }
    }

    /// Display name (diagnostics only).
    #[must_use]
    pub fn name(&self) -> &str {
        match &self.name {
            KeyName::Static(name) => name,
            KeyName::Shared(name) => name,
        }
    }

    /// True for keys allocated with [`TypeKey::dynamic`].
    #[must_use]
    pub fn is_dynamic(&self) -> bool {
        matches!(self.id, KeyId::Dynamic(_))
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            KeyId::Native(_) => write!(f, "TypeKey({})", self.name()),
            KeyId::Dynamic(id) => write!(f, "TypeKey({}#{})", self.name(), id),
        }
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
