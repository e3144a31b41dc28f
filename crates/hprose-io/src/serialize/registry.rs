// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Concurrent type -> serializer registry.
//!
//! The registry is populated eagerly at construction with every statically
//! known type, then grows lazily: a type without an entry is classified once
//! (see [`classify`](super::classify)) and the result is cached, so every
//! later request for that exact type is a single map lookup.
//!
//! # Concurrency
//!
//! - `DashMap` sharding, no global lock around lookup/classify/store
//! - Two threads resolving the same unseen type may both classify it; the
//!   first stored entry is kept and returned to both
//! - A classification result never replaces an existing entry, so a
//!   [`register`](SerializerRegistry::register) racing a first resolution
//!   still wins
//! - [`register`](SerializerRegistry::register) is visible to every later
//!   lookup on any thread

use super::builtin::{self, Entry};
use super::classifier::classify;
use super::family::{ExtendedTimeFamily, OptionalFamily};
use super::Serializer;
use crate::config::{ConfigError, RegistryConfig};
use crate::types::{Described, TypeInfo, TypeKey};
use dashmap::DashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;

static GLOBAL: OnceLock<SerializerRegistry> = OnceLock::new();

/// Resolution counters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ResolutionStats {
    /// Requests answered by an existing entry.
    pub hits: u64,
    /// Requests that ran the classifier.
    pub classifications: u64,
}

/// Maps exact types to their serializer.
pub struct SerializerRegistry {
    map: DashMap<TypeKey, &'static dyn Serializer>,
    trace_resolution: bool,
    hits: AtomicU64,
    classifications: AtomicU64,
}

impl SerializerRegistry {
    /// Registry with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&RegistryConfig::default())
    }

    /// Registry for `config`, rejecting an invalid configuration.
    pub fn try_with_config(config: &RegistryConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_config(config))
    }

    /// Registry for `config`.
    ///
    /// Never fails: an invalid configuration is reported at warn level and
    /// its capacity hint replaced by the default.
    #[must_use]
    pub fn with_config(config: &RegistryConfig) -> Self {
        if config.extended_time {
            Self::with_families(config, &[&ExtendedTimeFamily])
        } else {
            Self::with_families(config, &[])
        }
    }

    /// Registry with an explicit set of optional families.
    ///
    /// Families whose probe returns `None` are skipped without error.
    #[must_use]
    pub fn with_families(config: &RegistryConfig, families: &[&dyn OptionalFamily]) -> Self {
        let capacity = match config.validate() {
            Ok(()) => config.initial_capacity,
            Err(e) => {
                log::warn!("[registry] {}; using default capacity", e);
                RegistryConfig::default().initial_capacity
            }
        };
        let registry = Self {
            map: DashMap::with_capacity(capacity),
            trace_resolution: config.trace_resolution,
            hits: AtomicU64::new(0),
            classifications: AtomicU64::new(0),
        };

        registry.install(builtin::core_entries());
        let mut installed = 0usize;
        for family in families {
            if let Some(entries) = family.probe() {
                log::debug!(
                    "[registry] optional family '{}': {} entries",
                    family.name(),
                    entries.len()
                );
                registry.install(entries);
                installed += 1;
            }
        }

        log::debug!(
            "[registry] bootstrap complete: {} entries, {}/{} optional families",
            registry.len(),
            installed,
            families.len()
        );
        registry
    }

    /// Process-wide registry, built with the default configuration on first use.
    pub fn global() -> &'static SerializerRegistry {
        GLOBAL.get_or_init(SerializerRegistry::new)
    }

    fn install(&self, entries: Vec<Entry>) {
        for (key, serializer) in entries {
            self.map.insert(key, serializer);
        }
    }

    /// Serializer for `info`, classifying and caching it on first request.
    ///
    /// Never fails: unknown types fall back to the object serializer.
    pub fn get(&self, info: &TypeInfo) -> &'static dyn Serializer {
        if let Some(serializer) = self.lookup(info.key()) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return serializer;
        }
        self.classify_and_store(info)
    }

    /// Serializer for the native type `T`.
    ///
    /// The descriptor of `T` is only built when `T` has no entry yet.
    #[inline]
    pub fn get_for<T: Described + ?Sized>(&self) -> &'static dyn Serializer {
        if let Some(serializer) = self.lookup(&TypeKey::of::<T>()) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return serializer;
        }
        self.classify_and_store(&T::type_info())
    }

    fn classify_and_store(&self, info: &TypeInfo) -> &'static dyn Serializer {
        let family = classify(info);
        let serializer = family.serializer();
        self.classifications.fetch_add(1, Ordering::Relaxed);
        if self.trace_resolution {
            log::debug!("[registry] classified {} as {}", info.name(), family);
        } else {
            log::trace!("[registry] classified {} as {}", info.name(), family);
        }
        *self.map.entry(info.key().clone()).or_insert(serializer)
    }

    /// Exact lookup; never classifies.
    #[must_use]
    pub fn lookup(&self, key: &TypeKey) -> Option<&'static dyn Serializer> {
        self.map.get(key).map(|entry| *entry.value())
    }

    /// Map `key` to `serializer`, replacing any previous entry.
    pub fn register(&self, key: TypeKey, serializer: &'static dyn Serializer) {
        if let Some(previous) = self.map.insert(key.clone(), serializer) {
            if previous.name() != serializer.name() {
                log::debug!(
                    "[registry] {} re-registered: {} -> {}",
                    key,
                    previous.name(),
                    serializer.name()
                );
            }
        }
    }

    /// Map the native type `T` to `serializer`.
    pub fn register_type<T: ?Sized + 'static>(&self, serializer: &'static dyn Serializer) {
        self.register(TypeKey::of::<T>(), serializer);
    }

    #[must_use]
    pub fn contains(&self, key: &TypeKey) -> bool {
        self.map.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Snapshot of all entries, sorted by type name.
    #[must_use]
    pub fn entries(&self) -> Vec<Entry> {
        let mut entries: Vec<Entry> = self
            .map
            .iter()
            .map(|entry| (entry.key().clone(), *entry.value()))
            .collect();
        entries.sort_by(|a, b| a.0.name().cmp(b.0.name()));
        entries
    }

    #[must_use]
    pub fn stats(&self) -> ResolutionStats {
        ResolutionStats {
            hits: self.hits.load(Ordering::Relaxed),
            classifications: self.classifications.load(Ordering::Relaxed),
        }
    }
}

impl Default for SerializerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SerializerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SerializerRegistry")
            .field("entries", &self.len())
            .field("stats", &self.stats())
            .finish()
    }
}
