// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Resolve-then-encode pipeline.

use super::registry::SerializerRegistry;
use super::SerializeError;
use crate::types::{Described, TypeInfo};
use crate::value::{ToValue, Value};
use crate::writer::Writer;

/// Encodes values into one Hprose stream, resolving each value's
/// serializer through a registry.
#[derive(Debug)]
pub struct Encoder<'r> {
    registry: &'r SerializerRegistry,
    writer: Writer,
}

impl<'r> Encoder<'r> {
    #[must_use]
    pub fn new(registry: &'r SerializerRegistry) -> Self {
        Self {
            registry,
            writer: Writer::new(),
        }
    }

    /// Encode a native value using the serializer registered for `T`.
    pub fn encode<T>(&mut self, value: &T) -> Result<&mut Self, SerializeError>
    where
        T: Described + ToValue + ?Sized,
    {
        let serializer = self.registry.get_for::<T>();
        serializer.encode(&value.to_value(), &mut self.writer)?;
        Ok(self)
    }

    /// Encode a value of a runtime-declared type.
    pub fn encode_dynamic(
        &mut self,
        info: &TypeInfo,
        value: &Value,
    ) -> Result<&mut Self, SerializeError> {
        let serializer = self.registry.get(info);
        serializer.encode(value, &mut self.writer)?;
        Ok(self)
    }

    #[must_use]
    pub fn writer(&self) -> &Writer {
        &self.writer
    }

    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.writer.into_bytes()
    }
}

/// Encode a single value into a fresh buffer.
pub fn to_bytes<T>(registry: &SerializerRegistry, value: &T) -> Result<Vec<u8>, SerializeError>
where
    T: Described + ToValue + ?Sized,
{
    let mut encoder = Encoder::new(registry);
    encoder.encode(value)?;
    Ok(encoder.into_bytes())
}
