// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Enum, dynamic and structural object serializers.

use crate::serialize::{SerializeError, Serializer};
use crate::value::Value;
use crate::writer::Writer;

/// Enumerations, written by constant name.
#[derive(Debug)]
pub struct EnumSerializer;

/// The dynamic `Value` type: dispatches on the runtime variant.
#[derive(Debug)]
pub struct ValueSerializer;

/// Universal fallback. Objects are written structurally (`c`/`o`), anything
/// else by its own variant; never rejects a value.
#[derive(Debug)]
pub struct ObjectSerializer;

pub static ENUM: EnumSerializer = EnumSerializer;
pub static VALUE: ValueSerializer = ValueSerializer;
pub static OBJECT: ObjectSerializer = ObjectSerializer;

impl Serializer for EnumSerializer {
    fn name(&self) -> &'static str {
        "enum"
    }

    fn encode(&self, value: &Value, writer: &mut Writer) -> Result<(), SerializeError> {
        match value {
            Value::Null => {
                writer.write_null();
                Ok(())
            }
            Value::Enum { name, .. } => writer.write_enum(name),
            Value::String(name) => writer.write_enum(name),
            other => Err(SerializeError::mismatch(self.name(), other)),
        }
    }
}

impl Serializer for ValueSerializer {
    fn name(&self) -> &'static str {
        "value"
    }

    fn encode(&self, value: &Value, writer: &mut Writer) -> Result<(), SerializeError> {
        writer.write_value(value)
    }
}

impl Serializer for ObjectSerializer {
    fn name(&self) -> &'static str {
        "object"
    }

    fn encode(&self, value: &Value, writer: &mut Writer) -> Result<(), SerializeError> {
        match value {
            Value::Object { class, fields } => writer.write_object(class, fields),
            other => writer.write_value(other),
        }
    }
}
