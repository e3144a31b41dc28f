// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! String, string-rendered and UUID serializers.

use crate::serialize::{SerializeError, Serializer};
use crate::value::Value;
use crate::writer::Writer;

#[derive(Debug)]
pub struct StringSerializer;

/// Types whose wire form is their textual rendering (addresses, paths, durations).
#[derive(Debug)]
pub struct ToStringSerializer;

#[derive(Debug)]
pub struct UuidSerializer;

pub static STRING: StringSerializer = StringSerializer;
pub static TO_STRING: ToStringSerializer = ToStringSerializer;
pub static UUID: UuidSerializer = UuidSerializer;

impl Serializer for StringSerializer {
    fn name(&self) -> &'static str {
        "string"
    }

    fn encode(&self, value: &Value, writer: &mut Writer) -> Result<(), SerializeError> {
        match value {
            Value::Null => writer.write_null(),
            Value::String(s) => writer.write_string(s),
            other => return Err(SerializeError::mismatch(self.name(), other)),
        }
        Ok(())
    }
}

impl Serializer for ToStringSerializer {
    fn name(&self) -> &'static str {
        "to-string"
    }

    fn encode(&self, value: &Value, writer: &mut Writer) -> Result<(), SerializeError> {
        match value {
            Value::Null => writer.write_null(),
            Value::String(s) => writer.write_string(s),
            Value::Char(c) => writer.write_char(*c),
            Value::Uuid(id) => writer.write_string(&id.to_string()),
            other => return Err(SerializeError::mismatch(self.name(), other)),
        }
        Ok(())
    }
}

impl Serializer for UuidSerializer {
    fn name(&self) -> &'static str {
        "uuid"
    }

    fn encode(&self, value: &Value, writer: &mut Writer) -> Result<(), SerializeError> {
        match value {
            Value::Null => writer.write_null(),
            Value::Uuid(id) => writer.write_uuid(id),
            Value::String(s) => {
                let id = uuid::Uuid::parse_str(s)
                    .map_err(|e| SerializeError::InvalidValue(format!("uuid {:?}: {}", s, e)))?;
                writer.write_uuid(&id);
            }
            other => return Err(SerializeError::mismatch(self.name(), other)),
        }
        Ok(())
    }
}
