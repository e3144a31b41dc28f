// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! List, collection and map serializers.

use crate::serialize::{SerializeError, Serializer};
use crate::value::Value;
use crate::writer::Writer;

/// Ordered, indexable sequences.
#[derive(Debug)]
pub struct ListSerializer;

/// Groups of elements without positional meaning (sets, heaps).
#[derive(Debug)]
pub struct CollectionSerializer;

#[derive(Debug)]
pub struct MapSerializer;

pub static LIST: ListSerializer = ListSerializer;
pub static COLLECTION: CollectionSerializer = CollectionSerializer;
pub static MAP: MapSerializer = MapSerializer;

impl Serializer for ListSerializer {
    fn name(&self) -> &'static str {
        "list"
    }

    fn encode(&self, value: &Value, writer: &mut Writer) -> Result<(), SerializeError> {
        match value {
            Value::Null => writer.write_null(),
            Value::List(items) => writer.write_list(items)?,
            other => return Err(SerializeError::mismatch(self.name(), other)),
        }
        Ok(())
    }
}

impl Serializer for CollectionSerializer {
    fn name(&self) -> &'static str {
        "collection"
    }

    fn encode(&self, value: &Value, writer: &mut Writer) -> Result<(), SerializeError> {
        match value {
            Value::Null => writer.write_null(),
            Value::List(items) => writer.write_list(items)?,
            other => return Err(SerializeError::mismatch(self.name(), other)),
        }
        Ok(())
    }
}

impl Serializer for MapSerializer {
    fn name(&self) -> &'static str {
        "map"
    }

    fn encode(&self, value: &Value, writer: &mut Writer) -> Result<(), SerializeError> {
        match value {
            Value::Null => writer.write_null(),
            Value::Map(entries) => writer.write_map(entries)?,
            // Field names become string keys.
            Value::Object { fields, .. } => {
                writer.write_map_header(fields.len());
                for (name, field) in fields {
                    writer.write_string(name);
                    writer.write_value(field)?;
                }
                writer.write_end();
            }
            other => return Err(SerializeError::mismatch(self.name(), other)),
        }
        Ok(())
    }
}
