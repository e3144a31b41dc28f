// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Array serializers.
//!
//! Typed arrays delegate each element to the serializer of their element
//! family. Byte arrays and character arrays have compact forms of their own
//! (`b` and string). Any other array goes through [`ArraySerializer`].

use super::primitive::{BIG_INTEGER, BOOL, DECIMAL, DOUBLE, FLOAT, INTEGER, LONG};
use super::temporal::{DATE, DATETIME, TIME};
use super::text::{STRING, UUID};
use crate::serialize::{SerializeError, Serializer};
use crate::value::Value;
use crate::writer::Writer;

/// Array whose elements all belong to one serializer family.
#[derive(Debug)]
pub struct TypedArraySerializer {
    name: &'static str,
    element: &'static dyn Serializer,
}

impl TypedArraySerializer {
    pub const fn new(name: &'static str, element: &'static dyn Serializer) -> Self {
        Self { name, element }
    }

    /// Serializer used for each element.
    pub fn element(&self) -> &'static dyn Serializer {
        self.element
    }
}

impl Serializer for TypedArraySerializer {
    fn name(&self) -> &'static str {
        self.name
    }

    fn encode(&self, value: &Value, writer: &mut Writer) -> Result<(), SerializeError> {
        match value {
            Value::Null => writer.write_null(),
            Value::List(items) => {
                writer.write_list_header(items.len());
                for item in items {
                    self.element.encode(item, writer)?;
                }
                writer.write_end();
            }
            other => return Err(SerializeError::mismatch(self.name, other)),
        }
        Ok(())
    }
}

/// `u8` sequences, written in the `b` form.
#[derive(Debug)]
pub struct BytesSerializer;

/// `char` sequences, written as a single string.
#[derive(Debug)]
pub struct CharArraySerializer;

/// Arrays of any element type; elements are written by their own variant.
///
/// A non-empty array made only of `u8` elements is written in the `b` form.
#[derive(Debug)]
pub struct ArraySerializer;

pub static BYTES: BytesSerializer = BytesSerializer;
pub static CHAR_ARRAY: CharArraySerializer = CharArraySerializer;
pub static ARRAY: ArraySerializer = ArraySerializer;

pub static BOOL_ARRAY: TypedArraySerializer = TypedArraySerializer::new("bool-array", &BOOL);
pub static SHORT_ARRAY: TypedArraySerializer = TypedArraySerializer::new("short-array", &INTEGER);
pub static INT_ARRAY: TypedArraySerializer = TypedArraySerializer::new("int-array", &INTEGER);
pub static LONG_ARRAY: TypedArraySerializer = TypedArraySerializer::new("long-array", &LONG);
pub static FLOAT_ARRAY: TypedArraySerializer = TypedArraySerializer::new("float-array", &FLOAT);
pub static DOUBLE_ARRAY: TypedArraySerializer = TypedArraySerializer::new("double-array", &DOUBLE);
pub static BIG_INTEGER_ARRAY: TypedArraySerializer =
    TypedArraySerializer::new("big-integer-array", &BIG_INTEGER);
pub static DECIMAL_ARRAY: TypedArraySerializer =
    TypedArraySerializer::new("decimal-array", &DECIMAL);
pub static STRING_ARRAY: TypedArraySerializer = TypedArraySerializer::new("string-array", &STRING);
pub static UUID_ARRAY: TypedArraySerializer = TypedArraySerializer::new("uuid-array", &UUID);
pub static DATE_ARRAY: TypedArraySerializer = TypedArraySerializer::new("date-array", &DATE);
pub static TIME_ARRAY: TypedArraySerializer = TypedArraySerializer::new("time-array", &TIME);
pub static DATETIME_ARRAY: TypedArraySerializer =
    TypedArraySerializer::new("datetime-array", &DATETIME);
/// Arrays of character arrays.
pub static CHARS_ARRAY: TypedArraySerializer = TypedArraySerializer::new("chars-array", &CHAR_ARRAY);
/// Arrays of byte arrays.
pub static BYTES_ARRAY: TypedArraySerializer = TypedArraySerializer::new("bytes-array", &BYTES);

impl Serializer for BytesSerializer {
    fn name(&self) -> &'static str {
        "bytes"
    }

    fn encode(&self, value: &Value, writer: &mut Writer) -> Result<(), SerializeError> {
        match value {
            Value::Null => writer.write_null(),
            Value::Bytes(bytes) => writer.write_bytes(bytes),
            Value::List(items) => {
                let bytes = items
                    .iter()
                    .map(|item| match item {
                        Value::U8(b) => Ok(*b),
                        other => Err(SerializeError::mismatch(self.name(), other)),
                    })
                    .collect::<Result<Vec<u8>, _>>()?;
                writer.write_bytes(&bytes);
            }
            other => return Err(SerializeError::mismatch(self.name(), other)),
        }
        Ok(())
    }
}

impl Serializer for CharArraySerializer {
    fn name(&self) -> &'static str {
        "char-array"
    }

    fn encode(&self, value: &Value, writer: &mut Writer) -> Result<(), SerializeError> {
        match value {
            Value::Null => writer.write_null(),
            Value::String(s) => writer.write_string(s),
            Value::List(items) => {
                let text = items
                    .iter()
                    .map(|item| match item {
                        Value::Char(c) => Ok(*c),
                        other => Err(SerializeError::mismatch(self.name(), other)),
                    })
                    .collect::<Result<String, _>>()?;
                writer.write_string(&text);
            }
            other => return Err(SerializeError::mismatch(self.name(), other)),
        }
        Ok(())
    }
}

impl Serializer for ArraySerializer {
    fn name(&self) -> &'static str {
        "array"
    }

    fn encode(&self, value: &Value, writer: &mut Writer) -> Result<(), SerializeError> {
        match value {
            Value::Null => writer.write_null(),
            Value::List(items) => match byte_run(items) {
                Some(bytes) => writer.write_bytes(&bytes),
                None => writer.write_list(items)?,
            },
            Value::Bytes(bytes) => writer.write_bytes(bytes),
            other => return Err(SerializeError::mismatch(self.name(), other)),
        }
        Ok(())
    }
}

fn byte_run(items: &[Value]) -> Option<Vec<u8>> {
    if items.is_empty() {
        return None;
    }
    items
        .iter()
        .map(|item| match item {
            Value::U8(b) => Some(*b),
            _ => None,
        })
        .collect()
}
