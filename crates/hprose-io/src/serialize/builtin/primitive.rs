// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Unit, boolean, character and numeric serializers.

use crate::serialize::{SerializeError, Serializer};
use crate::value::Value;
use crate::writer::Writer;
use rust_decimal::Decimal;

#[derive(Debug)]
pub struct NullSerializer;

#[derive(Debug)]
pub struct BoolSerializer;

#[derive(Debug)]
pub struct CharSerializer;

/// Integers that fit in 32 bits.
#[derive(Debug)]
pub struct IntegerSerializer;

/// Integers that fit in 64 bits.
#[derive(Debug)]
pub struct LongSerializer;

#[derive(Debug)]
pub struct FloatSerializer;

#[derive(Debug)]
pub struct DoubleSerializer;

/// 128-bit integers.
#[derive(Debug)]
pub struct BigIntegerSerializer;

/// Exact decimals, in the `d` form with their scale preserved.
#[derive(Debug)]
pub struct DecimalSerializer;

pub static NULL: NullSerializer = NullSerializer;
pub static BOOL: BoolSerializer = BoolSerializer;
pub static CHAR: CharSerializer = CharSerializer;
pub static INTEGER: IntegerSerializer = IntegerSerializer;
pub static LONG: LongSerializer = LongSerializer;
pub static FLOAT: FloatSerializer = FloatSerializer;
pub static DOUBLE: DoubleSerializer = DoubleSerializer;
pub static BIG_INTEGER: BigIntegerSerializer = BigIntegerSerializer;
pub static DECIMAL: DecimalSerializer = DecimalSerializer;

impl Serializer for NullSerializer {
    fn name(&self) -> &'static str {
        "null"
    }

    /// Every value of the unit type is null.
    fn encode(&self, _value: &Value, writer: &mut Writer) -> Result<(), SerializeError> {
        writer.write_null();
        Ok(())
    }
}

impl Serializer for BoolSerializer {
    fn name(&self) -> &'static str {
        "bool"
    }

    fn encode(&self, value: &Value, writer: &mut Writer) -> Result<(), SerializeError> {
        match value {
            Value::Null => writer.write_null(),
            Value::Bool(v) => writer.write_bool(*v),
            other => return Err(SerializeError::mismatch(self.name(), other)),
        }
        Ok(())
    }
}

impl Serializer for CharSerializer {
    fn name(&self) -> &'static str {
        "char"
    }

    fn encode(&self, value: &Value, writer: &mut Writer) -> Result<(), SerializeError> {
        match value {
            Value::Null => writer.write_null(),
            Value::Char(v) => writer.write_char(*v),
            other => return Err(SerializeError::mismatch(self.name(), other)),
        }
        Ok(())
    }
}

impl Serializer for IntegerSerializer {
    fn name(&self) -> &'static str {
        "integer"
    }

    fn encode(&self, value: &Value, writer: &mut Writer) -> Result<(), SerializeError> {
        if value.is_null() {
            writer.write_null();
            return Ok(());
        }
        match value.as_i32() {
            Some(v) => {
                writer.write_integer(v);
                Ok(())
            }
            None => Err(SerializeError::mismatch(self.name(), value)),
        }
    }
}

impl Serializer for LongSerializer {
    fn name(&self) -> &'static str {
        "long"
    }

    fn encode(&self, value: &Value, writer: &mut Writer) -> Result<(), SerializeError> {
        match value {
            Value::Null => writer.write_null(),
            // u64 beyond i64::MAX still fits the `l` form.
            Value::U64(v) if i64::try_from(*v).is_err() => writer.write_big_integer(v),
            other => match other.as_i64() {
                Some(v) => writer.write_long(v),
                None => return Err(SerializeError::mismatch(self.name(), other)),
            },
        }
        Ok(())
    }
}

impl Serializer for FloatSerializer {
    fn name(&self) -> &'static str {
        "float"
    }

    fn encode(&self, value: &Value, writer: &mut Writer) -> Result<(), SerializeError> {
        match value {
            Value::Null => writer.write_null(),
            Value::F32(v) => writer.write_float(*v),
            Value::F64(v) => writer.write_double(*v),
            other => return Err(SerializeError::mismatch(self.name(), other)),
        }
        Ok(())
    }
}

impl Serializer for DoubleSerializer {
    fn name(&self) -> &'static str {
        "double"
    }

    fn encode(&self, value: &Value, writer: &mut Writer) -> Result<(), SerializeError> {
        match value {
            Value::Null => writer.write_null(),
            Value::F32(v) => writer.write_double(f64::from(*v)),
            Value::F64(v) => writer.write_double(*v),
            other => return Err(SerializeError::mismatch(self.name(), other)),
        }
        Ok(())
    }
}

impl Serializer for BigIntegerSerializer {
    fn name(&self) -> &'static str {
        "big-integer"
    }

    fn encode(&self, value: &Value, writer: &mut Writer) -> Result<(), SerializeError> {
        match value {
            Value::Null => writer.write_null(),
            Value::I128(v) => writer.write_big_integer(v),
            Value::U128(v) => writer.write_big_integer(v),
            Value::U64(v) => writer.write_big_integer(v),
            other => match other.as_i64() {
                Some(v) => writer.write_big_integer(v),
                None => return Err(SerializeError::mismatch(self.name(), other)),
            },
        }
        Ok(())
    }
}

impl Serializer for DecimalSerializer {
    fn name(&self) -> &'static str {
        "decimal"
    }

    fn encode(&self, value: &Value, writer: &mut Writer) -> Result<(), SerializeError> {
        match value {
            Value::Null => writer.write_null(),
            Value::Decimal(v) => writer.write_decimal(v),
            Value::F32(v) => writer.write_float(*v),
            Value::F64(v) => writer.write_double(*v),
            other => match other.as_i64() {
                Some(v) => writer.write_decimal(&Decimal::from(v)),
                None => return Err(SerializeError::mismatch(self.name(), other)),
            },
        }
        Ok(())
    }
}
