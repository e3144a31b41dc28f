// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Hprose output buffer.
//!
//! [`Writer`] appends tagged values to a byte buffer. Serializers drive it
//! through the typed `write_*` methods; [`Writer::write_value`] dispatches a
//! nested [`Value`] by variant.

pub mod tags;

#[cfg(test)]
mod tests;

use crate::serialize::SerializeError;
use crate::temporal::{Calendar, Date, DateTime, Time};
use crate::value::Value;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::fmt;
use std::io::Write as _;
use tags::*;

/// Append-only Hprose writer.
#[derive(Debug, Default)]
pub struct Writer {
    buffer: Vec<u8>,
    /// Class name -> index of its `c` definition in this stream.
    classes: HashMap<String, usize>,
}

impl Writer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
            classes: HashMap::new(),
        }
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Drop buffered output and forget defined classes.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.classes.clear();
    }

    #[inline]
    fn push(&mut self, byte: u8) {
        self.buffer.push(byte);
    }

    fn push_display(&mut self, value: impl fmt::Display) {
        // io::Write for Vec<u8> is infallible.
        let _ = write!(self.buffer, "{}", value);
    }

    /// Element counts are omitted when zero.
    fn push_count(&mut self, count: usize) {
        if count > 0 {
            self.push_display(count);
        }
    }

    pub fn write_null(&mut self) {
        self.push(TAG_NULL);
    }

    pub fn write_empty(&mut self) {
        self.push(TAG_EMPTY);
    }

    pub fn write_bool(&mut self, value: bool) {
        self.push(if value { TAG_TRUE } else { TAG_FALSE });
    }

    pub fn write_integer(&mut self, value: i32) {
        if (0..=9).contains(&value) {
            self.push(b'0' + value as u8);
        } else {
            self.push(TAG_INTEGER);
            self.push_display(value);
            self.push(TAG_SEMICOLON);
        }
    }

    pub fn write_long(&mut self, value: i64) {
        if (0..=9).contains(&value) {
            self.push(b'0' + value as u8);
        } else {
            self.push(TAG_LONG);
            self.push_display(value);
            self.push(TAG_SEMICOLON);
        }
    }

    /// Arbitrary-width integer, always in the `l` form.
    pub fn write_big_integer(&mut self, digits: impl fmt::Display) {
        self.push(TAG_LONG);
        self.push_display(digits);
        self.push(TAG_SEMICOLON);
    }

    pub fn write_double(&mut self, value: f64) {
        if value.is_nan() {
            self.push(TAG_NAN);
        } else if value.is_infinite() {
            self.push(TAG_INFINITY);
            self.push(if value > 0.0 { TAG_POS } else { TAG_NEG });
        } else {
            self.push(TAG_DOUBLE);
            self.push_display(value);
            self.push(TAG_SEMICOLON);
        }
    }

    /// Decimals keep their scale, e.g. `d1.50;`.
    pub fn write_decimal(&mut self, value: &Decimal) {
        self.push(TAG_DOUBLE);
        self.push_display(value);
        self.push(TAG_SEMICOLON);
    }

    /// Single precision keeps its own shortest decimal form.
    pub fn write_float(&mut self, value: f32) {
        if value.is_finite() {
            self.push(TAG_DOUBLE);
            self.push_display(value);
            self.push(TAG_SEMICOLON);
        } else {
            self.write_double(f64::from(value));
        }
    }

    /// Characters outside the BMP need two UTF-16 units and go out as strings.
    pub fn write_char(&mut self, value: char) {
        if value.len_utf16() == 1 {
            self.push(TAG_UTF8_CHAR);
            let mut buf = [0u8; 4];
            self.buffer
                .extend_from_slice(value.encode_utf8(&mut buf).as_bytes());
        } else {
            let mut buf = [0u8; 4];
            self.write_string(value.encode_utf8(&mut buf));
        }
    }

    /// Length prefix counts UTF-16 code units.
    pub fn write_string(&mut self, value: &str) {
        let units = value.encode_utf16().count();
        match units {
            0 => self.write_empty(),
            1 => {
                self.push(TAG_UTF8_CHAR);
                self.buffer.extend_from_slice(value.as_bytes());
            }
            _ => {
                self.push(TAG_STRING);
                self.push_display(units);
                self.push(TAG_QUOTE);
                self.buffer.extend_from_slice(value.as_bytes());
                self.push(TAG_QUOTE);
            }
        }
    }

    pub fn write_bytes(&mut self, value: &[u8]) {
        self.push(TAG_BYTES);
        self.push_count(value.len());
        self.push(TAG_QUOTE);
        self.buffer.extend_from_slice(value);
        self.push(TAG_QUOTE);
    }

    pub fn write_uuid(&mut self, value: &uuid::Uuid) {
        self.push(TAG_GUID);
        self.push(TAG_OPENBRACE);
        self.push_display(value.hyphenated());
        self.push(TAG_CLOSEBRACE);
    }

    fn push_date(&mut self, date: &Date) {
        self.push(TAG_DATE);
        self.push_display(format_args!(
            "{:04}{:02}{:02}",
            date.year(),
            date.month(),
            date.day()
        ));
    }

    fn push_time(&mut self, time: &Time) {
        self.push(TAG_TIME);
        self.push_display(format_args!(
            "{:02}{:02}{:02}",
            time.hour(),
            time.minute(),
            time.second()
        ));
        let nanos = time.nanosecond();
        if nanos == 0 {
            return;
        }
        self.push(TAG_POINT);
        if nanos % 1_000_000 == 0 {
            self.push_display(format_args!("{:03}", nanos / 1_000_000));
        } else if nanos % 1_000 == 0 {
            self.push_display(format_args!("{:06}", nanos / 1_000));
        } else {
            self.push_display(format_args!("{:09}", nanos));
        }
    }

    fn push_zone(&mut self, utc: bool) {
        self.push(if utc { TAG_UTC } else { TAG_SEMICOLON });
    }

    /// `DYYYYMMDD;`
    pub fn write_date(&mut self, date: &Date) {
        self.push_date(date);
        self.push_zone(false);
    }

    /// `THHMMSS[.fraction];`
    pub fn write_time(&mut self, time: &Time) {
        self.push_time(time);
        self.push_zone(false);
    }

    /// Date, then the time part unless it is midnight, then `Z` or `;`.
    pub fn write_datetime(&mut self, value: &DateTime) {
        self.push_date(&value.date);
        if value.time != Time::MIDNIGHT {
            self.push_time(&value.time);
        }
        self.push_zone(value.utc);
    }

    /// Like [`write_datetime`](Self::write_datetime) but the time part is always present.
    pub fn write_timestamp(&mut self, value: &DateTime) {
        self.push_date(&value.date);
        self.push_time(&value.time);
        self.push_zone(value.utc);
    }

    /// Zoned values keep their local fields; only UTC zones are marked.
    pub fn write_calendar(&mut self, value: &Calendar) {
        self.write_datetime(&DateTime {
            date: value.date,
            time: value.time,
            utc: value.zone.is_utc(),
        });
    }

    pub fn write_list_header(&mut self, count: usize) {
        self.push(TAG_LIST);
        self.push_count(count);
        self.push(TAG_OPENBRACE);
    }

    pub fn write_map_header(&mut self, count: usize) {
        self.push(TAG_MAP);
        self.push_count(count);
        self.push(TAG_OPENBRACE);
    }

    /// Closes a list, map or object body.
    pub fn write_end(&mut self) {
        self.push(TAG_CLOSEBRACE);
    }

    /// Index of `class` in this stream, writing its definition on first use.
    pub fn write_class<'a, I>(&mut self, class: &str, fields: I) -> usize
    where
        I: ExactSizeIterator<Item = &'a str>,
    {
        if let Some(&index) = self.classes.get(class) {
            return index;
        }
        self.push(TAG_CLASS);
        self.push_display(class.encode_utf16().count());
        self.push(TAG_QUOTE);
        self.buffer.extend_from_slice(class.as_bytes());
        self.push(TAG_QUOTE);
        self.push_count(fields.len());
        self.push(TAG_OPENBRACE);
        for field in fields {
            self.write_string(field);
        }
        self.push(TAG_CLOSEBRACE);

        let index = self.classes.len();
        self.classes.insert(class.to_owned(), index);
        index
    }

    pub fn write_object_header(&mut self, class_index: usize) {
        self.push(TAG_OBJECT);
        self.push_display(class_index);
        self.push(TAG_OPENBRACE);
    }

    /// Number of classes defined so far in this stream.
    #[must_use]
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// Class definition (first time only) followed by the object body.
    pub fn write_object(
        &mut self,
        class: &str,
        fields: &[(String, Value)],
    ) -> Result<(), SerializeError> {
        if class.is_empty() {
            return Err(SerializeError::InvalidValue(
                "object class name is empty".into(),
            ));
        }
        let index = self.write_class(class, fields.iter().map(|(name, _)| name.as_str()));
        self.write_object_header(index);
        for (_, value) in fields {
            self.write_value(value)?;
        }
        self.write_end();
        Ok(())
    }

    pub fn write_list(&mut self, items: &[Value]) -> Result<(), SerializeError> {
        self.write_list_header(items.len());
        for item in items {
            self.write_value(item)?;
        }
        self.write_end();
        Ok(())
    }

    pub fn write_map(&mut self, entries: &[(Value, Value)]) -> Result<(), SerializeError> {
        self.write_map_header(entries.len());
        for (key, value) in entries {
            self.write_value(key)?;
            self.write_value(value)?;
        }
        self.write_end();
        Ok(())
    }

    /// Enumerations go out by constant name.
    pub fn write_enum(&mut self, name: &str) -> Result<(), SerializeError> {
        if name.is_empty() {
            return Err(SerializeError::InvalidValue(
                "enum constant name is empty".into(),
            ));
        }
        self.write_string(name);
        Ok(())
    }

    /// Write any value, choosing the encoding from its variant.
    pub fn write_value(&mut self, value: &Value) -> Result<(), SerializeError> {
        match value {
            Value::Null => self.write_null(),
            Value::Bool(v) => self.write_bool(*v),
            Value::Char(v) => self.write_char(*v),
            Value::I8(v) => self.write_integer(i32::from(*v)),
            Value::I16(v) => self.write_integer(i32::from(*v)),
            Value::I32(v) => self.write_integer(*v),
            Value::U8(v) => self.write_integer(i32::from(*v)),
            Value::U16(v) => self.write_integer(i32::from(*v)),
            Value::I64(v) => self.write_long(*v),
            Value::U32(v) => self.write_long(i64::from(*v)),
            Value::U64(v) => match i64::try_from(*v) {
                Ok(v) => self.write_long(v),
                Err(_) => self.write_big_integer(v),
            },
            Value::I128(v) => self.write_big_integer(v),
            Value::U128(v) => self.write_big_integer(v),
            Value::F32(v) => self.write_float(*v),
            Value::F64(v) => self.write_double(*v),
            Value::Decimal(v) => self.write_decimal(v),
            Value::String(v) => self.write_string(v),
            Value::Bytes(v) => self.write_bytes(v),
            Value::Uuid(v) => self.write_uuid(v),
            Value::Date(v) => self.write_date(v),
            Value::Time(v) => self.write_time(v),
            Value::DateTime(v) => self.write_datetime(v),
            Value::Zoned(v) => self.write_calendar(v),
            Value::List(items) => return self.write_list(items),
            Value::Map(entries) => return self.write_map(entries),
            Value::Enum { name, .. } => return self.write_enum(name),
            Value::Object { class, fields } => return self.write_object(class, fields),
        }
        Ok(())
    }
}
