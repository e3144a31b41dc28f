// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Date, time, calendar and time-zone serializers.

use crate::serialize::{SerializeError, Serializer};
use crate::temporal::{DateTime, Time};
use crate::value::Value;
use crate::writer::Writer;

#[derive(Debug)]
pub struct DateSerializer;

#[derive(Debug)]
pub struct TimeSerializer;

#[derive(Debug)]
pub struct DateTimeSerializer;

/// Instants; the time part is written even at midnight.
#[derive(Debug)]
pub struct TimestampSerializer;

/// Date-times bundled with a zone.
#[derive(Debug)]
pub struct CalendarSerializer;

/// Zone identifiers, written as their id string.
#[derive(Debug)]
pub struct TimeZoneSerializer;

pub static DATE: DateSerializer = DateSerializer;
pub static TIME: TimeSerializer = TimeSerializer;
pub static DATETIME: DateTimeSerializer = DateTimeSerializer;
pub static TIMESTAMP: TimestampSerializer = TimestampSerializer;
pub static CALENDAR: CalendarSerializer = CalendarSerializer;
pub static TIME_ZONE: TimeZoneSerializer = TimeZoneSerializer;

impl Serializer for DateSerializer {
    fn name(&self) -> &'static str {
        "date"
    }

    fn encode(&self, value: &Value, writer: &mut Writer) -> Result<(), SerializeError> {
        match value {
            Value::Null => writer.write_null(),
            Value::Date(d) => writer.write_date(d),
            other => return Err(SerializeError::mismatch(self.name(), other)),
        }
        Ok(())
    }
}

impl Serializer for TimeSerializer {
    fn name(&self) -> &'static str {
        "time"
    }

    fn encode(&self, value: &Value, writer: &mut Writer) -> Result<(), SerializeError> {
        match value {
            Value::Null => writer.write_null(),
            Value::Time(t) => writer.write_time(t),
            other => return Err(SerializeError::mismatch(self.name(), other)),
        }
        Ok(())
    }
}

impl Serializer for DateTimeSerializer {
    fn name(&self) -> &'static str {
        "datetime"
    }

    fn encode(&self, value: &Value, writer: &mut Writer) -> Result<(), SerializeError> {
        match value {
            Value::Null => writer.write_null(),
            Value::DateTime(dt) => writer.write_datetime(dt),
            Value::Zoned(cal) => writer.write_calendar(cal),
            other => return Err(SerializeError::mismatch(self.name(), other)),
        }
        Ok(())
    }
}

impl Serializer for TimestampSerializer {
    fn name(&self) -> &'static str {
        "timestamp"
    }

    fn encode(&self, value: &Value, writer: &mut Writer) -> Result<(), SerializeError> {
        match value {
            Value::Null => writer.write_null(),
            Value::DateTime(dt) => writer.write_timestamp(dt),
            other => return Err(SerializeError::mismatch(self.name(), other)),
        }
        Ok(())
    }
}

impl Serializer for CalendarSerializer {
    fn name(&self) -> &'static str {
        "calendar"
    }

    fn encode(&self, value: &Value, writer: &mut Writer) -> Result<(), SerializeError> {
        match value {
            Value::Null => writer.write_null(),
            Value::Zoned(cal) => writer.write_calendar(cal),
            // A zero offset arrives already normalized to UTC.
            Value::DateTime(dt) => writer.write_datetime(dt),
            Value::Date(d) => writer.write_datetime(&DateTime::local(*d, Time::MIDNIGHT)),
            other => return Err(SerializeError::mismatch(self.name(), other)),
        }
        Ok(())
    }
}

impl Serializer for TimeZoneSerializer {
    fn name(&self) -> &'static str {
        "time-zone"
    }

    fn encode(&self, value: &Value, writer: &mut Writer) -> Result<(), SerializeError> {
        match value {
            Value::Null => writer.write_null(),
            Value::String(id) if !id.is_empty() => writer.write_string(id),
            Value::String(_) => {
                return Err(SerializeError::InvalidValue("empty time zone id".into()))
            }
            Value::Zoned(cal) => writer.write_string(cal.zone.as_str()),
            other => return Err(SerializeError::mismatch(self.name(), other)),
        }
        Ok(())
    }
}
