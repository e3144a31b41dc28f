// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Optional serializer families installed at bootstrap when available.

use super::builtin::Entry;

/// A block of registry entries that may or may not be available in this build.
pub trait OptionalFamily: Send + Sync {
    fn name(&self) -> &'static str;

    /// Entries to install, or `None` when the family is not available here.
    ///
    /// Absence is not an error; the registry skips the family silently.
    fn probe(&self) -> Option<Vec<Entry>>;
}

/// The `chrono` date/time types.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExtendedTimeFamily;

impl OptionalFamily for ExtendedTimeFamily {
    fn name(&self) -> &'static str {
        "extended-time"
    }

    #[cfg(feature = "chrono")]
    fn probe(&self) -> Option<Vec<Entry>> {
        use super::builtin::{entries, CALENDAR, DATE, DATETIME, TIME, TO_STRING};
        use chrono::{
            DateTime, FixedOffset, Local, Month, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta,
            Utc, Weekday,
        };

        // Zone types (Utc, FixedOffset, Local) are left to classification.
        Some(entries![
            DATE => [NaiveDate, Option<NaiveDate>],
            TIME => [NaiveTime, Option<NaiveTime>],
            DATETIME => [NaiveDateTime, Option<NaiveDateTime>, DateTime<Utc>, Option<DateTime<Utc>>],
            CALENDAR => [DateTime<FixedOffset>, DateTime<Local>],
            TO_STRING => [TimeDelta, Weekday, Month],
        ])
    }

    #[cfg(not(feature = "chrono"))]
    fn probe(&self) -> Option<Vec<Entry>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "chrono")]
    #[test]
    fn test_extended_time_entries() {
        use crate::types::TypeKey;

        let entries = ExtendedTimeFamily.probe().expect("chrono enabled");
        let lookup = |key: TypeKey| {
            entries
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, s)| s.name())
        };
        assert_eq!(lookup(TypeKey::of::<chrono::NaiveDate>()), Some("date"));
        assert_eq!(
            lookup(TypeKey::of::<chrono::DateTime<chrono::Utc>>()),
            Some("datetime")
        );
        assert_eq!(
            lookup(TypeKey::of::<chrono::DateTime<chrono::FixedOffset>>()),
            Some("calendar")
        );
        assert_eq!(lookup(TypeKey::of::<chrono::Utc>()), None);
    }

    #[cfg(not(feature = "chrono"))]
    #[test]
    fn test_extended_time_absent() {
        assert!(ExtendedTimeFamily.probe().is_none());
    }
}
