// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Serde adapters for calendar dates (`YYYY-MM-DD`) and clock times (`HH:MM`).

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

/// Calendar date format used in storage and on the wire.
pub const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Clock time format used in storage and on the wire.
pub const TIME_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[hour]:[minute]");

/// `YYYY-MM-DD` serialization for `time::Date`.
pub mod iso_date {
    use super::DATE_FORMAT;
    use serde::{Deserialize, Deserializer, Serializer};
    use time::Date;

    /// Serializes a date as `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns an error if the date cannot be formatted.
    pub fn serialize<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        let text: String = date
            .format(DATE_FORMAT)
            .map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&text)
    }

    /// Deserializes a `YYYY-MM-DD` date.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid date.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
        let text: String = String::deserialize(deserializer)?;
        Date::parse(&text, DATE_FORMAT).map_err(serde::de::Error::custom)
    }

    /// Optional variant. Absent, `null` and empty strings all read as `None`.
    pub mod option {
        use super::DATE_FORMAT;
        use serde::{Deserialize, Deserializer, Serializer};
        use time::Date;

        /// Serializes an optional date as `YYYY-MM-DD` or `null`.
        ///
        /// # Errors
        ///
        /// Returns an error if the date cannot be formatted.
        pub fn serialize<S: Serializer>(
            date: &Option<Date>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match date {
                Some(value) => {
                    let text: String = value
                        .format(DATE_FORMAT)
                        .map_err(serde::ser::Error::custom)?;
                    serializer.serialize_some(&text)
                }
                None => serializer.serialize_none(),
            }
        }

        /// Deserializes an optional `YYYY-MM-DD` date.
        ///
        /// # Errors
        ///
        /// Returns an error if a non-empty value is not a valid date.
        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<Date>, D::Error> {
            let text: Option<String> = Option::deserialize(deserializer)?;
            match text.as_deref() {
                None | Some("") => Ok(None),
                Some(value) => Date::parse(value, DATE_FORMAT)
                    .map(Some)
                    .map_err(serde::de::Error::custom),
            }
        }
    }
}

/// `HH:MM` serialization for `time::Time`.
pub mod clock_time {
    use super::TIME_FORMAT;
    use serde::{Deserialize, Deserializer, Serializer};
    use time::Time;

    /// Serializes a time as `HH:MM`.
    ///
    /// # Errors
    ///
    /// Returns an error if the time cannot be formatted.
    pub fn serialize<S: Serializer>(time: &Time, serializer: S) -> Result<S::Ok, S::Error> {
        let text: String = time
            .format(TIME_FORMAT)
            .map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&text)
    }

    /// Deserializes an `HH:MM` time.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid time.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Time, D::Error> {
        let text: String = String::deserialize(deserializer)?;
        Time::parse(&text, TIME_FORMAT).map_err(serde::de::Error::custom)
    }
}
