//! The parsed chat record.
//!
//! [`ChatRecord`] is one logical message from an export: a timestamp, a
//! sender and the raw message text. Calendar fields used by the aggregation
//! views ([`DateParts`]) are derived from the timestamp once, when the record
//! is built, and never change afterwards.
//!
//! # Examples
//!
//! ```
//! use chatstats::ChatRecord;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2023, 1, 2)
//!     .unwrap()
//!     .and_hms_opt(9, 30, 0)
//!     .unwrap();
//! let record = ChatRecord::new(ts, "Alice", "Hello there");
//!
//! assert_eq!(record.sender(), "Alice");
//! assert_eq!(record.parts().month, "January");
//! assert_eq!(record.parts().weekday_name(), "Monday");
//! ```

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};

/// Sender assigned to lines with no `sender: ` delimiter (group events such
/// as "X added Y" or "X changed the group icon").
pub const GROUP_NOTIFICATION: &str = "group_notification";

/// Text substituted by WhatsApp when an attachment was left out of the export.
pub const MEDIA_OMITTED: &str = "<Media omitted>";

/// Full English month names, indexed by `month_num - 1`.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Full English weekday names, Monday first.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Calendar fields derived from a record's timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateParts {
    pub year: i32,
    /// Full month name, e.g. `"January"`.
    pub month: &'static str,
    /// 1–12.
    pub month_num: u32,
    pub day: u32,
    /// 0–23.
    pub hour: u32,
    pub minute: u32,
    pub weekday: Weekday,
    /// Calendar date without time, used for daily grouping.
    pub date: NaiveDate,
}

impl DateParts {
    /// Derives every calendar field from `ts`.
    pub fn from_timestamp(ts: NaiveDateTime) -> Self {
        let month_num = ts.month();
        Self {
            year: ts.year(),
            month: MONTH_NAMES[(month_num - 1) as usize],
            month_num,
            day: ts.day(),
            hour: ts.hour(),
            minute: ts.minute(),
            weekday: ts.weekday(),
            date: ts.date(),
        }
    }

    /// Full weekday name, e.g. `"Monday"`.
    pub fn weekday_name(&self) -> &'static str {
        WEEKDAY_NAMES[self.weekday.num_days_from_monday() as usize]
    }
}

/// One parsed message unit.
///
/// Records are immutable once built: fields are private and derived calendar
/// data always agrees with the timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRecord {
    timestamp: NaiveDateTime,
    sender: String,
    text: String,
    parts: DateParts,
}

impl ChatRecord {
    /// Builds a record and derives its calendar fields.
    ///
    /// An empty `sender` is replaced by [`GROUP_NOTIFICATION`].
    pub fn new(timestamp: NaiveDateTime, sender: impl Into<String>, text: impl Into<String>) -> Self {
        let mut sender = sender.into();
        if sender.is_empty() {
            sender = GROUP_NOTIFICATION.to_string();
        }
        Self {
            timestamp,
            sender,
            text: text.into(),
            parts: DateParts::from_timestamp(timestamp),
        }
    }

    /// Builds a system entry attributed to [`GROUP_NOTIFICATION`].
    pub fn notification(timestamp: NaiveDateTime, text: impl Into<String>) -> Self {
        Self::new(timestamp, GROUP_NOTIFICATION, text)
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Raw message body, possibly spanning several lines.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn parts(&self) -> &DateParts {
        &self.parts
    }

    /// Returns `true` for group events that have no human sender.
    pub fn is_notification(&self) -> bool {
        self.sender == GROUP_NOTIFICATION
    }

    /// Returns `true` if the body is exactly the media placeholder.
    pub fn is_media(&self) -> bool {
        self.text == MEDIA_OMITTED
    }
}
