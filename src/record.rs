//! Parsed chat record with its derived calendar fields.
//!
//! This module provides [`ChatRecord`], the structured form of one
//! transcript entry. Every record carries a non-null naive timestamp and the
//! calendar fields derived from it ([`CalendarFields`]). The derived fields
//! are computed once at construction and cannot be edited independently, so
//! `month_num` and `month_name` always describe the same month.
//!
//! # Examples
//!
//! ```
//! use chatstats::ChatRecord;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2023, 12, 1)
//!     .unwrap()
//!     .and_hms_opt(14, 5, 0)
//!     .unwrap();
//! let record = ChatRecord::new(ts, "Alice", "hello");
//!
//! assert_eq!(record.author(), "Alice");
//! assert_eq!(record.calendar().month_name, "December");
//! assert_eq!(record.calendar().weekday_name, "Friday");
//! assert_eq!(record.calendar().hour_bucket, "14-15");
//! ```

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};
use serde::Serialize;

/// Author assigned to body segments without a `name: ` prefix.
pub const NOTIFICATION_AUTHOR: &str = "Group Notification";

const MONTH_NAMES: [&str; 12] = [
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

/// Weekdays in canonical chart order, Monday first.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Full English month name for a month number in `1..=12`.
///
/// Out-of-range numbers yield an empty string.
pub fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|idx| MONTH_NAMES.get(idx as usize))
        .copied()
        .unwrap_or("")
}

/// Full English weekday name.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Hour-bucket label, `"{hour}-{hour+1}"` with no zero padding.
///
/// ```
/// assert_eq!(chatstats::record::hour_bucket(9), "9-10");
/// assert_eq!(chatstats::record::hour_bucket(23), "23-24");
/// ```
pub fn hour_bucket(hour: u32) -> String {
    format!("{}-{}", hour, hour + 1)
}

/// Calendar fields derived from a record's timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarFields {
    /// Calendar year.
    pub year: i32,
    /// Full English month name, e.g. `"January"`.
    pub month_name: &'static str,
    /// Month number, `1..=12`.
    pub month_num: u32,
    /// Day of month, `1..=31`.
    pub day: u32,
    /// Full English weekday name, e.g. `"Monday"`.
    pub weekday_name: &'static str,
    /// Hour of day, `0..=23`.
    pub hour: u32,
    /// Minute, `0..=59`.
    pub minute: u32,
    /// Hour bucket label, e.g. `"14-15"`.
    pub hour_bucket: String,
}

impl CalendarFields {
    /// Computes every derived field from a timestamp.
    pub fn from_timestamp(ts: NaiveDateTime) -> Self {
        Self {
            year: ts.year(),
            month_name: month_name(ts.month()),
            month_num: ts.month(),
            day: ts.day(),
            weekday_name: weekday_name(ts.weekday()),
            hour: ts.hour(),
            minute: ts.minute(),
            hour_bucket: hour_bucket(ts.hour()),
        }
    }
}

/// One authored (or notification) entry of a chat transcript.
///
/// Fields are private so the derived calendar data can never drift from the
/// timestamp it was computed from. Records serialize flat:
///
/// ```
/// use chatstats::ChatRecord;
/// use chrono::NaiveDate;
///
/// let ts = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap().and_hms_opt(9, 30, 0).unwrap();
/// let json = serde_json::to_string(&ChatRecord::new(ts, "Bob", "hi")).unwrap();
///
/// assert!(json.contains(r#""author":"Bob""#));
/// assert!(json.contains(r#""hour_bucket":"9-10""#));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatRecord {
    timestamp: NaiveDateTime,
    author: String,
    message: String,
    #[serde(flatten)]
    calendar: CalendarFields,
}

impl ChatRecord {
    /// Creates a record and computes its calendar fields.
    pub fn new(
        timestamp: NaiveDateTime,
        author: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            author: author.into(),
            message: message.into(),
            calendar: CalendarFields::from_timestamp(timestamp),
        }
    }

    /// Creates a notification record (author is [`NOTIFICATION_AUTHOR`]).
    pub fn notification(timestamp: NaiveDateTime, message: impl Into<String>) -> Self {
        Self::new(timestamp, NOTIFICATION_AUTHOR, message)
    }

    /// Returns the naive local timestamp.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Returns the calendar date of the timestamp.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    /// Returns the weekday of the timestamp.
    pub fn weekday(&self) -> Weekday {
        self.timestamp.weekday()
    }

    /// Returns the author (participant identifier or [`NOTIFICATION_AUTHOR`]).
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the message body.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the derived calendar fields.
    pub fn calendar(&self) -> &CalendarFields {
        &self.calendar
    }

    /// Returns `true` if this record is a group notification.
    pub fn is_notification(&self) -> bool {
        self.author == NOTIFICATION_AUTHOR
    }
}
