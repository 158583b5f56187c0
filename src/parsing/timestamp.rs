//! Date-format resolution for transcript timestamps.
//!
//! A single timestamp like `1/2/23` cannot tell month-first from day-first.
//! The resolver therefore tries a fixed, ranked list of candidate formats and
//! commits to the first one under which *every* timestamp of the transcript
//! parses. List order is the tie-break: when several candidates fit, the
//! earliest wins. Candidates are never scored against each other.

use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

use crate::error::{ChatStatsError, Result};

/// Order of the date components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DateOrder {
    /// `M/D/Y`
    MonthFirst,
    /// `D/M/Y`
    DayFirst,
    /// `Y/M/D`
    YearFirst,
}

/// Number of year digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum YearStyle {
    /// Two-digit year, `23`
    TwoDigit,
    /// Four-digit year, `2023`
    FourDigit,
}

/// Clock convention of the time component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClockStyle {
    /// `5:00 PM`
    TwelveHour,
    /// `17:00`
    TwentyFourHour,
}

/// One candidate timestamp layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DateFormat {
    pub order: DateOrder,
    pub year: YearStyle,
    pub clock: ClockStyle,
}

impl DateFormat {
    /// Candidate formats in resolution order.
    pub const CANDIDATES: [DateFormat; 10] = [
        // 12-hour formats
        DateFormat::new(DateOrder::MonthFirst, YearStyle::TwoDigit, ClockStyle::TwelveHour),
        DateFormat::new(DateOrder::DayFirst, YearStyle::TwoDigit, ClockStyle::TwelveHour),
        DateFormat::new(DateOrder::MonthFirst, YearStyle::FourDigit, ClockStyle::TwelveHour),
        DateFormat::new(DateOrder::DayFirst, YearStyle::FourDigit, ClockStyle::TwelveHour),
        // 24-hour formats
        DateFormat::new(DateOrder::MonthFirst, YearStyle::TwoDigit, ClockStyle::TwentyFourHour),
        DateFormat::new(DateOrder::DayFirst, YearStyle::TwoDigit, ClockStyle::TwentyFourHour),
        DateFormat::new(DateOrder::MonthFirst, YearStyle::FourDigit, ClockStyle::TwentyFourHour),
        DateFormat::new(DateOrder::DayFirst, YearStyle::FourDigit, ClockStyle::TwentyFourHour),
        // ISO order
        DateFormat::new(DateOrder::YearFirst, YearStyle::FourDigit, ClockStyle::TwelveHour),
        DateFormat::new(DateOrder::YearFirst, YearStyle::FourDigit, ClockStyle::TwentyFourHour),
    ];

    /// Creates a format descriptor.
    pub const fn new(order: DateOrder, year: YearStyle, clock: ClockStyle) -> Self {
        Self { order, year, clock }
    }

    /// Returns the chrono pattern for the date component.
    pub fn date_pattern(self) -> &'static str {
        match (self.order, self.year) {
            (DateOrder::MonthFirst, YearStyle::TwoDigit) => "%m/%d/%y",
            (DateOrder::MonthFirst, YearStyle::FourDigit) => "%m/%d/%Y",
            (DateOrder::DayFirst, YearStyle::TwoDigit) => "%d/%m/%y",
            (DateOrder::DayFirst, YearStyle::FourDigit) => "%d/%m/%Y",
            (DateOrder::YearFirst, YearStyle::TwoDigit) => "%y/%m/%d",
            (DateOrder::YearFirst, YearStyle::FourDigit) => "%Y/%m/%d",
        }
    }

    /// Returns chrono patterns for the time component, with seconds first.
    pub fn time_patterns(self) -> &'static [&'static str] {
        match self.clock {
            ClockStyle::TwelveHour => &["%I:%M:%S %p", "%I:%M %p"],
            ClockStyle::TwentyFourHour => &["%H:%M:%S", "%H:%M"],
        }
    }

    /// Parses one raw timestamp (trailing ` - ` separator allowed).
    ///
    /// Returns `None` when the timestamp does not fit this format.
    pub fn parse(self, raw: &str) -> Option<NaiveDateTime> {
        let trimmed = raw.trim_end();
        let cleaned = trimmed.strip_suffix('-').unwrap_or(trimmed).trim();
        let (date_part, time_part) = cleaned.split_once(',')?;
        let (date_part, time_part) = (date_part.trim(), time_part.trim());

        if !self.year_digits_match(date_part) {
            return None;
        }

        let mut date = NaiveDate::parse_from_str(date_part, self.date_pattern()).ok()?;
        // chrono's `%y` pivots at 70; two-digit years 69..=99 are 19xx.
        if self.year == YearStyle::TwoDigit && date.year() == 2069 {
            date = date.with_year(1969)?;
        }
        let time = self
            .time_patterns()
            .iter()
            .find_map(|pattern| NaiveTime::parse_from_str(time_part, pattern).ok())?;

        Some(date.and_time(time))
    }

    /// Checks the year field width, since chrono's `%Y` also accepts `23`.
    fn year_digits_match(self, date_part: &str) -> bool {
        let mut fields = date_part.split('/');
        let year_field = match self.order {
            DateOrder::YearFirst => fields.next(),
            DateOrder::MonthFirst | DateOrder::DayFirst => fields.nth(2),
        };
        let expected = match self.year {
            YearStyle::TwoDigit => 2,
            YearStyle::FourDigit => 4,
        };
        year_field.is_some_and(|y| y.len() == expected && y.bytes().all(|b| b.is_ascii_digit()))
    }

    /// Human-readable label, e.g. `MM/DD/YY 12h`.
    pub fn label(self) -> String {
        let date = match (self.order, self.year) {
            (DateOrder::MonthFirst, YearStyle::TwoDigit) => "MM/DD/YY",
            (DateOrder::MonthFirst, YearStyle::FourDigit) => "MM/DD/YYYY",
            (DateOrder::DayFirst, YearStyle::TwoDigit) => "DD/MM/YY",
            (DateOrder::DayFirst, YearStyle::FourDigit) => "DD/MM/YYYY",
            (DateOrder::YearFirst, YearStyle::TwoDigit) => "YY/MM/DD",
            (DateOrder::YearFirst, YearStyle::FourDigit) => "YYYY/MM/DD",
        };
        let clock = match self.clock {
            ClockStyle::TwelveHour => "12h",
            ClockStyle::TwentyFourHour => "24h",
        };
        format!("{date} {clock}")
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Outcome of date-format resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTimestamps {
    /// Selected format; `None` only when there were no timestamps.
    pub format: Option<DateFormat>,
    /// Parsed timestamps, in input order.
    pub timestamps: Vec<NaiveDateTime>,
}

/// Parses every raw timestamp with the first candidate that accepts all.
///
/// An empty input resolves to no format and no timestamps.
///
/// # Errors
///
/// Returns [`ChatStatsError::AmbiguousDateFormat`] when no candidate parses
/// every timestamp.
///
/// # Example
///
/// ```
/// use chatstats::parsing::timestamp::{DateOrder, resolve_timestamps};
///
/// let resolved = resolve_timestamps(&["1/13/23, 5:00 PM - ", "2/14/23, 5:00 PM - "])?;
/// assert_eq!(resolved.format.unwrap().order, DateOrder::MonthFirst);
/// # Ok::<(), chatstats::ChatStatsError>(())
/// ```
pub fn resolve_timestamps(raw: &[&str]) -> Result<ResolvedTimestamps> {
    let Some(first) = raw.first() else {
        return Ok(ResolvedTimestamps {
            format: None,
            timestamps: Vec::new(),
        });
    };

    for format in DateFormat::CANDIDATES {
        let parsed: Option<Vec<NaiveDateTime>> = raw.iter().map(|r| format.parse(r)).collect();
        if let Some(timestamps) = parsed {
            tracing::debug!(%format, count = timestamps.len(), "resolved date format");
            return Ok(ResolvedTimestamps {
                format: Some(format),
                timestamps,
            });
        }
        tracing::trace!(%format, "date format rejected");
    }

    Err(ChatStatsError::ambiguous_date_format(raw.len(), first.trim_end()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    fn fmt(order: DateOrder, year: YearStyle, clock: ClockStyle) -> DateFormat {
        DateFormat::new(order, year, clock)
    }

    #[test]
    fn test_parse_month_first_12h() {
        let f = fmt(DateOrder::MonthFirst, YearStyle::TwoDigit, ClockStyle::TwelveHour);
        let ts = f.parse("12/1/23, 9:05 AM - ").unwrap();
        assert_eq!((ts.year(), ts.month(), ts.day()), (2023, 12, 1));
        assert_eq!((ts.hour(), ts.minute()), (9, 5));

        let pm = f.parse("1/13/23, 5:00 pm - ").unwrap();
        assert_eq!(pm.hour(), 17);
    }

    #[test]
    fn test_parse_with_seconds() {
        let f = fmt(DateOrder::DayFirst, YearStyle::FourDigit, ClockStyle::TwentyFourHour);
        let ts = f.parse("15/01/2024, 10:30:45 - ").unwrap();
        assert_eq!(ts.second(), 45);
        assert_eq!(ts.month(), 1);
    }

    #[test]
    fn test_year_width_enforced() {
        let four = fmt(DateOrder::MonthFirst, YearStyle::FourDigit, ClockStyle::TwentyFourHour);
        assert!(four.parse("1/2/23, 10:00 - ").is_none());
        assert!(four.parse("1/2/2023, 10:00 - ").is_some());

        let two = fmt(DateOrder::MonthFirst, YearStyle::TwoDigit, ClockStyle::TwentyFourHour);
        assert!(two.parse("1/2/2023, 10:00 - ").is_none());
    }

    #[test]
    fn test_two_digit_year_pivot() {
        let f = fmt(DateOrder::MonthFirst, YearStyle::TwoDigit, ClockStyle::TwentyFourHour);
        assert_eq!(f.parse("1/1/68, 10:00 - ").unwrap().year(), 2068);
        assert_eq!(f.parse("1/1/69, 10:00 - ").unwrap().year(), 1969);
        assert_eq!(f.parse("1/1/99, 10:00 - ").unwrap().year(), 1999);
        assert_eq!(f.parse("1/1/00, 10:00 - ").unwrap().year(), 2000);
    }

    #[test]
    fn test_clock_style_must_match() {
        let h12 = fmt(DateOrder::MonthFirst, YearStyle::TwoDigit, ClockStyle::TwelveHour);
        let h24 = fmt(DateOrder::MonthFirst, YearStyle::TwoDigit, ClockStyle::TwentyFourHour);
        assert!(h12.parse("1/2/23, 17:00 - ").is_none());
        assert!(h24.parse("1/2/23, 5:00 PM - ").is_none());
    }

    #[test]
    fn test_resolve_month_first_forced_by_day_13() {
        let resolved = resolve_timestamps(&["1/13/23, 5:00 PM - ", "2/14/23, 5:00 PM - "]).unwrap();
        let format = resolved.format.unwrap();
        assert_eq!(format.order, DateOrder::MonthFirst);
        assert_eq!(format.clock, ClockStyle::TwelveHour);
        assert_eq!(resolved.timestamps[0].day(), 13);
        assert_eq!(resolved.timestamps[1].month(), 2);
    }

    #[test]
    fn test_resolve_day_first_when_month_first_fails() {
        let resolved = resolve_timestamps(&["1/2/23, 17:00 - ", "13/2/23, 17:00 - "]).unwrap();
        let format = resolved.format.unwrap();
        assert_eq!(format.order, DateOrder::DayFirst);
        assert_eq!(format.clock, ClockStyle::TwentyFourHour);
        // 1/2/23 is February 1st under day-first
        assert_eq!(resolved.timestamps[0].month(), 2);
        assert_eq!(resolved.timestamps[0].day(), 1);
    }

    #[test]
    fn test_resolve_ambiguous_prefers_list_order() {
        let resolved = resolve_timestamps(&["1/2/23, 10:00 AM - "]).unwrap();
        assert_eq!(resolved.format, Some(DateFormat::CANDIDATES[0]));
        assert_eq!(resolved.timestamps[0].month(), 1);
    }

    #[test]
    fn test_resolve_year_first() {
        let resolved = resolve_timestamps(&["2023/01/13, 17:00 - "]).unwrap();
        let format = resolved.format.unwrap();
        assert_eq!(format.order, DateOrder::YearFirst);
        assert_eq!(resolved.timestamps[0].year(), 2023);
    }

    #[test]
    fn test_resolve_failure() {
        // Day 13 forces month-first on the first, month 13 forces day-first on the second
        let err = resolve_timestamps(&["1/13/23, 10:00 - ", "13/1/23, 10:00 - "]).unwrap_err();
        assert!(err.is_ambiguous_date_format());
        assert!(err.to_string().contains("1/13/23, 10:00 -"));
    }

    #[test]
    fn test_resolve_mixed_clock_fails() {
        let err = resolve_timestamps(&["1/2/23, 10:00 AM - ", "1/2/23, 17:00 - "]).unwrap_err();
        assert!(matches!(
            err,
            ChatStatsError::AmbiguousDateFormat { timestamps: 2, .. }
        ));
    }

    #[test]
    fn test_resolve_empty() {
        let resolved = resolve_timestamps(&[]).unwrap();
        assert!(resolved.format.is_none());
        assert!(resolved.timestamps.is_empty());
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let raw = ["3/4/23, 9:00 AM - ", "3/5/23, 11:15 PM - ", "4/1/23, 12:00 PM - "];
        let first = resolve_timestamps(&raw).unwrap();
        let second = resolve_timestamps(&raw).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_labels() {
        assert_eq!(DateFormat::CANDIDATES[0].to_string(), "MM/DD/YY 12h");
        assert_eq!(DateFormat::CANDIDATES[7].to_string(), "DD/MM/YYYY 24h");
        assert_eq!(DateFormat::CANDIDATES[9].to_string(), "YYYY/MM/DD 24h");
    }
}
