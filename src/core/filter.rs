//! Author and date-range selection over a record collection.
//!
//! Every aggregation takes a [`UserFilter`]: either "Overall" (all authors)
//! or one specific author. [`FilterConfig`] adds an optional inclusive date
//! range on top. Filtering always borrows; the shared collection is never
//! mutated.
//!
//! # Examples
//!
//! ```
//! use chatstats::core::filter::{FilterConfig, UserFilter, apply_filters};
//! use chatstats::parser::parse_transcript;
//!
//! # fn main() -> chatstats::Result<()> {
//! let records = parse_transcript(
//!     "1/5/24, 10:00 - Alice: Old\n6/15/24, 10:00 - Alice: New\n6/16/24, 10:00 - Bob: Hi\n",
//! )?;
//!
//! let config = FilterConfig::new()
//!     .with_user(UserFilter::user("Alice"))
//!     .with_date_from("2024-06-01")?;
//!
//! let selected = apply_filters(&records, &config);
//! assert_eq!(selected.len(), 1);
//! assert_eq!(selected[0].message(), "New");
//! # Ok(())
//! # }
//! ```

use std::collections::BTreeSet;
use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::error::{ChatStatsError, Result};
use crate::record::ChatRecord;

/// Label of the "all authors" choice.
pub const OVERALL: &str = "Overall";

/// Author selection for aggregations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UserFilter {
    /// All authors.
    #[default]
    Overall,
    /// Only records written by this author (exact match).
    User(String),
}

impl UserFilter {
    /// Creates a filter for one author.
    pub fn user(name: impl Into<String>) -> Self {
        UserFilter::User(name.into())
    }

    /// Maps a selector value to a filter; `"Overall"` selects everyone.
    pub fn from_selection(selection: &str) -> Self {
        if selection == OVERALL {
            UserFilter::Overall
        } else {
            UserFilter::User(selection.to_string())
        }
    }

    /// Returns `true` if the record passes the filter.
    pub fn matches(&self, record: &ChatRecord) -> bool {
        match self {
            UserFilter::Overall => true,
            UserFilter::User(name) => record.author() == name,
        }
    }

    /// Returns `true` for the "all authors" filter.
    pub fn is_overall(&self) -> bool {
        matches!(self, UserFilter::Overall)
    }

    /// Selector choices: "Overall" first, then every author sorted.
    ///
    /// ```
    /// use chatstats::core::filter::UserFilter;
    /// use chatstats::parser::parse_transcript;
    ///
    /// let records = parse_transcript("1/1/24, 9:00 - Zoe: a\n1/1/24, 9:01 - Adam: b\n1/1/24, 9:02 - Zoe: c\n")?;
    /// let labels: Vec<String> = UserFilter::choices(&records).iter().map(|f| f.to_string()).collect();
    /// assert_eq!(labels, ["Overall", "Adam", "Zoe"]);
    /// # Ok::<(), chatstats::ChatStatsError>(())
    /// ```
    pub fn choices(records: &[ChatRecord]) -> Vec<UserFilter> {
        let authors: BTreeSet<&str> = records
            .iter()
            .filter(|r| !r.is_notification())
            .map(ChatRecord::author)
            .collect();

        std::iter::once(UserFilter::Overall)
            .chain(authors.into_iter().map(UserFilter::user))
            .collect()
    }

    /// Borrows the records passing the filter, in order.
    pub fn select<'a>(&'a self, records: &'a [ChatRecord]) -> impl Iterator<Item = &'a ChatRecord> {
        records.iter().filter(move |r| self.matches(r))
    }
}

impl fmt::Display for UserFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserFilter::Overall => f.write_str(OVERALL),
            UserFilter::User(name) => f.write_str(name),
        }
    }
}

/// Author filter plus an optional inclusive date range.
///
/// Filters are combined with AND logic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterConfig {
    /// Author selection.
    pub user: UserFilter,

    /// Include only records on or after this timestamp.
    pub after: Option<NaiveDateTime>,

    /// Include only records on or before this timestamp.
    pub before: Option<NaiveDateTime>,
}

impl FilterConfig {
    /// Creates a filter that selects everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the author filter.
    #[must_use]
    pub fn with_user(mut self, user: UserFilter) -> Self {
        self.user = user;
        self
    }

    /// Sets the start date (inclusive), format `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatStatsError::InvalidDate`] if the format is invalid.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self> {
        let start = parse_date(date_str)?
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| ChatStatsError::invalid_date(date_str))?;
        self.after = Some(start);
        Ok(self)
    }

    /// Sets the end date (inclusive, to the end of that day), format `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatStatsError::InvalidDate`] if the format is invalid.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self> {
        // End of the day to include the full day
        let end_of_day = parse_date(date_str)?
            .and_hms_nano_opt(23, 59, 59, 999_999_999)
            .ok_or_else(|| ChatStatsError::invalid_date(date_str))?;
        self.before = Some(end_of_day);
        Ok(self)
    }

    /// Returns `true` if a date range is set.
    pub fn has_date_filter(&self) -> bool {
        self.after.is_some() || self.before.is_some()
    }

    /// Returns `true` if any filter is active.
    pub fn is_active(&self) -> bool {
        !self.user.is_overall() || self.has_date_filter()
    }

    /// Returns `true` if the record falls inside the date range.
    pub fn in_date_range(&self, record: &ChatRecord) -> bool {
        let ts = record.timestamp();
        self.after.is_none_or(|after| ts >= after) && self.before.is_none_or(|before| ts <= before)
    }

    /// Returns `true` if the record passes every active filter.
    pub fn matches(&self, record: &ChatRecord) -> bool {
        self.user.matches(record) && self.in_date_range(record)
    }
}

fn parse_date(date_str: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| ChatStatsError::invalid_date(date_str))
}

/// Borrows the records passing every active filter, in transcript order.
pub fn apply_filters<'a>(records: &'a [ChatRecord], config: &FilterConfig) -> Vec<&'a ChatRecord> {
    records.iter().filter(|r| config.matches(r)).collect()
}
