//! Transcript tokenizer.
//!
//! Splits a raw transcript into `(timestamp, body)` pairs. A record boundary
//! is a timestamp prefix such as `12/1/23, 9:05 AM - `; newlines alone never
//! split a record, so multi-line messages stay in one body.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// Narrow no-break space some exports put between the time and `AM`/`PM`.
pub const NARROW_NO_BREAK_SPACE: char = '\u{202f}';

/// Timestamp-and-separator prefix of a transcript entry.
///
/// Accepts day/month or month/day dates with 2- or 4-digit years, year-first
/// dates with a 4-digit year, 12-hour (with meridiem) or 24-hour clocks and
/// optional seconds.
pub const TIMESTAMP_PATTERN: &str = r"(?:\d{1,2}/\d{1,2}/\d{2,4}|\d{4}/\d{1,2}/\d{1,2}),\s(?:[01]?\d|2[0-3]):[0-5]\d(?::[0-5]\d)?(?:\s[APap][Mm])?\s-\s";

static TIMESTAMP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(TIMESTAMP_PATTERN).expect("timestamp pattern is valid"));

/// One transcript entry before date resolution and author extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawSegment<'a> {
    /// Matched prefix, separator included (e.g. `"12/1/23, 9:05 AM - "`).
    pub raw_timestamp: &'a str,
    /// Everything up to the next timestamp, line terminators included.
    pub raw_body: &'a str,
}

/// Replaces narrow no-break spaces with ordinary spaces.
///
/// Borrows the input when there is nothing to replace.
pub fn normalize_spaces(text: &str) -> Cow<'_, str> {
    if text.contains(NARROW_NO_BREAK_SPACE) {
        Cow::Owned(text.replace(NARROW_NO_BREAK_SPACE, " "))
    } else {
        Cow::Borrowed(text)
    }
}

/// Splits normalized transcript text into raw segments.
///
/// Text before the first timestamp is preamble and is discarded. Returns an
/// empty vector when no timestamp is found.
pub fn segment_transcript(text: &str) -> Vec<RawSegment<'_>> {
    let timestamps = TIMESTAMP_RE.find_iter(text).map(|m| m.as_str());
    let bodies = TIMESTAMP_RE.split(text).skip(1);

    timestamps
        .zip(bodies)
        .map(|(raw_timestamp, raw_body)| RawSegment {
            raw_timestamp,
            raw_body,
        })
        .collect()
}
