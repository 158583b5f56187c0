//! Transcript parsing pipeline.
//!
//! [`TranscriptParser`] runs the three parsing stages in order:
//!
//! 1. normalize narrow no-break spaces and split the text into raw segments
//! 2. resolve one date format for the full timestamp set
//! 3. split each body into author and message, building [`ChatRecord`]s
//!
//! The whole transcript is parsed in memory in one pass.
//!
//! # Example
//!
//! ```rust
//! use chatstats::parser::TranscriptParser;
//!
//! let transcript = "12/1/23, 9:05 AM - Alice: hello\n\
//!                   12/1/23, 9:06 AM - Bob: hi there\n\
//!                   12/1/23, 9:07 AM - Alice added Bob\n";
//!
//! let parsed = TranscriptParser::new().parse_str(transcript)?;
//!
//! assert_eq!(parsed.len(), 2);
//! assert_eq!(parsed.summary().notifications, 1);
//! assert_eq!(parsed.records()[1].author(), "Bob");
//! # Ok::<(), chatstats::ChatStatsError>(())
//! ```

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::config::ParserConfig;
use crate::error::{ChatStatsError, Result};
use crate::parsing::{
    BodyKind, DateFormat, classify_body, normalize_spaces, resolve_timestamps, segment_transcript,
};
use crate::record::ChatRecord;

/// Counters describing one parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseSummary {
    /// Timestamp matches found in the transcript.
    pub segments: usize,
    /// Segments without an author prefix.
    pub notifications: usize,
    /// Segments dropped because their author prefix was unusable.
    pub malformed: usize,
    /// Resolved date format, `None` for an empty transcript.
    pub date_format: Option<DateFormat>,
}

/// Result of parsing one transcript.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedTranscript {
    records: Vec<ChatRecord>,
    summary: ParseSummary,
}

impl ParsedTranscript {
    /// Returns the records in transcript order.
    pub fn records(&self) -> &[ChatRecord] {
        &self.records
    }

    /// Consumes the transcript, returning its records.
    pub fn into_records(self) -> Vec<ChatRecord> {
        self.records
    }

    /// Returns the parse counters.
    pub fn summary(&self) -> &ParseSummary {
        &self.summary
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if no record was produced.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Parser for timestamp-prefixed chat exports.
///
/// # Example
///
/// ```rust,no_run
/// use chatstats::parser::TranscriptParser;
///
/// let parsed = TranscriptParser::new().parse("chat.txt".as_ref())?;
/// println!("{} messages", parsed.len());
/// # Ok::<(), chatstats::ChatStatsError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct TranscriptParser {
    config: ParserConfig,
}

impl TranscriptParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Reads and parses a transcript file.
    pub fn parse(&self, path: &Path) -> Result<ParsedTranscript> {
        let bytes = fs::read(path)?;
        self.parse_bytes(bytes)
    }

    /// Parses uploaded bytes, which must be UTF-8.
    pub fn parse_bytes(&self, bytes: Vec<u8>) -> Result<ParsedTranscript> {
        let content = String::from_utf8(bytes).map_err(|source| ChatStatsError::Utf8 {
            context: "transcript".to_string(),
            source,
        })?;
        self.parse_str(&content)
    }

    /// Parses transcript text.
    ///
    /// A transcript without any timestamp yields an empty result.
    ///
    /// # Errors
    ///
    /// Returns [`ChatStatsError::AmbiguousDateFormat`] if no supported date
    /// format parses every timestamp. No partial result is returned.
    pub fn parse_str(&self, content: &str) -> Result<ParsedTranscript> {
        let normalized = normalize_spaces(content);
        let segments = segment_transcript(&normalized);
        tracing::debug!(segments = segments.len(), "segmented transcript");

        let raw_timestamps: Vec<&str> = segments.iter().map(|s| s.raw_timestamp).collect();
        let resolved = resolve_timestamps(&raw_timestamps)?;

        let mut summary = ParseSummary {
            segments: segments.len(),
            date_format: resolved.format,
            ..ParseSummary::default()
        };
        let mut records = Vec::with_capacity(segments.len());

        for (segment, timestamp) in segments.iter().zip(resolved.timestamps) {
            match classify_body(segment.raw_body) {
                BodyKind::Authored { author, message } => {
                    records.push(ChatRecord::new(timestamp, author, message));
                }
                BodyKind::Notification { message } => {
                    summary.notifications += 1;
                    if !self.config.skip_notifications {
                        records.push(ChatRecord::notification(timestamp, message));
                    }
                }
                BodyKind::Malformed { reason } => {
                    summary.malformed += 1;
                    tracing::warn!(%timestamp, reason, "dropping malformed record");
                }
            }
        }

        tracing::debug!(
            records = records.len(),
            notifications = summary.notifications,
            malformed = summary.malformed,
            "built records"
        );

        Ok(ParsedTranscript { records, summary })
    }
}

/// Parses transcript text with the default configuration.
pub fn parse_transcript(content: &str) -> Result<Vec<ChatRecord>> {
    TranscriptParser::new()
        .parse_str(content)
        .map(ParsedTranscript::into_records)
}
