//! Unified error types for chatstats.
//!
//! A single [`ChatStatsError`] enum covers every failure the library can
//! report. Only pipeline-level problems are errors: an empty transcript
//! yields an empty record collection, and a malformed record is dropped
//! and counted rather than aborting the parse.

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatstats operations.
///
/// # Example
///
/// ```rust
/// use chatstats::error::Result;
/// use chatstats::ChatRecord;
///
/// fn load() -> Result<Vec<ChatRecord>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatStatsError>;

/// The error type for all chatstats operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatStatsError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The transcript, stopword list or config file doesn't exist
    /// - Permission denied
    /// - Output cannot be written
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The uploaded bytes are not valid UTF-8.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// No candidate date format parses every timestamp of the transcript.
    ///
    /// The transcript is either corrupt or uses a date layout that is not
    /// supported. No partial record collection is produced.
    #[error(
        "Unrecognized chat format: no supported date format parses all {timestamps} timestamps (first: '{first}')"
    )]
    AmbiguousDateFormat {
        /// Number of timestamps found in the transcript
        timestamps: usize,
        /// First raw timestamp, for the error message
        first: String,
    },

    /// Invalid date in a date-range filter.
    ///
    /// Date filters expect YYYY-MM-DD format.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// JSON parsing/serialization error.
    ///
    /// Raised when loading a config file or serializing a report.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The word-cloud renderer failed.
    #[error("Word cloud rendering failed: {0}")]
    WordCloud(String),
}

impl From<std::string::FromUtf8Error> for ChatStatsError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatStatsError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatStatsError {
    /// Creates an ambiguous date format error.
    pub fn ambiguous_date_format(timestamps: usize, first: impl Into<String>) -> Self {
        ChatStatsError::AmbiguousDateFormat {
            timestamps,
            first: first.into(),
        }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        ChatStatsError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Creates a word-cloud rendering error.
    pub fn word_cloud(message: impl Into<String>) -> Self {
        ChatStatsError::WordCloud(message.into())
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatStatsError::Io(_))
    }

    /// Returns `true` if the transcript's date format could not be resolved.
    pub fn is_ambiguous_date_format(&self) -> bool {
        matches!(self, ChatStatsError::AmbiguousDateFormat { .. })
    }

    /// Returns `true` if this is a date-related filter error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, ChatStatsError::InvalidDate { .. })
    }
}
