//! # Chatstats
//!
//! A Rust library for turning exported WhatsApp-style chat transcripts into
//! activity statistics ready for charting.
//!
//! ## Overview
//!
//! A transcript is plain text where every message starts with a timestamp
//! prefix such as `12/1/23, 9:05 AM - `. Chatstats:
//!
//! 1. splits the text into timestamped segments (multi-line messages stay
//!    whole)
//! 2. resolves one date format for the whole transcript (US or European
//!    ordering, 2- or 4-digit years, 12h or 24h clock)
//! 3. separates the author from the message and drops group notifications
//! 4. derives calendar fields (weekday, month name, hour bucket, ...) per
//!    record
//!
//! The resulting [`ChatRecord`] collection is immutable and shared by every
//! aggregation in [`analysis`].
//!
//! ## Quick Start
//!
//! ```rust
//! use chatstats::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let transcript = "12/1/23, 9:05 AM - Alice: hello\n\
//!                       12/1/23, 9:06 AM - Bob: hi there\n\
//!                       12/1/23, 9:07 AM - Alice added Bob\n";
//!
//!     let parsed = TranscriptParser::new().parse_str(transcript)?;
//!     let stopwords = StopWords::empty();
//!     let report = Analyzer::new(&stopwords).report(parsed.records(), &FilterConfig::new());
//!
//!     assert_eq!(report.stats.messages, 2);
//!     assert_eq!(report.busiest_users[0].user, "Alice");
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`TranscriptParser`](parser::TranscriptParser), the parsing entry point
//! - [`parsing`] - segmenter, date-format resolver and author classification
//! - [`record`] - [`ChatRecord`] and its derived [`CalendarFields`](record::CalendarFields)
//! - [`analysis`] - aggregations, injected collaborators and [`Report`](analysis::Report)
//! - [`core`] - user and date filters ([`core::filter`]), JSON/CSV writers ([`core::output`])
//! - [`config`] - parser and analysis configuration
//! - [`error`] - unified error types ([`ChatStatsError`], [`Result`])
//! - [`cli`] - CLI argument types (feature `cli`)
//! - [`prelude`] - convenient re-exports

pub mod analysis;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod parser;
pub mod parsing;
pub mod record;

// Re-export the main types at the crate root for convenience
pub use error::{ChatStatsError, Result};
pub use record::ChatRecord;

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatstats::prelude::*;
/// ```
pub mod prelude {
    // Core record type
    pub use crate::ChatRecord;

    // Error types
    pub use crate::error::{ChatStatsError, Result};

    // Parsing
    pub use crate::parser::{ParseSummary, ParsedTranscript, TranscriptParser, parse_transcript};

    // Configuration
    pub use crate::config::{AnalysisConfig, ParserConfig, WordCloudOptions};

    // Filtering
    pub use crate::core::filter::{FilterConfig, UserFilter, apply_filters};

    // Analysis
    pub use crate::analysis::{
        Analyzer, EmojiClassifier, Report, StopWords, UrlDetector, WordCloudRenderer,
    };

    // Output (file writers and string converters)
    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    pub use crate::core::output::{to_json, write_json};
}
