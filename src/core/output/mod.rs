//! Output writers.
//!
//! - [`write_json`] / [`to_json`] - pretty JSON of any serializable value,
//!   typically a [`Report`](crate::analysis::Report) or a record slice
//! - [`write_csv`] / [`to_csv`] - parsed records as a semicolon-delimited
//!   table - requires `csv-output` feature
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(feature = "csv-output")]
//! # fn main() -> chatstats::Result<()> {
//! use chatstats::analysis::{Analyzer, StopWords};
//! use chatstats::core::filter::FilterConfig;
//! use chatstats::core::output::{write_csv, write_json};
//! use chatstats::parser::TranscriptParser;
//!
//! let parsed = TranscriptParser::new().parse("chat.txt".as_ref())?;
//! let stopwords = StopWords::load("stop_hinglish.txt")?;
//! let report = Analyzer::new(&stopwords).report(parsed.records(), &FilterConfig::new());
//!
//! write_json(&report, "report.json")?;
//! write_csv(parsed.records(), "records.csv")?;
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "csv-output"))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
mod json_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
pub use json_writer::{to_json, write_json};
