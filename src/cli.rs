//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`OutputFormat`] - Report format options
//!
//! ```rust
//! use chatstats::cli::{Args, OutputFormat};
//! use clap::Parser;
//!
//! let args = Args::try_parse_from(["chatstats", "chat.txt", "--format", "json"]).unwrap();
//! assert_eq!(args.format, OutputFormat::Json);
//! assert_eq!(args.format.to_string(), "JSON");
//! ```

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::core::filter::{FilterConfig, UserFilter};
use crate::error::Result;

/// Activity statistics for exported WhatsApp-style chat transcripts.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatstats")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatstats chat.txt
    chatstats chat.txt --user Alice --stopwords stop_hinglish.txt
    chatstats chat.txt --format json -o report.json
    chatstats chat.txt --after 2024-01-01 --records records.csv")]
pub struct Args {
    /// Path to the exported transcript (UTF-8 text)
    pub input: PathBuf,

    /// Analyze a single participant instead of the whole chat
    #[arg(short, long, value_name = "NAME")]
    pub user: Option<String>,

    /// Whitespace-delimited stopword list
    #[arg(short, long, value_name = "FILE")]
    pub stopwords: Option<PathBuf>,

    /// JSON analysis configuration
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Only include messages on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Only include messages on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Report format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Also write the parsed records as CSV
    #[arg(long, value_name = "FILE")]
    pub records: Option<PathBuf>,

    /// List participants and exit
    #[arg(long)]
    pub list_users: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Builds the record filter from `--user`, `--after` and `--before`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatStatsError::InvalidDate`](crate::ChatStatsError::InvalidDate)
    /// for a malformed date.
    pub fn filter_config(&self) -> Result<FilterConfig> {
        let mut config = FilterConfig::new();
        if let Some(ref user) = self.user {
            config = config.with_user(UserFilter::from_selection(user));
        }
        if let Some(ref after) = self.after {
            config = config.with_date_from(after)?;
        }
        if let Some(ref before) = self.before {
            config = config.with_date_to(before)?;
        }
        Ok(config)
    }
}

/// Report format options.
///
/// - [`Text`](OutputFormat::Text) - human-readable summary tables
/// - [`Json`](OutputFormat::Json) - the full report, pretty-printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default)]
pub enum OutputFormat {
    /// Plain-text summary (default)
    #[default]
    Text,

    /// Full report as JSON
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "Text"),
            OutputFormat::Json => write!(f, "JSON"),
        }
    }
}
