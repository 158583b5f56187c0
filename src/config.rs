//! Configuration types for parsing and analysis.
//!
//! Plain serde structs with builder methods, usable without any CLI
//! framework:
//!
//! - [`ParserConfig`] - transcript parsing settings
//! - [`AnalysisConfig`] - aggregation and report settings
//! - [`WordCloudOptions`] - layout options handed to the word-cloud renderer
//!
//! # Example
//!
//! ```rust
//! use chatstats::config::{AnalysisConfig, WordCloudOptions};
//!
//! let config = AnalysisConfig::new()
//!     .with_top_words(20)
//!     .with_word_cloud(WordCloudOptions::new().with_size(1024, 768));
//!
//! assert_eq!(config.top_words, 20);
//! assert_eq!(config.word_cloud.width, 1024);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Body text WhatsApp writes in place of an attachment.
pub const DEFAULT_MEDIA_PLACEHOLDER: &str = "<Media omitted>";

/// Configuration for transcript parsing.
///
/// # Example
///
/// ```rust
/// use chatstats::config::ParserConfig;
///
/// let config = ParserConfig::new().with_skip_notifications(false);
/// assert!(!config.skip_notifications);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Drop group notifications from the record collection (default: true)
    pub skip_notifications: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            skip_notifications: true,
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether group notifications are removed.
    #[must_use]
    pub fn with_skip_notifications(mut self, skip: bool) -> Self {
        self.skip_notifications = skip;
        self
    }
}

/// Layout options for the word-cloud renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordCloudOptions {
    /// Canvas width in pixels (default: 700)
    pub width: u32,
    /// Canvas height in pixels (default: 500)
    pub height: u32,
    /// Smallest font size (default: 2)
    pub min_font_size: u32,
    /// Largest font size (default: 100)
    pub max_font_size: u32,
    /// Maximum number of words drawn (default: 150)
    pub max_words: usize,
    /// Background color (default: "black")
    pub background_color: String,
    /// Margin around words in pixels (default: 10)
    pub margin: u32,
    /// Color scheme name (default: "viridis")
    pub color_scheme: String,
}

impl Default for WordCloudOptions {
    fn default() -> Self {
        Self {
            width: 700,
            height: 500,
            min_font_size: 2,
            max_font_size: 100,
            max_words: 150,
            background_color: "black".to_string(),
            margin: 10,
            color_scheme: "viridis".to_string(),
        }
    }
}

impl WordCloudOptions {
    /// Creates options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the canvas size.
    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the font-size bounds.
    #[must_use]
    pub fn with_font_sizes(mut self, min: u32, max: u32) -> Self {
        self.min_font_size = min;
        self.max_font_size = max;
        self
    }

    /// Sets the maximum number of words.
    #[must_use]
    pub fn with_max_words(mut self, max_words: usize) -> Self {
        self.max_words = max_words;
        self
    }

    /// Sets the color scheme.
    #[must_use]
    pub fn with_color_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.color_scheme = scheme.into();
        self
    }
}

/// Configuration for aggregation and report building.
///
/// Ranking functions always return full rankings; `top_words` and
/// `top_users` only truncate what goes into a [`Report`](crate::analysis::Report).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Exact message body marking a media message (default: "<Media omitted>")
    pub media_placeholder: String,
    /// Words kept in a report's frequent-word table (default: 10)
    pub top_words: usize,
    /// Authors kept in a report's busiest-user table (default: 10)
    pub top_users: usize,
    /// Word-cloud layout
    pub word_cloud: WordCloudOptions,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            media_placeholder: DEFAULT_MEDIA_PLACEHOLDER.to_string(),
            top_words: 10,
            top_users: 10,
            word_cloud: WordCloudOptions::default(),
        }
    }
}

impl AnalysisConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a configuration from a JSON file. Missing keys keep defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Sets the media placeholder body.
    #[must_use]
    pub fn with_media_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.media_placeholder = placeholder.into();
        self
    }

    /// Sets the number of words kept in reports.
    #[must_use]
    pub fn with_top_words(mut self, n: usize) -> Self {
        self.top_words = n;
        self
    }

    /// Sets the number of authors kept in reports.
    #[must_use]
    pub fn with_top_users(mut self, n: usize) -> Self {
        self.top_users = n;
        self
    }

    /// Sets the word-cloud layout.
    #[must_use]
    pub fn with_word_cloud(mut self, options: WordCloudOptions) -> Self {
        self.word_cloud = options;
        self
    }
}
