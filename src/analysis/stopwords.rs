//! Stopword list resource.
//!
//! The list is loaded once by the caller and passed by reference into every
//! word-based aggregation.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::Result;

/// Set of lower-case words excluded from word and emoji tables.
///
/// ```
/// use chatstats::analysis::StopWords;
///
/// let stopwords = StopWords::from_list("the a\nAND");
/// assert!(stopwords.contains("and"));
/// assert!(!stopwords.contains("rust"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// An empty list; nothing is filtered.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds the set from whitespace-delimited tokens.
    pub fn from_list(list: &str) -> Self {
        list.split_whitespace().collect()
    }

    /// Reads a word list file (whitespace-delimited, UTF-8).
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let stopwords = Self::from_list(&content);
        tracing::debug!(path = %path.display(), words = stopwords.len(), "loaded stopwords");
        Ok(stopwords)
    }

    /// Returns `true` if `word` (already lower-case) is a stopword.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct stopwords.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for StopWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }
}
