//! Aggregations over a parsed record collection.
//!
//! Every aggregation is a pure function of `(records, user filter)` plus
//! whatever resource it needs (stopwords, media placeholder, URL detector,
//! emoji classifier). None of them mutate the collection, so any number can
//! run over the same records.
//!
//! [`Analyzer`] bundles the resources and builds a full [`Report`]:
//!
//! ```rust
//! use chatstats::analysis::{Analyzer, StopWords};
//! use chatstats::core::filter::{FilterConfig, UserFilter};
//! use chatstats::parser::parse_transcript;
//!
//! let records = parse_transcript(
//!     "1/1/24, 9:00 - Alice: hello world\n\
//!      1/1/24, 9:01 - Bob: hi\n\
//!      1/1/24, 9:02 - Alice: <Media omitted>\n",
//! )?;
//! let stopwords = StopWords::from_list("hi");
//! let analyzer = Analyzer::new(&stopwords);
//!
//! let report = analyzer.report(&records, &FilterConfig::new());
//! assert_eq!(report.stats.messages, 3);
//! assert_eq!(report.stats.media, 1);
//! assert_eq!(report.busiest_users[0].user, "Alice");
//! assert_eq!(report.heatmap.cells.len(), 7);
//!
//! let bob = analyzer.report(&records, &FilterConfig::new().with_user(UserFilter::user("Bob")));
//! assert_eq!(bob.stats.words, 1);
//! assert!(bob.frequent_words.is_empty());
//! # Ok::<(), chatstats::ChatStatsError>(())
//! ```

mod activity;
mod collaborators;
mod stats;
mod stopwords;
pub(crate) mod tally;
mod timeline;
mod users;
pub mod words;

pub use activity::{Heatmap, LabeledCount, activity_heatmap, month_activity, weekday_activity};
pub use collaborators::{
    EmojiClassifier, LinkUrlDetector, UnicodeEmoji, UrlDetector, WordCloudRenderer,
};
pub use stats::{ChatStats, chat_stats};
pub use stopwords::StopWords;
pub use timeline::{DailyCount, MonthlyCount, daily_timeline, monthly_timeline};
pub use users::{UserActivity, UserShare, busiest_users, user_share};
pub use words::{
    CorpusOptions, EmojiCount, WordCount, emoji_counts, frequent_words, prepare_corpus,
    render_word_cloud, word_cloud_input,
};

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

use crate::config::AnalysisConfig;
use crate::core::filter::{FilterConfig, UserFilter};
use crate::error::Result;
use crate::record::ChatRecord;

/// Every aggregation for one selection, ready to serialize.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Author selection the report was built for.
    pub user: UserFilter,
    pub stats: ChatStats,
    /// Top authors, only meaningful for the overall selection.
    pub busiest_users: Vec<UserActivity>,
    pub user_share: Vec<UserShare>,
    /// Top words after stopword removal.
    pub frequent_words: Vec<WordCount>,
    pub emoji_counts: Vec<EmojiCount>,
    pub monthly_timeline: Vec<MonthlyCount>,
    pub daily_timeline: Vec<DailyCount>,
    pub weekday_activity: Vec<LabeledCount>,
    pub month_activity: Vec<LabeledCount>,
    pub heatmap: Heatmap,
}

/// Aggregation entry point holding the shared resources.
///
/// The stopword list is borrowed so one loaded list can serve many
/// analyzers. URL detection and emoji classification default to
/// [`LinkUrlDetector`] and [`UnicodeEmoji`].
pub struct Analyzer<'a> {
    config: AnalysisConfig,
    stopwords: &'a StopWords,
    urls: Box<dyn UrlDetector + 'a>,
    emoji: Box<dyn EmojiClassifier + 'a>,
}

impl fmt::Debug for Analyzer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Analyzer")
            .field("config", &self.config)
            .field("stopwords", &self.stopwords.len())
            .finish_non_exhaustive()
    }
}

impl<'a> Analyzer<'a> {
    /// Creates an analyzer with the default configuration.
    pub fn new(stopwords: &'a StopWords) -> Self {
        Self::with_config(stopwords, AnalysisConfig::default())
    }

    /// Creates an analyzer with a custom configuration.
    pub fn with_config(stopwords: &'a StopWords, config: AnalysisConfig) -> Self {
        Self {
            config,
            stopwords,
            urls: Box::new(LinkUrlDetector),
            emoji: Box::new(UnicodeEmoji),
        }
    }

    /// Replaces the URL detector.
    #[must_use]
    pub fn with_url_detector(mut self, detector: impl UrlDetector + 'a) -> Self {
        self.urls = Box::new(detector);
        self
    }

    /// Replaces the emoji classifier.
    #[must_use]
    pub fn with_emoji_classifier(mut self, classifier: impl EmojiClassifier + 'a) -> Self {
        self.emoji = Box::new(classifier);
        self
    }

    /// Returns the configuration.
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    fn corpus(&self) -> CorpusOptions<'_> {
        CorpusOptions::new(self.stopwords, &self.config.media_placeholder)
    }

    /// Headline counters using the configured media placeholder and URL detector.
    pub fn stats(&self, records: &[ChatRecord], filter: &UserFilter) -> ChatStats {
        chat_stats(records, filter, &self.config.media_placeholder, &*self.urls)
    }

    /// Full word ranking with stopwords and media messages removed.
    pub fn frequent_words(&self, records: &[ChatRecord], filter: &UserFilter) -> Vec<WordCount> {
        frequent_words(records, filter, self.corpus())
    }

    /// Full emoji ranking using the configured emoji classifier.
    pub fn emoji_counts(&self, records: &[ChatRecord], filter: &UserFilter) -> Vec<EmojiCount> {
        emoji_counts(records, filter, self.corpus(), &*self.emoji)
    }

    /// Cleaned text the word cloud and word ranking are built from.
    pub fn prepare_corpus(&self, records: &[ChatRecord], filter: &UserFilter) -> String {
        prepare_corpus(records, filter, self.corpus())
    }

    /// Renders a word cloud with the configured layout.
    pub fn word_cloud<R: WordCloudRenderer + ?Sized>(
        &self,
        renderer: &R,
        records: &[ChatRecord],
        filter: &UserFilter,
    ) -> Result<R::Image> {
        render_word_cloud(renderer, records, filter, self.corpus(), &self.config.word_cloud)
    }

    /// Builds every aggregation for the selection in `filter`.
    ///
    /// The date range, if any, is applied first; the author selection is
    /// then passed to each aggregation.
    pub fn report(&self, records: &[ChatRecord], filter: &FilterConfig) -> Report {
        let scoped: Cow<'_, [ChatRecord]> = if filter.has_date_filter() {
            Cow::Owned(
                records
                    .iter()
                    .filter(|r| filter.in_date_range(r))
                    .cloned()
                    .collect(),
            )
        } else {
            Cow::Borrowed(records)
        };
        let records = scoped.as_ref();
        let user = &filter.user;

        tracing::debug!(records = records.len(), user = %user, "building report");

        let mut busiest = busiest_users(records, user);
        busiest.truncate(self.config.top_users);
        let mut words = self.frequent_words(records, user);
        words.truncate(self.config.top_words);

        Report {
            user: user.clone(),
            stats: self.stats(records, user),
            busiest_users: busiest,
            user_share: user_share(records, user),
            frequent_words: words,
            emoji_counts: self.emoji_counts(records, user),
            monthly_timeline: monthly_timeline(records, user),
            daily_timeline: daily_timeline(records, user),
            weekday_activity: weekday_activity(records, user),
            month_activity: month_activity(records, user),
            heatmap: activity_heatmap(records, user),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_transcript;

    const CHAT: &str = "1/1/24, 9:00 - Alice: hello world\n\
                        1/2/24, 9:01 - Bob: hello there https://x.io\n\
                        2/3/24, 22:30 - Alice: <Media omitted>\n\
                        2/4/24, 23:15 - Carol: 😀 again\n";

    #[test]
    fn test_report_overall() {
        let records = parse_transcript(CHAT).unwrap();
        let stopwords = StopWords::empty();
        let report = Analyzer::new(&stopwords).report(&records, &FilterConfig::new());

        assert_eq!(report.user, UserFilter::Overall);
        assert_eq!(report.stats.messages, 4);
        assert_eq!(report.stats.media, 1);
        assert_eq!(report.stats.links, 1);
        assert_eq!(report.busiest_users[0].user, "Alice");
        assert_eq!(report.frequent_words[0].word, "hello");
        assert_eq!(report.emoji_counts.len(), 1);
        assert_eq!(report.monthly_timeline.len(), 2);
        assert_eq!(report.daily_timeline.len(), 4);
        assert_eq!(report.weekday_activity.len(), 7);
        assert_eq!(report.month_activity.len(), 12);
        assert_eq!(report.heatmap.total(), 4);
    }

    #[test]
    fn test_report_truncates_tables() {
        let records = parse_transcript(CHAT).unwrap();
        let stopwords = StopWords::empty();
        let config = AnalysisConfig::new().with_top_words(2).with_top_users(1);
        let report = Analyzer::with_config(&stopwords, config).report(&records, &FilterConfig::new());

        assert_eq!(report.frequent_words.len(), 2);
        assert_eq!(report.busiest_users.len(), 1);
        assert_eq!(report.user_share.len(), 3);
    }

    #[test]
    fn test_report_date_range() {
        let records = parse_transcript(CHAT).unwrap();
        let stopwords = StopWords::empty();
        let filter = FilterConfig::new().with_date_from("2024-02-01").unwrap();
        let report = Analyzer::new(&stopwords).report(&records, &filter);

        assert_eq!(report.stats.messages, 2);
        assert_eq!(report.monthly_timeline.len(), 1);
        assert_eq!(report.monthly_timeline[0].label, "February-2024");
    }

    #[test]
    fn test_custom_collaborators() {
        struct NoUrls;
        impl UrlDetector for NoUrls {
            fn find_urls<'t>(&self, _: &'t str) -> Vec<&'t str> {
                Vec::new()
            }
        }

        let records = parse_transcript(CHAT).unwrap();
        let stopwords = StopWords::empty();
        let analyzer = Analyzer::new(&stopwords)
            .with_url_detector(NoUrls)
            .with_emoji_classifier(|c: char| c == 'o');

        assert_eq!(analyzer.stats(&records, &UserFilter::Overall).links, 0);
        let emojis = analyzer.emoji_counts(&records, &UserFilter::Overall);
        assert_eq!(emojis[0].emoji, 'o');
    }

    #[test]
    fn test_corpus_and_words_use_stopwords() {
        let records = parse_transcript(CHAT).unwrap();
        let stopwords = StopWords::from_list("there");
        let analyzer = Analyzer::new(&stopwords);

        let alice = UserFilter::user("Alice");
        assert_eq!(analyzer.prepare_corpus(&records, &alice), "hello world");

        let words = analyzer.frequent_words(&records, &UserFilter::Overall);
        assert_eq!(words[0], WordCount { word: "hello".to_string(), count: 2 });
        assert!(words.iter().all(|w| w.word != "there"));
    }

    #[test]
    fn test_report_serializes() {
        let records = parse_transcript(CHAT).unwrap();
        let stopwords = StopWords::empty();
        let report = Analyzer::new(&stopwords).report(&records, &FilterConfig::new());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["user"], "overall");
        assert_eq!(json["stats"]["messages"], 4);
        assert_eq!(json["heatmap"]["columns"][0], "0-1");
    }
}
