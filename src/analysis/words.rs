//! Word, emoji and word-cloud tables.
//!
//! All three are built from the same corpus: every in-scope message except
//! media placeholders, lower-cased, split on whitespace, with stopwords
//! removed.

use serde::Serialize;

use crate::analysis::StopWords;
use crate::analysis::collaborators::{EmojiClassifier, WordCloudRenderer};
use crate::analysis::tally::Tally;
use crate::config::WordCloudOptions;
use crate::core::filter::UserFilter;
use crate::error::Result;
use crate::record::ChatRecord;

/// Inputs shared by the corpus-based tables.
#[derive(Debug, Clone, Copy)]
pub struct CorpusOptions<'a> {
    /// Words dropped from the corpus.
    pub stopwords: &'a StopWords,
    /// Exact body of media messages, which are left out entirely.
    pub media_placeholder: &'a str,
}

impl<'a> CorpusOptions<'a> {
    /// Creates corpus options.
    pub fn new(stopwords: &'a StopWords, media_placeholder: &'a str) -> Self {
        Self {
            stopwords,
            media_placeholder,
        }
    }
}

/// One row of a word-frequency table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// One row of the emoji table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmojiCount {
    pub emoji: char,
    pub count: usize,
}

/// Builds the stopword-filtered corpus as one space-joined string.
///
/// ```
/// use chatstats::analysis::{CorpusOptions, StopWords};
/// use chatstats::analysis::words::prepare_corpus;
/// use chatstats::core::filter::UserFilter;
/// use chatstats::parser::parse_transcript;
///
/// let records = parse_transcript(
///     "1/1/24, 9:00 - Alice: The Cat sat\n1/1/24, 9:01 - Bob: <Media omitted>\n",
/// )?;
/// let stopwords = StopWords::from_list("the");
/// let corpus = prepare_corpus(
///     &records,
///     &UserFilter::Overall,
///     CorpusOptions::new(&stopwords, "<Media omitted>"),
/// );
/// assert_eq!(corpus, "cat sat");
/// # Ok::<(), chatstats::ChatStatsError>(())
/// ```
pub fn prepare_corpus(records: &[ChatRecord], filter: &UserFilter, options: CorpusOptions<'_>) -> String {
    corpus_words(records, filter, options).collect::<Vec<_>>().join(" ")
}

fn corpus_words<'r>(
    records: &'r [ChatRecord],
    filter: &'r UserFilter,
    options: CorpusOptions<'r>,
) -> impl Iterator<Item = String> + 'r {
    filter
        .select(records)
        .filter(move |r| r.message() != options.media_placeholder)
        .flat_map(|r| {
            r.message()
                .to_lowercase()
                .split_whitespace()
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .filter(move |word| !options.stopwords.contains(word))
}

/// Word-frequency table, descending by count, ties in first-seen order.
///
/// Returns the full ranking; truncation is up to the caller.
pub fn frequent_words(
    records: &[ChatRecord],
    filter: &UserFilter,
    options: CorpusOptions<'_>,
) -> Vec<WordCount> {
    corpus_words(records, filter, options)
        .collect::<Tally<String>>()
        .into_ranked()
        .into_iter()
        .map(|(word, count)| WordCount { word, count })
        .collect()
}

/// Emoji table over the characters of the corpus, descending by count.
pub fn emoji_counts(
    records: &[ChatRecord],
    filter: &UserFilter,
    options: CorpusOptions<'_>,
    classifier: &dyn EmojiClassifier,
) -> Vec<EmojiCount> {
    corpus_words(records, filter, options)
        .flat_map(|word| word.chars().collect::<Vec<_>>())
        .filter(|c| classifier.is_emoji(*c))
        .collect::<Tally<char>>()
        .into_ranked()
        .into_iter()
        .map(|(emoji, count)| EmojiCount { emoji, count })
        .collect()
}

/// Frequency table handed to a word-cloud renderer, capped at `max_words`.
pub fn word_cloud_input(
    records: &[ChatRecord],
    filter: &UserFilter,
    options: CorpusOptions<'_>,
    max_words: usize,
) -> Vec<WordCount> {
    let mut words = frequent_words(records, filter, options);
    words.truncate(max_words);
    words
}

/// Builds the word-cloud table and passes it to `renderer`.
pub fn render_word_cloud<R: WordCloudRenderer + ?Sized>(
    renderer: &R,
    records: &[ChatRecord],
    filter: &UserFilter,
    options: CorpusOptions<'_>,
    layout: &WordCloudOptions,
) -> Result<R::Image> {
    let frequencies = word_cloud_input(records, filter, options, layout.max_words);
    tracing::debug!(words = frequencies.len(), "rendering word cloud");
    renderer.render(&frequencies, layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::UnicodeEmoji;
    use crate::error::ChatStatsError;
    use crate::parser::parse_transcript;

    const MEDIA: &str = "<Media omitted>";

    fn records() -> Vec<ChatRecord> {
        parse_transcript(
            "1/1/24, 9:00 - Alice: Hello hello world 😀\n\
             1/1/24, 9:01 - Bob: <Media omitted>\n\
             1/1/24, 9:02 - Bob: the world is big 😀🎉\n\
             1/1/24, 9:03 - Alice: The END\n",
        )
        .unwrap()
    }

    #[test]
    fn test_prepare_corpus() {
        let stopwords = StopWords::from_list("the is");
        let corpus = prepare_corpus(&records(), &UserFilter::Overall, CorpusOptions::new(&stopwords, MEDIA));
        assert_eq!(corpus, "hello hello world 😀 world big 😀🎉 end");
    }

    #[test]
    fn test_frequent_words_ranking() {
        let stopwords = StopWords::from_list("the is");
        let words = frequent_words(&records(), &UserFilter::Overall, CorpusOptions::new(&stopwords, MEDIA));

        assert_eq!(words[0], WordCount { word: "hello".into(), count: 2 });
        assert_eq!(words[1], WordCount { word: "world".into(), count: 2 });
        // media placeholder never reaches the table
        assert!(words.iter().all(|w| !w.word.contains("media")));
        // ties after the top keep first-seen order
        let rest: Vec<_> = words[2..].iter().map(|w| w.word.as_str()).collect();
        assert_eq!(rest, ["😀", "big", "😀🎉", "end"]);
    }

    #[test]
    fn test_frequent_words_per_user() {
        let stopwords = StopWords::empty();
        let words = frequent_words(&records(), &UserFilter::user("Bob"), CorpusOptions::new(&stopwords, MEDIA));
        let list: Vec<_> = words.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(list, ["the", "world", "is", "big", "😀🎉"]);
    }

    #[test]
    fn test_emoji_counts() {
        let stopwords = StopWords::empty();
        let emojis = emoji_counts(
            &records(),
            &UserFilter::Overall,
            CorpusOptions::new(&stopwords, MEDIA),
            &UnicodeEmoji,
        );
        assert_eq!(
            emojis,
            vec![
                EmojiCount { emoji: '😀', count: 2 },
                EmojiCount { emoji: '🎉', count: 1 },
            ]
        );
    }

    #[test]
    fn test_empty_tables() {
        let stopwords = StopWords::empty();
        let options = CorpusOptions::new(&stopwords, MEDIA);
        assert!(frequent_words(&[], &UserFilter::Overall, options).is_empty());
        assert!(emoji_counts(&[], &UserFilter::Overall, options, &UnicodeEmoji).is_empty());
        assert_eq!(prepare_corpus(&[], &UserFilter::Overall, options), "");
    }

    struct CountingRenderer;

    impl WordCloudRenderer for CountingRenderer {
        type Image = (u32, u32, usize);

        fn render(&self, frequencies: &[WordCount], options: &WordCloudOptions) -> Result<Self::Image> {
            Ok((options.width, options.height, frequencies.len()))
        }
    }

    struct FailingRenderer;

    impl WordCloudRenderer for FailingRenderer {
        type Image = ();

        fn render(&self, _: &[WordCount], _: &WordCloudOptions) -> Result<()> {
            Err(ChatStatsError::word_cloud("no fonts"))
        }
    }

    #[test]
    fn test_render_word_cloud_respects_max_words() {
        let stopwords = StopWords::empty();
        let layout = WordCloudOptions::new().with_max_words(3);
        let image = render_word_cloud(
            &CountingRenderer,
            &records(),
            &UserFilter::Overall,
            CorpusOptions::new(&stopwords, MEDIA),
            &layout,
        )
        .unwrap();
        assert_eq!(image, (700, 500, 3));
    }

    #[test]
    fn test_render_word_cloud_error_propagates() {
        let stopwords = StopWords::empty();
        let err = render_word_cloud(
            &FailingRenderer,
            &records(),
            &UserFilter::Overall,
            CorpusOptions::new(&stopwords, MEDIA),
            &WordCloudOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ChatStatsError::WordCloud(_)));
    }
}
