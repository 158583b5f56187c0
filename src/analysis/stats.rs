//! Headline counters: messages, words, media and links.

use serde::Serialize;

use crate::analysis::collaborators::UrlDetector;
use crate::core::filter::UserFilter;
use crate::record::ChatRecord;

/// Headline counters for one selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ChatStats {
    /// Messages in scope.
    pub messages: usize,
    /// Whitespace-separated tokens over all messages in scope.
    pub words: usize,
    /// Messages whose body is exactly the media placeholder.
    pub media: usize,
    /// URLs found by the detector over all messages in scope.
    pub links: usize,
}

/// Computes the headline counters.
///
/// Media messages count toward `messages` and `words` like any other body.
///
/// ```
/// use chatstats::analysis::{LinkUrlDetector, chat_stats};
/// use chatstats::core::filter::UserFilter;
/// use chatstats::parser::parse_transcript;
///
/// let records = parse_transcript(
///     "1/1/24, 9:00 - Alice: see https://example.com\n1/1/24, 9:01 - Bob: <Media omitted>\n",
/// )?;
/// let stats = chat_stats(&records, &UserFilter::Overall, "<Media omitted>", &LinkUrlDetector);
///
/// assert_eq!(stats.messages, 2);
/// assert_eq!(stats.words, 4);
/// assert_eq!(stats.media, 1);
/// assert_eq!(stats.links, 1);
/// # Ok::<(), chatstats::ChatStatsError>(())
/// ```
pub fn chat_stats(
    records: &[ChatRecord],
    filter: &UserFilter,
    media_placeholder: &str,
    urls: &dyn UrlDetector,
) -> ChatStats {
    filter
        .select(records)
        .fold(ChatStats::default(), |mut stats, record| {
            let message = record.message();
            stats.messages += 1;
            stats.words += message.split_whitespace().count();
            if message == media_placeholder {
                stats.media += 1;
            }
            stats.links += urls.find_urls(message).len();
            stats
        })
}
