//! Injected capabilities used by the aggregations.
//!
//! URL detection, emoji classification and word-cloud rendering are
//! strategies supplied by the caller. The defaults here are good enough for
//! chat text and can be swapped per `Analyzer`.

use std::sync::LazyLock;

use linkify::{LinkFinder, LinkKind};

use crate::analysis::words::WordCount;
use crate::config::WordCloudOptions;
use crate::error::Result;

/// Finds URL spans in a message body.
pub trait UrlDetector {
    /// Returns every URL in `text`, in order of appearance.
    fn find_urls<'t>(&self, text: &'t str) -> Vec<&'t str>;
}

/// Decides whether a single character is an emoji.
pub trait EmojiClassifier {
    /// Returns `true` if `c` is an emoji code point.
    fn is_emoji(&self, c: char) -> bool;
}

impl<F> EmojiClassifier for F
where
    F: Fn(char) -> bool,
{
    fn is_emoji(&self, c: char) -> bool {
        self(c)
    }
}

/// Turns a word-frequency table into an image.
///
/// The renderer is opaque to this crate; it receives the table (already
/// truncated to `options.max_words`) and the layout options.
pub trait WordCloudRenderer {
    /// Rendered output, typically a raster image.
    type Image;

    /// Renders the frequency table.
    fn render(&self, frequencies: &[WordCount], options: &WordCloudOptions) -> Result<Self::Image>;
}

static URL_FINDER: LazyLock<LinkFinder> = LazyLock::new(|| {
    let mut finder = LinkFinder::new();
    finder.url_must_have_scheme(false);
    finder.kinds(&[LinkKind::Url]);
    finder
});

/// Link detector for `http(s)://` URLs and bare domains such as `example.com`.
///
/// Trailing sentence punctuation is not part of the URL; balanced
/// parentheses inside a URL are kept.
///
/// ```
/// use chatstats::analysis::{LinkUrlDetector, UrlDetector};
///
/// let urls = LinkUrlDetector.find_urls("see https://example.com/a, and www.rust-lang.org.");
/// assert_eq!(urls, ["https://example.com/a", "www.rust-lang.org"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkUrlDetector;

impl UrlDetector for LinkUrlDetector {
    fn find_urls<'t>(&self, text: &'t str) -> Vec<&'t str> {
        URL_FINDER.links(text).map(|link| link.as_str()).collect()
    }
}

/// Emoji classifier based on the Unicode emoji blocks.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeEmoji;

impl EmojiClassifier for UnicodeEmoji {
    fn is_emoji(&self, c: char) -> bool {
        matches!(
            u32::from(c),
            0x00A9 | 0x00AE
            | 0x203C | 0x2049
            | 0x2122 | 0x2139
            | 0x2194..=0x2199   // arrows
            | 0x21A9..=0x21AA
            | 0x231A..=0x231B
            | 0x2328 | 0x23CF
            | 0x23E9..=0x23F3
            | 0x23F8..=0x23FA
            | 0x24C2
            | 0x25AA..=0x25AB
            | 0x25B6 | 0x25C0
            | 0x25FB..=0x25FE
            | 0x2600..=0x26FF   // misc symbols
            | 0x2700..=0x27BF   // dingbats
            | 0x2934..=0x2935
            | 0x2B05..=0x2B07
            | 0x2B1B..=0x2B1C
            | 0x2B50 | 0x2B55
            | 0x3030 | 0x303D
            | 0x3297 | 0x3299
            | 0x1F004 | 0x1F0CF
            | 0x1F170..=0x1F251 // enclosed alphanumerics & ideographs, flags
            | 0x1F300..=0x1F5FF // symbols & pictographs
            | 0x1F600..=0x1F64F // emoticons
            | 0x1F680..=0x1F6FF // transport & map
            | 0x1F7E0..=0x1F7EB // geometric shapes extended
            | 0x1F900..=0x1F9FF // supplemental symbols
            | 0x1FA70..=0x1FAFF // symbols & pictographs extended-A
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_detector_http_and_www() {
        let text = "check https://example.com and http://foo.org/path?q=1 or www.bar.net";
        assert_eq!(
            LinkUrlDetector.find_urls(text),
            ["https://example.com", "http://foo.org/path?q=1", "www.bar.net"]
        );
    }

    #[test]
    fn test_url_detector_trims_punctuation() {
        assert_eq!(
            LinkUrlDetector.find_urls("(see https://example.com)."),
            ["https://example.com"]
        );
    }

    #[test]
    fn test_url_detector_bare_domain() {
        assert_eq!(
            LinkUrlDetector.find_urls("visit example.com or https://x.io/a_(b)"),
            ["example.com", "https://x.io/a_(b)"]
        );
    }

    #[test]
    fn test_url_detector_keeps_balanced_parens() {
        assert_eq!(
            LinkUrlDetector.find_urls("(wiki: https://en.wikipedia.org/wiki/Rust_(language))"),
            ["https://en.wikipedia.org/wiki/Rust_(language)"]
        );
    }

    #[test]
    fn test_url_detector_none() {
        assert!(LinkUrlDetector.find_urls("no links here").is_empty());
        assert!(LinkUrlDetector.find_urls("").is_empty());
    }

    #[test]
    fn test_unicode_emoji() {
        for c in [
            '😀', '🎉', '🔥', '❤', '☀', '🚀', '🥳', '⭐', '🟢', '🅰', '🆗', '🈁', '‼', '⁉', '©',
            '®', '↔', '↪', '⬅', '⬇', '〰', '〽', '㊗', '㊙',
        ] {
            assert!(UnicodeEmoji.is_emoji(c), "{c} should be an emoji");
        }
        for c in ['a', 'Я', '1', ' ', '!', '你', '\u{200d}', '\u{fe0f}'] {
            assert!(!UnicodeEmoji.is_emoji(c), "{c:?} should not be an emoji");
        }
    }

    #[test]
    fn test_closure_classifier() {
        let only_x = |c: char| c == 'x';
        assert!(only_x.is_emoji('x'));
        assert!(!only_x.is_emoji('y'));
    }
}
