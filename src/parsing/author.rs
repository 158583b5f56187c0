//! Author-prefix extraction for transcript bodies.
//!
//! A body of the form `name: text` is an authored message. A body without a
//! `name: ` prefix ("Alice added Bob", the encryption notice, ...) is a group
//! notification. So is a multi-line body whose first `: ` only appears on a
//! later line, such as a changed group description.

use std::sync::LazyLock;

use regex::Regex;

/// Shortest prefix ending in a colon followed by whitespace.
static AUTHOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^(.+?):\s").expect("author pattern is valid"));

/// Classification of one raw body segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind<'a> {
    /// `author: message`
    Authored { author: &'a str, message: &'a str },
    /// No author prefix; the whole body is the message.
    Notification { message: &'a str },
    /// An author prefix matched but the captured name is unusable.
    Malformed { reason: &'static str },
}

/// Removes one trailing `\n` or `\r\n`.
pub fn strip_line_terminator(text: &str) -> &str {
    text.strip_suffix('\n')
        .map(|t| t.strip_suffix('\r').unwrap_or(t))
        .unwrap_or(text)
}

/// Splits a raw body into author and message.
///
/// The trailing line terminator of the body is stripped from the message.
///
/// # Example
///
/// ```
/// use chatstats::parsing::author::{BodyKind, classify_body};
///
/// assert_eq!(
///     classify_body("Alice: hello\n"),
///     BodyKind::Authored { author: "Alice", message: "hello" }
/// );
/// assert_eq!(
///     classify_body("Alice added Bob\n"),
///     BodyKind::Notification { message: "Alice added Bob" }
/// );
/// ```
pub fn classify_body(body: &str) -> BodyKind<'_> {
    let Some(caps) = AUTHOR_RE.captures(body) else {
        return BodyKind::Notification {
            message: strip_line_terminator(body),
        };
    };

    let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
        return BodyKind::Malformed {
            reason: "author pattern matched without a name capture",
        };
    };

    let author = name.as_str().trim();
    if author.is_empty() {
        return BodyKind::Malformed {
            reason: "empty author name",
        };
    }
    // An author name never spans lines.
    if author.contains('\n') {
        return BodyKind::Notification {
            message: strip_line_terminator(body),
        };
    }

    BodyKind::Authored {
        author,
        message: strip_line_terminator(&body[whole.end()..]),
    }
}
