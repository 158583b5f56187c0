//! Transcript parsing stages.
//!
//! - [`segment`] - split raw text into `(timestamp, body)` pairs
//! - [`timestamp`] - resolve one date format for the whole transcript
//! - [`author`] - separate the `name: ` prefix from the message
//!
//! [`TranscriptParser`](crate::parser::TranscriptParser) chains them.

pub mod author;
pub mod segment;
pub mod timestamp;

pub use author::{BodyKind, classify_body, strip_line_terminator};
pub use segment::{RawSegment, normalize_spaces, segment_transcript};
pub use timestamp::{DateFormat, ResolvedTimestamps, resolve_timestamps};
