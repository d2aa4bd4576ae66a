//! Shared parsing utilities.
//!
//! This module contains the building blocks used by
//! [`LogParser`](crate::parser::LogParser) and by the aggregator:
//! - [`header`] - header line recognition and timestamp parsing
//! - [`text`] - invisible character handling and body measurements
//! - [`media`] - media and call placeholder detection

pub mod header;
pub mod media;
pub mod text;

// Re-export commonly used items
pub use header::{Header, parse_timestamp, split_header};
pub use media::{Anchor, MediaKind, Placeholder, detect_media, is_media};
pub use text::{clean_line, emojis, letter_count, link_count, normalize, word_count};
