//! Parsed chat records.
//!
//! This module provides [`MessageRecord`], one entry of a chat export with
//! every per-message measurement the aggregator needs.
//!
//! # Overview
//!
//! A record consists of:
//! - **Parsed**: `timestamp`, `author`, `body`
//! - **Derived**: `is_media`, `media_kinds`, `word_count`, `letter_count`,
//!   `link_count`, `emoji_occurrences`
//!
//! Derived fields are a pure function of the body and are recomputed in full
//! whenever the body changes.
//!
//! # Examples
//!
//! ```
//! use chatstats::MessageRecord;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2023, 2, 1).unwrap().and_hms_opt(10, 0, 0).unwrap();
//! let mut record = MessageRecord::new(ts, "Alice", "Hello");
//! record.append_continuation("world 🎉");
//!
//! assert_eq!(record.body(), "Hello world 🎉");
//! assert_eq!(record.word_count, 3);
//! assert_eq!(record.emoji_occurrences, vec!["🎉"]);
//! ```

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::locale::Locale;
use crate::parsing::media::{self, MediaKind};
use crate::parsing::text;

/// One parsed chat entry.
///
/// # Fields
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `timestamp` | `NaiveDateTime` | Wall-clock time from the header |
/// | `author` | `String` | Display name, as written in the export |
/// | `body` | `String` | Text, continuation lines joined with a space |
/// | `is_media` | `bool` | Body contains a media or call placeholder |
/// | `media_kinds` | `Vec<MediaKind>` | Every matched placeholder category |
/// | `word_count` | `usize` | Whitespace-delimited tokens |
/// | `letter_count` | `usize` | Characters other than ASCII space |
/// | `link_count` | `usize` | `http(s)://` links |
/// | `emoji_occurrences` | `Vec<String>` | Emoji glyphs in order |
///
/// A media record that has not received continuation lines carries zero
/// word, letter, link and emoji counts: the placeholder is not the author's
/// text. Once a continuation line is appended, counts reflect the whole body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageRecord {
    /// When the message was sent, as written in the header.
    pub timestamp: NaiveDateTime,

    /// Display name of the sender.
    pub author: String,

    body: String,

    /// Number of physical lines that make up the body.
    pub line_count: usize,

    /// Whether the normalized body contains a media or call placeholder.
    pub is_media: bool,

    /// Matched placeholder categories, in [`MediaKind::all`] order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub media_kinds: Vec<MediaKind>,

    pub word_count: usize,
    pub letter_count: usize,
    pub link_count: usize,

    /// Emoji glyphs in the body, duplicates kept.
    #[serde(default)]
    pub emoji_occurrences: Vec<String>,
}

impl MessageRecord {
    /// Creates a record, detecting placeholders of every built-in locale.
    pub fn new(timestamp: NaiveDateTime, author: impl Into<String>, body: impl Into<String>) -> Self {
        Self::with_locales(timestamp, author, body, Locale::all())
    }

    /// Creates a record, detecting placeholders of the given locales only.
    pub fn with_locales(
        timestamp: NaiveDateTime,
        author: impl Into<String>,
        body: impl Into<String>,
        locales: &[Locale],
    ) -> Self {
        let mut record = Self {
            timestamp,
            author: author.into(),
            body: body.into(),
            line_count: 1,
            is_media: false,
            media_kinds: Vec::new(),
            word_count: 0,
            letter_count: 0,
            link_count: 0,
            emoji_occurrences: Vec::new(),
        };
        record.recompute_with(locales);
        record
    }

    /// Returns the accumulated body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the body as used for placeholder matching.
    pub fn normalized_body(&self) -> String {
        text::normalize(&self.body)
    }

    /// Calendar date of the timestamp.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    /// Number of emoji occurrences.
    pub fn emoji_count(&self) -> usize {
        self.emoji_occurrences.len()
    }

    /// Returns `true` if the body contains a placeholder of `kind`.
    pub fn has_media_kind(&self, kind: MediaKind) -> bool {
        self.media_kinds.contains(&kind)
    }

    /// Appends a continuation line with a single separating space.
    pub fn append_continuation(&mut self, line: &str) {
        self.append_continuation_with(line, Locale::all());
    }

    /// Appends a continuation line, detecting placeholders of `locales`.
    pub fn append_continuation_with(&mut self, line: &str, locales: &[Locale]) {
        self.body.push(' ');
        self.body.push_str(line);
        self.line_count += 1;
        self.recompute_with(locales);
    }

    /// Recomputes every derived field from the current body.
    pub fn recompute(&mut self) {
        self.recompute_with(Locale::all());
    }

    /// Recomputes every derived field, detecting placeholders of `locales`.
    pub fn recompute_with(&mut self, locales: &[Locale]) {
        let normalized = self.normalized_body();
        self.media_kinds = media::detect_media(&normalized, locales);
        self.is_media = !self.media_kinds.is_empty();

        if self.is_media && self.line_count == 1 {
            self.word_count = 0;
            self.letter_count = 0;
            self.link_count = 0;
            self.emoji_occurrences.clear();
            return;
        }

        self.word_count = text::word_count(&self.body);
        self.letter_count = text::letter_count(&self.body);
        self.link_count = text::link_count(&self.body);
        self.emoji_occurrences = text::emojis(&self.body);
    }
}
