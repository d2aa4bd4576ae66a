//! Chat export parser.
//!
//! [`LogParser`] turns the text of a WhatsApp export into an ordered
//! sequence of [`MessageRecord`]s.
//!
//! # Line classification
//!
//! Every line is first cleaned of direction marks and control characters
//! (see [`clean_line`](crate::parsing::text::clean_line)), then:
//!
//! 1. a **header** line (`[15.01.2024, 10:30:45] Alice: Hello`) seals the
//!    open record and opens a new one;
//! 2. any other line is a **continuation** of the open record and is
//!    appended with a single space;
//! 3. a line with no open record is an **orphan** and is dropped.
//!
//! A header that only carries an "edited message" marker produces no record;
//! lines following it are orphans.
//!
//! # Example
//!
//! ```rust
//! use chatstats::parser::LogParser;
//!
//! let export = "[01.02.2023, 10:00:00] Alice: Hello\nworld\n[01.02.2023, 10:01:00] Bob: Hi";
//! let records = LogParser::new().parse_str(export)?;
//!
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[0].body(), "Hello world");
//! # Ok::<(), chatstats::ChatstatsError>(())
//! ```

use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, trace};

use crate::MessageRecord;
use crate::config::ParserConfig;
use crate::error::{ChatstatsError, Result};
use crate::locale;
use crate::parsing::{header, text};

/// Parser for WhatsApp TXT exports.
///
/// # Example
///
/// ```rust,no_run
/// use chatstats::parser::LogParser;
/// use std::path::Path;
///
/// let records = LogParser::new().parse(Path::new("chat.txt"))?;
/// # Ok::<(), chatstats::ChatstatsError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct LogParser {
    config: ParserConfig,
}

/// Counters describing how the lines of an export were classified.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ParseSummary {
    /// Total physical lines read
    pub lines: usize,
    /// Records produced
    pub records: usize,
    /// Lines appended to an open record
    pub continuations: usize,
    /// Lines dropped because no record was open
    pub orphans: usize,
    /// Edited-message marker lines dropped
    pub edited_markers: usize,
}

/// Where the line scanner stands with respect to the last record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RecordState {
    /// No header seen yet
    Empty,
    /// The last record accepts continuation lines
    Open,
    /// The last header was dropped; continuation lines are orphans
    Sealed,
}

impl LogParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Reads and parses an export file.
    pub fn parse(&self, path: &Path) -> Result<Vec<MessageRecord>> {
        self.parse_with_summary(path).map(|(records, _)| records)
    }

    /// Reads and parses an export file, also returning line counters.
    pub fn parse_with_summary(&self, path: &Path) -> Result<(Vec<MessageRecord>, ParseSummary)> {
        let bytes = fs::read(path)?;
        let content = String::from_utf8(bytes)
            .map_err(|e| ChatstatsError::utf8(format!("reading {}", path.display()), e))?;

        self.parse_content(&content).map_err(|e| e.with_path(path))
    }

    /// Parses export text held in memory.
    pub fn parse_str(&self, content: &str) -> Result<Vec<MessageRecord>> {
        self.parse_content(content).map(|(records, _)| records)
    }

    /// Parses export text held in memory, also returning line counters.
    pub fn parse_str_with_summary(&self, content: &str) -> Result<(Vec<MessageRecord>, ParseSummary)> {
        self.parse_content(content)
    }

    fn parse_content(&self, content: &str) -> Result<(Vec<MessageRecord>, ParseSummary)> {
        let locales = self.config.locales.as_slice();
        let mut records: Vec<MessageRecord> = Vec::new();
        let mut summary = ParseSummary::default();
        let mut state = RecordState::Empty;

        for (index, raw) in content.lines().enumerate() {
            let line_number = index + 1;
            summary.lines += 1;
            let line = text::clean_line(raw);

            if let Some(parts) = header::split_header(&line) {
                let timestamp = header::parse_timestamp(parts.date, parts.time, locales)
                    .ok_or_else(|| {
                        ChatstatsError::invalid_timestamp(line_number, raw, parts.timestamp_str())
                    })?;

                if self.is_edited_marker(parts.body) {
                    trace!(line_number, "dropping edited marker header");
                    summary.edited_markers += 1;
                    state = RecordState::Sealed;
                    continue;
                }

                records.push(MessageRecord::with_locales(
                    timestamp,
                    parts.author,
                    parts.body,
                    locales,
                ));
                state = RecordState::Open;
                continue;
            }

            match (state, records.last_mut()) {
                (RecordState::Open, Some(current)) => {
                    if self.is_edited_marker(&line) {
                        trace!(line_number, "dropping edited marker continuation");
                        summary.edited_markers += 1;
                        continue;
                    }
                    current.append_continuation_with(&line, locales);
                    summary.continuations += 1;
                }
                _ => {
                    trace!(line_number, "dropping orphan line");
                    summary.orphans += 1;
                }
            }
        }

        summary.records = records.len();
        debug!(
            lines = summary.lines,
            records = summary.records,
            continuations = summary.continuations,
            orphans = summary.orphans,
            edited_markers = summary.edited_markers,
            "parsed chat export"
        );

        Ok((records, summary))
    }

    fn is_edited_marker(&self, body: &str) -> bool {
        self.config.drop_edited_markers
            && locale::is_edited_marker(&text::normalize(body), &self.config.locales)
    }
}
