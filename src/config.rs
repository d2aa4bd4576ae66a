//! Configuration types for parsing and reporting.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! - [`ParserConfig`] - which locales to recognize, marker handling
//! - [`ReportConfig`] - ranking sizes and word filtering
//!
//! # Example
//!
//! ```rust
//! use chatstats::config::{ParserConfig, ReportConfig};
//! use chatstats::locale::Locale;
//!
//! let parser_config = ParserConfig::new().with_locales(vec![Locale::Turkish]);
//! let report_config = ReportConfig::new().with_top_words(50);
//! ```

use serde::{Deserialize, Serialize};

use crate::locale::Locale;

/// Configuration for export parsing.
///
/// Locales are tried in order for timestamps; placeholder phrases and edited
/// markers of every listed locale are recognized.
///
/// # Example
///
/// ```rust
/// use chatstats::config::ParserConfig;
///
/// let config = ParserConfig::new().with_drop_edited_markers(false);
/// assert!(!config.drop_edited_markers);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Locales in priority order (default: English, Turkish)
    pub locales: Vec<Locale>,

    /// Drop lines that only carry an "edited message" marker (default: true)
    pub drop_edited_markers: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            locales: Locale::all().to_vec(),
            drop_edited_markers: true,
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the locale list.
    #[must_use]
    pub fn with_locales(mut self, locales: Vec<Locale>) -> Self {
        self.locales = locales;
        self
    }

    /// Appends a locale if it is not already configured.
    #[must_use]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        if !self.locales.contains(&locale) {
            self.locales.push(locale);
        }
        self
    }

    /// Sets whether edited-message marker lines are dropped.
    #[must_use]
    pub fn with_drop_edited_markers(mut self, drop: bool) -> Self {
        self.drop_edited_markers = drop;
        self
    }
}

/// Configuration for the statistics report.
///
/// Defaults reproduce the classic report: top 30 words overall, top 20 per
/// user, top 5 emoji per user, 10 busiest days, words longer than 3 chars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Size of the corpus-wide word ranking (default: 30)
    pub top_words: usize,

    /// Size of each per-user word ranking (default: 20)
    pub top_words_per_user: usize,

    /// Size of each per-user emoji ranking (default: 5)
    pub top_emojis_per_user: usize,

    /// Number of busiest calendar dates (default: 10)
    pub top_days: usize,

    /// Words of at most this many characters are not counted (default: 3)
    pub short_word_len: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_words: 30,
            top_words_per_user: 20,
            top_emojis_per_user: 5,
            top_days: 10,
            short_word_len: 3,
        }
    }
}

impl ReportConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_top_words(mut self, n: usize) -> Self {
        self.top_words = n;
        self
    }

    #[must_use]
    pub fn with_top_words_per_user(mut self, n: usize) -> Self {
        self.top_words_per_user = n;
        self
    }

    #[must_use]
    pub fn with_top_emojis_per_user(mut self, n: usize) -> Self {
        self.top_emojis_per_user = n;
        self
    }

    #[must_use]
    pub fn with_top_days(mut self, n: usize) -> Self {
        self.top_days = n;
        self
    }

    #[must_use]
    pub fn with_short_word_len(mut self, len: usize) -> Self {
        self.short_word_len = len;
        self
    }
}
