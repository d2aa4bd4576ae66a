//! Filter records by date range and author.
//!
//! This module provides [`FilterConfig`] for defining filter criteria and
//! [`apply_filters`] for restricting a record sequence before aggregation.
//!
//! # Filter Types
//!
//! | Filter | Method | Description |
//! |--------|--------|-------------|
//! | Date from | [`with_date_from`](FilterConfig::with_date_from) | Records on or after date |
//! | Date to | [`with_date_to`](FilterConfig::with_date_to) | Records on or before date |
//! | Author | [`with_author`](FilterConfig::with_author) | Records from one author |
//!
//! # Example
//!
//! ```
//! use chatstats::core::filter::{FilterConfig, apply_filters};
//! use chatstats::parser::LogParser;
//!
//! # fn main() -> chatstats::Result<()> {
//! let records = LogParser::new().parse_str(
//!     "[01.01.2024, 12:00:00] Alice: Old\n[15.06.2024, 12:00:00] Alice: New",
//! )?;
//!
//! let config = FilterConfig::new()
//!     .with_date_from("2024-06-01")?
//!     .with_date_to("2024-12-31")?;
//!
//! let filtered = apply_filters(records, &config);
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(filtered[0].body(), "New");
//! # Ok(())
//! # }
//! ```
//!
//! Timestamps in an export carry no zone, so bounds are compared as
//! wall-clock times. Multiple filters are combined with AND logic.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::MessageRecord;
use crate::error::ChatstatsError;

/// Configuration for filtering records by date and author.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Include only records on or after this time.
    pub after: Option<NaiveDateTime>,

    /// Include only records on or before this time.
    pub before: Option<NaiveDateTime>,

    /// Include only records from this author (case-insensitive).
    pub author: Option<String>,
}

impl FilterConfig {
    /// Creates a new empty filter configuration.
    ///
    /// No filters are active by default; all records pass through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start date filter (inclusive, from midnight).
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatsError::InvalidDate`] unless `date_str` is `YYYY-MM-DD`.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self, ChatstatsError> {
        self.after = Some(parse_date(date_str)?.and_time(NaiveTime::MIN));
        Ok(self)
    }

    /// Sets the end date filter (inclusive, through the last second of the day).
    ///
    /// # Errors
    ///
    /// Returns [`ChatstatsError::InvalidDate`] unless `date_str` is `YYYY-MM-DD`.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self, ChatstatsError> {
        let end_of_day = NaiveTime::from_hms_opt(23, 59, 59)
            .ok_or_else(|| ChatstatsError::invalid_date(date_str))?;
        self.before = Some(parse_date(date_str)?.and_time(end_of_day));
        Ok(self)
    }

    /// Sets the author filter.
    ///
    /// Matching ignores case, including non-ASCII letters (`ayşe` matches `AYŞE`).
    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Returns `true` if any filter is active.
    pub fn is_active(&self) -> bool {
        self.after.is_some() || self.before.is_some() || self.author.is_some()
    }

    /// Returns `true` if the record passes every active filter.
    pub fn matches(&self, record: &MessageRecord) -> bool {
        if self.after.is_some_and(|after| record.timestamp < after) {
            return false;
        }
        if self.before.is_some_and(|before| record.timestamp > before) {
            return false;
        }
        match &self.author {
            Some(author) => record.author.to_lowercase() == author.to_lowercase(),
            None => true,
        }
    }
}

fn parse_date(date_str: &str) -> Result<NaiveDate, ChatstatsError> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| ChatstatsError::invalid_date(date_str))
}

/// Keeps only the records that match all active filters, in order.
///
/// If no filters are active, returns the input unchanged.
pub fn apply_filters(records: Vec<MessageRecord>, config: &FilterConfig) -> Vec<MessageRecord> {
    if !config.is_active() {
        return records;
    }

    records
        .into_iter()
        .filter(|record| config.matches(record))
        .collect()
}
