//! Unified error types for chatstats.
//!
//! This module provides a single [`ChatstatsError`] enum that covers all error
//! cases in the library. Parser failures are fatal and carry the offending
//! line; aggregation never produces an error.
//!
//! # Error Handling Philosophy
//!
//! - **Library users** get typed errors they can match on
//! - **Application users** get clear, actionable error messages
//! - **Developers** get source error chains for debugging

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatstats operations.
///
/// # Example
///
/// ```rust
/// use chatstats::error::Result;
/// use chatstats::MessageRecord;
///
/// fn my_function() -> Result<Vec<MessageRecord>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatstatsError>;

/// The error type for all chatstats operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatstatsError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input export doesn't exist
    /// - Permission denied
    /// - The report could not be written
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A header-shaped line could not be parsed.
    ///
    /// Raised when a line looks like `[date, time] author: text` but its
    /// timestamp is not a valid calendar date or clock time. The whole run
    /// is aborted so that no statistics are computed over a partial log.
    #[error("Failed to parse line {line_number}{}: {source}\n  --> {line}", path.as_ref().map(|p| format!(" of {}", p.display())).unwrap_or_default())]
    Parse {
        /// 1-based position of the offending line in the export
        line_number: usize,
        /// The raw line, as read from the export
        line: String,
        /// The underlying parse error
        #[source]
        source: ParseErrorKind,
        /// The file path, if available
        path: Option<PathBuf>,
    },

    /// A requested format or locale is not known.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// What was being selected (e.g. "output", "locale")
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// Invalid date format in filter configuration.
    ///
    /// Date filters expect YYYY-MM-DD format.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// UTF-8 encoding error.
    ///
    /// Occurs when the export is not valid UTF-8.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },
}

/// Kinds of parse errors that can occur.
#[derive(Debug, Error)]
pub enum ParseErrorKind {
    /// The timestamp of a header line did not match any configured format
    #[error("invalid timestamp '{0}'")]
    Timestamp(String),
}

impl From<std::string::FromUtf8Error> for ChatstatsError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatstatsError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatstatsError {
    /// Creates a parse error for a header line with an unparsable timestamp.
    pub fn invalid_timestamp(
        line_number: usize,
        line: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        ChatstatsError::Parse {
            line_number,
            line: line.into(),
            source: ParseErrorKind::Timestamp(timestamp.into()),
            path: None,
        }
    }

    /// Attaches the export path to a parse error; other variants pass through.
    #[must_use]
    pub fn with_path(self, new_path: impl Into<PathBuf>) -> Self {
        match self {
            ChatstatsError::Parse {
                line_number,
                line,
                source,
                ..
            } => ChatstatsError::Parse {
                line_number,
                line,
                source,
                path: Some(new_path.into()),
            },
            other => other,
        }
    }

    /// Creates a UTF-8 error for an export that failed to decode.
    pub fn utf8(context: impl Into<String>, source: std::string::FromUtf8Error) -> Self {
        ChatstatsError::Utf8 {
            context: context.into(),
            source,
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatstatsError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        ChatstatsError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Returns `true` if this is an I/O error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatstatsError::Io(_))
    }

    /// Returns `true` if this is a parse error.
    pub fn is_parse(&self) -> bool {
        matches!(self, ChatstatsError::Parse { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatstatsError::InvalidFormat { .. })
    }

    /// Returns `true` if this is an invalid date error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, ChatstatsError::InvalidDate { .. })
    }

    /// Returns the 1-based line number for parse errors.
    pub fn line_number(&self) -> Option<usize> {
        match self {
            ChatstatsError::Parse { line_number, .. } => Some(*line_number),
            _ => None,
        }
    }
}
