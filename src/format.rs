//! Report format types for the chatstats library.
//!
//! This module provides library-first format types that don't depend on CLI
//! frameworks.
//!
//! # Example
//!
//! ```rust
//! # fn main() -> chatstats::Result<()> {
//! use chatstats::config::ReportConfig;
//! use chatstats::core::stats::ChatReport;
//! use chatstats::format::{ReportFormat, to_format_string};
//!
//! let report = ChatReport::build(&[], &ReportConfig::default());
//!
//! let format = ReportFormat::from_path("stats.md")?;
//! assert_eq!(format, ReportFormat::Markdown);
//!
//! let markdown = to_format_string(&report, format)?;
//! assert!(markdown.starts_with("# Chat Statistics"));
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::output;
use crate::core::stats::ChatReport;
use crate::error::ChatstatsError;

/// Rendering of a [`ChatReport`].
///
/// - [`Text`](ReportFormat::Text) - sectioned plain text (default)
/// - [`Markdown`](ReportFormat::Markdown) - tables, for notes and wikis
/// - [`Json`](ReportFormat::Json) - the complete report, for further processing
/// - [`Csv`](ReportFormat::Csv) - per-author table, for spreadsheets
///
/// # Example
///
/// ```rust
/// use chatstats::format::ReportFormat;
/// use std::str::FromStr;
///
/// let format = ReportFormat::from_str("md").unwrap();
/// assert_eq!(format, ReportFormat::Markdown);
/// assert_eq!(format.extension(), "md");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum ReportFormat {
    /// Plain text with banner-separated sections
    #[default]
    Text,

    /// Markdown tables
    #[serde(alias = "md")]
    Markdown,

    /// Pretty-printed JSON of the whole report
    Json,

    /// Per-author CSV with semicolon delimiter
    Csv,
}

impl ReportFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Text => "txt",
            ReportFormat::Markdown => "md",
            ReportFormat::Json => "json",
            ReportFormat::Csv => "csv",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["text", "txt", "markdown", "md", "json", "csv"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [ReportFormat] {
        &[
            ReportFormat::Text,
            ReportFormat::Markdown,
            ReportFormat::Json,
            ReportFormat::Csv,
        ]
    }

    /// Detects format from a file path based on extension.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatstats::format::ReportFormat;
    ///
    /// assert_eq!(ReportFormat::from_path("out/stats.JSON").unwrap(), ReportFormat::Json);
    /// assert!(ReportFormat::from_path("stats.pdf").is_err());
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ChatstatsError> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "txt" => Ok(ReportFormat::Text),
            "md" | "markdown" => Ok(ReportFormat::Markdown),
            "json" => Ok(ReportFormat::Json),
            "csv" => Ok(ReportFormat::Csv),
            _ => Err(ChatstatsError::invalid_format(
                "output",
                format!("Unknown file extension: '.{ext}'. Expected one of: txt, md, json, csv"),
            )),
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Text => write!(f, "Text"),
            ReportFormat::Markdown => write!(f, "Markdown"),
            ReportFormat::Json => write!(f, "JSON"),
            ReportFormat::Csv => write!(f, "CSV"),
        }
    }
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "markdown" | "md" => Ok(ReportFormat::Markdown),
            "json" => Ok(ReportFormat::Json),
            "csv" => Ok(ReportFormat::Csv),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                ReportFormat::all_names().join(", ")
            )),
        }
    }
}

fn missing_feature(format: ReportFormat) -> ChatstatsError {
    ChatstatsError::invalid_format(
        "output",
        format!(
            "Output format {format} requires the '{}' feature to be enabled",
            match format {
                ReportFormat::Csv => "csv-output",
                _ => "json-output",
            }
        ),
    )
}

/// Writes the report to a file in the specified format.
///
/// # Errors
///
/// Returns an error if:
/// - The required feature for the format is not enabled
/// - The file cannot be written
#[allow(unused_variables)]
pub fn write_to_format(
    report: &ChatReport,
    path: impl AsRef<Path>,
    format: ReportFormat,
) -> Result<(), ChatstatsError> {
    match format {
        ReportFormat::Text => output::write_text(report, path),
        ReportFormat::Markdown => output::write_markdown(report, path),
        #[cfg(feature = "json-output")]
        ReportFormat::Json => output::write_json(report, path),
        #[cfg(feature = "csv-output")]
        ReportFormat::Csv => output::write_csv(report, path),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}

/// Renders the report to a string in the specified format.
pub fn to_format_string(report: &ChatReport, format: ReportFormat) -> Result<String, ChatstatsError> {
    match format {
        ReportFormat::Text => Ok(output::to_text(report)),
        ReportFormat::Markdown => Ok(output::to_markdown(report)),
        #[cfg(feature = "json-output")]
        ReportFormat::Json => output::to_json(report),
        #[cfg(feature = "csv-output")]
        ReportFormat::Csv => output::to_csv(report),
        #[allow(unreachable_patterns)]
        _ => Err(missing_feature(format)),
    }
}
