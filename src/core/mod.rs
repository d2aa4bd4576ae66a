//! Core processing logic for chatstats.
//!
//! This module contains:
//! - [`counter`] - Insertion-ordered frequency counting
//! - [`filter`] - Record filtering by date and author
//! - [`stats`] - Aggregation of records into a [`ChatReport`]
//! - [`output`] - Report renderers (text, Markdown, JSON, CSV)
//!
//! # Quick Start
//!
//! ```rust
//! use chatstats::core::{ChatReport, FilterConfig, apply_filters, to_text};
//! use chatstats::config::ReportConfig;
//! use chatstats::parser::LogParser;
//!
//! # fn main() -> chatstats::Result<()> {
//! let records = LogParser::new().parse_str("[01.02.2023, 10:00:00] Alice: Hello")?;
//! let records = apply_filters(records, &FilterConfig::new().with_author("alice"));
//! let report = ChatReport::build(&records, &ReportConfig::default());
//! assert!(to_text(&report).contains("Total Messages:        1"));
//! # Ok(())
//! # }
//! ```

pub mod counter;
pub mod filter;
pub mod output;
pub mod stats;

// Re-export main types for convenience
pub use counter::StableCounter;
pub use filter::{FilterConfig, apply_filters};
pub use stats::{ChatReport, Metric, Totals};

#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, write_json};
pub use output::{to_markdown, to_text, write_markdown, write_text};
