//! Report renderers.
//!
//! Every renderer reads a finished [`ChatReport`](crate::core::stats::ChatReport)
//! and never alters computed values:
//! - [`write_text`] / [`to_text`] - classic sectioned plain text
//! - [`write_markdown`] / [`to_markdown`] - one Markdown table per section
//! - [`write_json`] / [`to_json`] - the full report as JSON - requires `json-output` feature
//! - [`write_csv`] / [`to_csv`] - per-author table with semicolon delimiter - requires `csv-output` feature
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatstats::Result<()> {
//! use chatstats::config::ReportConfig;
//! use chatstats::core::output::{to_text, write_csv, write_json};
//! use chatstats::core::stats::ChatReport;
//! use chatstats::parser::LogParser;
//!
//! let records = LogParser::new().parse("chat.txt".as_ref())?;
//! let report = ChatReport::build(&records, &ReportConfig::default());
//!
//! write_json(&report, "stats.json")?;
//! write_csv(&report, "users.csv")?;
//! println!("{}", to_text(&report));
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
mod markdown_writer;
mod text_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
pub use markdown_writer::{to_markdown, write_markdown};
pub use text_writer::{to_text, write_text};
