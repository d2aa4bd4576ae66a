//! # chatstats
//!
//! A Rust library for turning WhatsApp chat exports into statistics: message,
//! word, media, emoji and link counts per participant, activity histograms,
//! participation timelines, and word / emoji rankings.
//!
//! ## Overview
//!
//! Processing is a three-step batch:
//! 1. [`LogParser`](parser::LogParser) reads an export into [`MessageRecord`]s,
//!    joining multi-line messages and recognizing media placeholders in both
//!    English and Turkish exports
//! 2. [`apply_filters`](core::filter::apply_filters) optionally restricts the
//!    records to a date range or one author
//! 3. [`ChatReport::build`](core::stats::ChatReport::build) aggregates them,
//!    and a renderer in [`core::output`] writes the result
//!
//! ## Quick Start
//!
//! ```rust
//! use chatstats::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let export = "\u{200E}[01.02.2023, 10:00:00] Alice: Hello world\n\
//!                   [01.02.2023, 10:01:00] Bob: \u{200E}image omitted\n\
//!                   [01.02.2023, 10:02:00] Alice: see you\n\
//!                   tomorrow 🎉";
//!
//!     let records = LogParser::new().parse_str(export)?;
//!     let report = ChatReport::build(&records, &ReportConfig::default());
//!
//!     assert_eq!(report.totals.messages, 3);
//!     assert_eq!(report.totals.media, 1);
//!     assert_eq!(report.users_by(Metric::Words)[0].author, "Alice");
//!
//!     println!("{}", to_text(&report));
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`LogParser`](parser::LogParser), the line classifier
//! - [`parsing`] - header recognition, text measurements, media detection
//! - [`locale`] - per-language timestamp formats, placeholders and markers
//! - [`message`] - [`MessageRecord`]
//! - [`config`] - [`ParserConfig`](config::ParserConfig), [`ReportConfig`](config::ReportConfig)
//! - [`core`] - filtering, aggregation and rendering
//! - [`format`] - [`ReportFormat`](format::ReportFormat) dispatch
//! - [`error`] - unified error types ([`ChatstatsError`], [`Result`])
//! - [`prelude`] - convenient re-exports
//!
//! ## Logging
//!
//! The library emits [`tracing`] events (`debug` per parse and report,
//! `trace` per dropped line) and never installs a subscriber itself.

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod locale;
#[cfg(feature = "cli")]
pub mod logging;
pub mod message;
pub mod parser;
pub mod parsing;

// Re-export the main types at the crate root for convenience
pub use error::{ChatstatsError, Result};
pub use message::MessageRecord;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatstats::prelude::*;
/// ```
pub mod prelude {
    pub use crate::MessageRecord;

    // Error types
    pub use crate::error::{ChatstatsError, Result};

    // Parsing
    pub use crate::config::{ParserConfig, ReportConfig};
    pub use crate::locale::Locale;
    pub use crate::parser::{LogParser, ParseSummary};
    pub use crate::parsing::MediaKind;

    // Filtering
    pub use crate::core::filter::{FilterConfig, apply_filters};

    // Aggregation
    pub use crate::core::stats::{ChatReport, Metric};

    // Output (file writers and string converters)
    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, write_json};
    pub use crate::core::output::{to_markdown, to_text, write_markdown, write_text};
    pub use crate::format::{ReportFormat, to_format_string, write_to_format};
}
