//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`OutputFormat`] - Output format options, convertible to
//!   [`ReportFormat`](crate::format::ReportFormat)

use clap::{ArgAction, Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::ParserConfig;
use crate::core::filter::FilterConfig;
use crate::error::Result;
use crate::format::ReportFormat;
use crate::locale::Locale;

/// Default report path; its extension follows `--format` when not overridden.
pub const DEFAULT_OUTPUT: &str = "chat_stats.txt";

/// Compute message, media, activity and vocabulary statistics from a
/// WhatsApp chat export.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatstats")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatstats _chat.txt
    chatstats _chat.txt -o stats.md
    chatstats _chat.txt -f json --after 2024-01-01
    chatstats _chat.txt --from Alice --locale tr
    RUST_LOG=chatstats=trace chatstats _chat.txt")]
pub struct Args {
    /// Path to the exported chat (.txt)
    pub input: String,

    /// Path to the report file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: String,

    /// Report format (detected from the output extension when omitted)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Only count messages on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Only count messages on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Only count messages from this user
    #[arg(long, value_name = "USER")]
    pub from: Option<String>,

    /// Export locale to recognize; repeat for several (default: all)
    #[arg(long = "locale", value_name = "LOCALE")]
    pub locales: Vec<Locale>,

    /// Keep "edited message" marker lines as ordinary messages
    #[arg(long)]
    pub keep_edited: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Parser configuration implied by `--locale` and `--keep-edited`.
    pub fn parser_config(&self) -> ParserConfig {
        let config = ParserConfig::new().with_drop_edited_markers(!self.keep_edited);
        if self.locales.is_empty() {
            return config;
        }
        self.locales
            .iter()
            .fold(config.with_locales(Vec::new()), |config, &locale| {
                config.with_locale(locale)
            })
    }

    /// Filter configuration implied by `--after`, `--before` and `--from`.
    pub fn filter_config(&self) -> Result<FilterConfig> {
        let mut config = FilterConfig::new();
        if let Some(after) = &self.after {
            config = config.with_date_from(after)?;
        }
        if let Some(before) = &self.before {
            config = config.with_date_to(before)?;
        }
        if let Some(from) = &self.from {
            config = config.with_author(from.clone());
        }
        Ok(config)
    }

    /// Resolves the report format and path.
    ///
    /// An explicit `--format` wins and, with the default output path, also
    /// picks the extension. Otherwise the format follows the output extension.
    pub fn resolve_output(&self) -> Result<(String, ReportFormat)> {
        match self.format {
            Some(format) => {
                let format: ReportFormat = format.into();
                let path = if self.output == DEFAULT_OUTPUT {
                    format!("chat_stats.{}", format.extension())
                } else {
                    self.output.clone()
                };
                Ok((path, format))
            }
            None => Ok((self.output.clone(), ReportFormat::from_path(&self.output)?)),
        }
    }

    /// Log level implied by the number of `-v` flags.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Sectioned plain text (default)
    #[default]
    #[value(alias = "txt")]
    Text,

    /// Markdown tables
    #[value(alias = "md")]
    Markdown,

    /// Full report as JSON
    Json,

    /// Per-user table as CSV
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", ReportFormat::from(*self))
    }
}

// Conversion to library format type
impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> ReportFormat {
        match format {
            OutputFormat::Text => ReportFormat::Text,
            OutputFormat::Markdown => ReportFormat::Markdown,
            OutputFormat::Json => ReportFormat::Json,
            OutputFormat::Csv => ReportFormat::Csv,
        }
    }
}
