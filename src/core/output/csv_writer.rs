//! CSV report writer.
//!
//! Emits the per-author table only: one row per author in first-seen order.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::core::stats::ChatReport;
use crate::error::Result;

use super::text_writer::TIMESTAMP_FORMAT;

const HEADER: [&str; 12] = [
    "Author",
    "Messages",
    "Words",
    "Letters",
    "Media",
    "Emojis",
    "Links",
    "First",
    "Last",
    "ActiveDays",
    "Participation",
    "MessagesPerDay",
];

/// Writes the per-author table to `path` with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Author`, the six metrics, `First`, `Last`, `ActiveDays`,
///   `Participation` (percent, one decimal), `MessagesPerDay` (two decimals)
/// - Encoding: UTF-8
pub fn write_csv(report: &ChatReport, path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(path)?;
    write_rows(report, file)
}

/// Converts the per-author table to a CSV string.
pub fn to_csv(report: &ChatReport) -> Result<String> {
    let mut buffer = Vec::new();
    write_rows(report, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_rows<W: Write>(report: &ChatReport, out: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(out);
    writer.write_record(HEADER)?;

    for user in &report.users {
        let timeline = report.timeline(&user.author);
        writer.write_record([
            user.author.clone(),
            user.messages.to_string(),
            user.words.to_string(),
            user.letters.to_string(),
            user.media.to_string(),
            user.emojis.to_string(),
            user.links.to_string(),
            timeline.map_or_else(String::new, |t| t.first.format(TIMESTAMP_FORMAT).to_string()),
            timeline.map_or_else(String::new, |t| t.last.format(TIMESTAMP_FORMAT).to_string()),
            timeline.map_or_else(String::new, |t| t.active_days.to_string()),
            timeline.map_or_else(String::new, |t| format!("{:.1}", t.participation)),
            timeline.map_or_else(String::new, |t| format!("{:.2}", t.messages_per_active_day)),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
