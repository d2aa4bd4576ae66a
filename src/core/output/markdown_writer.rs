//! Markdown report writer.

use std::fmt::{self, Display, Formatter};
use std::fs;
use std::path::Path;

use super::text_writer::{TIMESTAMP_FORMAT, format_timestamp};
use crate::core::stats::{ChatReport, Metric, UserTerms};
use crate::error::Result;

/// Renders a report as Markdown with one table per section.
pub fn to_markdown(report: &ChatReport) -> String {
    MarkdownReport(report).to_string()
}

/// Writes the Markdown report to `path`.
pub fn write_markdown(report: &ChatReport, path: impl AsRef<Path>) -> Result<()> {
    fs::write(path, to_markdown(report))?;
    Ok(())
}

struct MarkdownReport<'a>(&'a ChatReport);

/// Escapes characters that would break a table cell.
fn cell(text: &str) -> String {
    text.replace('|', "\\|")
}

fn table_header(f: &mut Formatter<'_>, columns: &[&str]) -> fmt::Result {
    writeln!(f, "| {} |", columns.join(" | "))?;
    writeln!(f, "|{}", "---|".repeat(columns.len()))
}

fn ranking(f: &mut Formatter<'_>, title: &str, users: &[UserTerms], column: &str) -> fmt::Result {
    writeln!(f, "\n## {title}")?;
    for user in users {
        writeln!(f, "\n### {}\n", user.author)?;
        if user.terms.is_empty() {
            writeln!(f, "_none_")?;
            continue;
        }
        table_header(f, &[column, "Count"])?;
        for term in &user.terms {
            writeln!(f, "| {} | {} |", cell(&term.term), term.count)?;
        }
    }
    Ok(())
}

impl Display for MarkdownReport<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let report = self.0;
        let totals = &report.totals;

        writeln!(f, "# Chat Statistics\n")?;
        writeln!(
            f,
            "**Date range:** {} → {}\n",
            format_timestamp(totals.first),
            format_timestamp(totals.last)
        )?;
        table_header(f, &["Total", "Value"])?;
        for (name, value) in [
            ("Messages", totals.messages),
            ("Words", totals.words),
            ("Letters", totals.letters),
            ("Media", totals.media),
            ("Emojis", totals.emojis),
            ("Links", totals.links),
            ("Participants", totals.authors),
            ("Active days", totals.active_days),
        ] {
            writeln!(f, "| {name} | {value} |")?;
        }

        writeln!(f, "\n## Users\n")?;
        let mut columns = vec!["User"];
        columns.extend(Metric::all().iter().map(|m| m.label()));
        table_header(f, &columns)?;
        for user in report.users_by(Metric::Messages) {
            write!(f, "| {} |", cell(&user.author))?;
            for &metric in Metric::all() {
                write!(f, " {} |", user.get(metric))?;
            }
            writeln!(f)?;
        }

        writeln!(f, "\n## Media\n")?;
        table_header(f, &["User", "Type", "Count"])?;
        for breakdown in &report.media {
            for entry in breakdown.kinds.iter().filter(|k| k.count > 0) {
                writeln!(
                    f,
                    "| {} | {} | {} |",
                    cell(&breakdown.author),
                    entry.kind.label(),
                    entry.count
                )?;
            }
        }

        writeln!(f, "\n## Activity\n")?;
        table_header(
            f,
            &["User", "First", "Last", "Active days", "Participation", "Per day"],
        )?;
        for timeline in &report.timelines {
            writeln!(
                f,
                "| {} | {} | {} | {} | {:.1}% | {:.2} |",
                cell(&timeline.author),
                timeline.first.format(TIMESTAMP_FORMAT),
                timeline.last.format(TIMESTAMP_FORMAT),
                timeline.active_days,
                timeline.participation,
                timeline.messages_per_active_day
            )?;
        }

        writeln!(f, "\n## Day of Week\n")?;
        table_header(f, &["Day", "Messages"])?;
        for day in &report.weekdays {
            writeln!(f, "| {} | {} |", day.weekday, day.count)?;
        }

        writeln!(f, "\n## Hour\n")?;
        table_header(f, &["Hour", "Messages"])?;
        for hour in &report.hours {
            writeln!(f, "| {:02}:00 | {} |", hour.hour, hour.count)?;
        }

        writeln!(f, "\n## Month\n")?;
        table_header(f, &["Month", "Messages"])?;
        for month in &report.months {
            writeln!(f, "| {} | {} |", month.month, month.count)?;
        }

        writeln!(f, "\n## Busiest Days\n")?;
        table_header(f, &["Date", "Messages"])?;
        for day in &report.busiest_days {
            writeln!(f, "| {} | {} |", day.date, day.count)?;
        }

        writeln!(f, "\n## Top Words\n")?;
        table_header(f, &["Word", "Count"])?;
        for word in &report.top_words {
            writeln!(f, "| {} | {} |", cell(&word.term), word.count)?;
        }

        ranking(f, "Top Words by User", &report.user_words, "Word")?;
        ranking(f, "Top Emojis by User", &report.user_emojis, "Emoji")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReportConfig;
    use crate::parser::LogParser;

    fn sample() -> ChatReport {
        let records = LogParser::new()
            .parse_str(
                "[01.02.2023, 10:00:00] Alice: Hello world 🎉\n\
                 [01.02.2023, 10:05:00] Bob|Ex: image omitted",
            )
            .unwrap();
        ChatReport::build(&records, &ReportConfig::default())
    }

    #[test]
    fn test_markdown_structure() {
        let md = to_markdown(&sample());
        assert!(md.starts_with("# Chat Statistics\n"));
        assert!(md.contains("| Messages | 2 |"));
        assert!(md.contains("| User | Message Count | Word Count |"));
        assert!(md.contains("| Alice | 1 | 3 | 11 | 0 | 1 | 0 |"));
        assert!(md.contains("| Bob\\|Ex | Image | 1 |"));
        assert!(md.contains("| 10:00 | 2 |"));
        assert!(md.contains("| 🎉 | 1 |"));
    }

    #[test]
    fn test_empty_ranking_marked() {
        let md = to_markdown(&sample());
        assert!(md.contains("### Bob|Ex\n\n_none_"));
    }

    #[test]
    fn test_empty_report() {
        let md = to_markdown(&ChatReport::build(&[], &ReportConfig::default()));
        assert!(md.contains("**Date range:** n/a → n/a"));
    }
}
