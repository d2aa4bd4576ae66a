//! Plain-text report writer.
//!
//! Produces the classic `chat_stats.txt` layout: banner-separated sections
//! with aligned `name : value` lines.

use std::fmt::{self, Display, Formatter};
use std::fs;
use std::path::Path;

use chrono::NaiveDateTime;

use crate::core::stats::{ChatReport, Metric};
use crate::error::Result;

const RULE: &str = "========================================";
pub(crate) const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub(crate) fn format_timestamp(ts: Option<NaiveDateTime>) -> String {
    ts.map_or_else(|| "n/a".to_string(), |ts| ts.format(TIMESTAMP_FORMAT).to_string())
}

/// Renders a report as plain text.
pub fn to_text(report: &ChatReport) -> String {
    TextReport(report).to_string()
}

/// Writes the plain-text report to `path`.
pub fn write_text(report: &ChatReport, path: impl AsRef<Path>) -> Result<()> {
    fs::write(path, to_text(report))?;
    Ok(())
}

struct TextReport<'a>(&'a ChatReport);

impl TextReport<'_> {
    fn header(f: &mut Formatter<'_>, title: &str) -> fmt::Result {
        write!(f, "\n{RULE}\n{title}\n{RULE}\n")
    }

    fn subheader(f: &mut Formatter<'_>, title: &str) -> fmt::Result {
        write!(f, "\n-- {title} --\n")
    }

    fn summary(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let totals = &self.0.totals;
        Self::header(f, "CHAT SUMMARY")?;
        writeln!(
            f,
            "Date Range    : {}  →  {}",
            format_timestamp(totals.first),
            format_timestamp(totals.last)
        )?;
        writeln!(f, "Total Messages: {:>8}", totals.messages)?;
        writeln!(f, "Total Words   : {:>8}", totals.words)?;
        writeln!(f, "Total Letters : {:>8}", totals.letters)?;
        writeln!(f, "Total Media   : {:>8}", totals.media)?;
        writeln!(f, "Total Emojis  : {:>8}", totals.emojis)?;
        writeln!(f, "Total Links   : {:>8}", totals.links)?;
        writeln!(f, "Participants  : {:>8}", totals.authors)?;
        writeln!(f, "Active Days   : {:>8}", totals.active_days)
    }

    fn users(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Self::header(f, "USER STATISTICS")?;
        let width = self
            .0
            .users
            .iter()
            .map(|u| u.author.chars().count())
            .max()
            .unwrap_or(0);

        for &metric in Metric::all() {
            Self::subheader(f, metric.label())?;
            for user in self.0.users_by(metric) {
                writeln!(f, "  {:<width$} : {}", user.author, user.get(metric))?;
            }
        }
        Ok(())
    }

    fn media(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Self::header(f, "DETAILED MEDIA STATISTICS")?;
        for breakdown in &self.0.media {
            write!(f, "\n{}:\n", breakdown.author)?;
            let (calls, content): (Vec<&crate::core::stats::KindCount>, Vec<_>) =
                breakdown.kinds.iter().partition(|entry| entry.kind.is_call());
            for entry in content {
                writeln!(f, "  • {} count: {}", entry.kind.label(), entry.count)?;
            }
            writeln!(f, "  Calls:")?;
            for entry in calls {
                writeln!(f, "    • {} count: {}", entry.kind.label(), entry.count)?;
            }
        }
        Ok(())
    }

    fn temporal(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let report = self.0;
        Self::header(f, "TEMPORAL STATISTICS")?;

        Self::subheader(f, "Messages by Day of Week")?;
        for day in &report.weekdays {
            writeln!(f, "  {:<10}: {}", day.weekday, day.count)?;
        }

        Self::subheader(f, "Messages by Hour")?;
        for hour in &report.hours {
            writeln!(f, "  {h:02}:00 - {h:02}:59 : {}", hour.count, h = hour.hour)?;
        }

        Self::subheader(f, "Messages by Month")?;
        for month in &report.months {
            writeln!(f, "  {}: {}", month.month, month.count)?;
        }

        Self::subheader(f, &format!("Most Active {} Days", report.busiest_days.len()))?;
        for day in &report.busiest_days {
            writeln!(f, "  {}: {}", day.date, day.count)?;
        }

        Self::subheader(f, "Users First Message")?;
        for timeline in &report.timelines {
            writeln!(f, "  {}: {}", timeline.author, timeline.first.format(TIMESTAMP_FORMAT))?;
        }

        Self::subheader(f, "Users Last Message")?;
        for timeline in &report.timelines {
            writeln!(f, "  {}: {}", timeline.author, timeline.last.format(TIMESTAMP_FORMAT))?;
        }

        Self::subheader(f, "Activity")?;
        for timeline in &report.timelines {
            writeln!(
                f,
                "  {}: {} active days, {:.1}% participation, {:.2} messages per active day",
                timeline.author,
                timeline.active_days,
                timeline.participation,
                timeline.messages_per_active_day
            )?;
        }
        Ok(())
    }

    fn frequency(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let report = self.0;

        Self::header(f, "MOST USED WORDS")?;
        for word in &report.top_words {
            writeln!(f, "  • {}: {}", word.term, word.count)?;
        }

        Self::header(f, "MOST USED WORDS BY USER")?;
        for user in &report.user_words {
            write!(f, "\n{}:\n", user.author)?;
            for word in &user.terms {
                writeln!(f, "  • {}: {}", word.term, word.count)?;
            }
        }

        Self::header(f, "MOST USED EMOJIS BY USER")?;
        for user in &report.user_emojis {
            write!(f, "\n{}:\n", user.author)?;
            for emoji in &user.terms {
                writeln!(f, "  • {} : {}", emoji.term, emoji.count)?;
            }
        }
        Ok(())
    }
}

impl Display for TextReport<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.summary(f)?;
        self.users(f)?;
        self.media(f)?;
        self.temporal(f)?;
        self.frequency(f)
    }
}
