//! Statistics aggregation.
//!
//! [`ChatReport::build`] folds a record sequence into every grouping the
//! report needs: global totals, per-author rollups and rankings, media
//! breakdown, temporal histograms, activity timelines and word / emoji
//! frequencies. Building never fails; an empty input yields an empty report.
//!
//! - [`users`] - per-author totals, [`Metric`] rankings, media and timelines
//! - [`temporal`] - weekday, hour, month and busiest-date histograms
//! - [`frequency`] - word and emoji rankings
//!
//! # Example
//!
//! ```rust
//! use chatstats::config::ReportConfig;
//! use chatstats::core::stats::{ChatReport, Metric};
//! use chatstats::parser::LogParser;
//!
//! let records = LogParser::new().parse_str(
//!     "[01.02.2023, 10:00:00] Alice: Hello world\n\
//!      [01.02.2023, 10:05:00] Bob: image omitted\n\
//!      [01.02.2023, 10:06:00] Alice: again",
//! )?;
//! let report = ChatReport::build(&records, &ReportConfig::default());
//!
//! assert_eq!(report.totals.messages, 3);
//! assert_eq!(report.totals.media, 1);
//! assert_eq!(report.users_by(Metric::Messages)[0].author, "Alice");
//! # Ok::<(), chatstats::ChatstatsError>(())
//! ```

pub mod frequency;
pub mod temporal;
pub mod users;

use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::debug;

use crate::MessageRecord;
use crate::config::ReportConfig;

pub use frequency::{TermCount, UserTerms};
pub use temporal::{DayCount, HourCount, MonthCount, WeekdayCount};
pub use users::{KindCount, MediaBreakdown, Metric, UserTimeline, UserTotals};

/// Corpus-wide totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub messages: usize,
    pub words: usize,
    pub letters: usize,
    pub media: usize,
    pub emojis: usize,
    pub links: usize,
    /// Distinct authors
    pub authors: usize,
    /// Distinct calendar dates with activity
    pub active_days: usize,
    /// Earliest timestamp; `None` for an empty corpus
    pub first: Option<NaiveDateTime>,
    /// Latest timestamp; `None` for an empty corpus
    pub last: Option<NaiveDateTime>,
}

impl Totals {
    fn from_records(records: &[MessageRecord]) -> Self {
        Self {
            messages: records.len(),
            words: records.iter().map(|r| r.word_count).sum(),
            letters: records.iter().map(|r| r.letter_count).sum(),
            media: records.iter().filter(|r| r.is_media).count(),
            emojis: records.iter().map(MessageRecord::emoji_count).sum(),
            links: records.iter().map(|r| r.link_count).sum(),
            authors: 0,
            active_days: temporal::distinct_days(records),
            first: records.iter().map(|r| r.timestamp).min(),
            last: records.iter().map(|r| r.timestamp).max(),
        }
    }
}

/// Every statistic computed over one record sequence.
///
/// Per-author collections list authors in the order they first appear.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatReport {
    pub totals: Totals,
    pub users: Vec<UserTotals>,
    pub media: Vec<MediaBreakdown>,
    pub weekdays: Vec<WeekdayCount>,
    pub hours: Vec<HourCount>,
    pub months: Vec<MonthCount>,
    pub busiest_days: Vec<DayCount>,
    pub timelines: Vec<UserTimeline>,
    pub top_words: Vec<TermCount>,
    pub user_words: Vec<UserTerms>,
    pub user_emojis: Vec<UserTerms>,
}

impl ChatReport {
    /// Aggregates `records`.
    pub fn build(records: &[MessageRecord], config: &ReportConfig) -> Self {
        let groups = users::group_by_author(records);

        let mut totals = Totals::from_records(records);
        totals.authors = groups.len();

        let report = Self {
            users: users::user_totals(&groups),
            media: users::media_breakdown(&groups),
            weekdays: temporal::weekdays(records),
            hours: temporal::hours(records),
            months: temporal::months(records),
            busiest_days: temporal::busiest_days(records, config.top_days),
            timelines: users::timelines(&groups, totals.active_days),
            top_words: frequency::top_words(records, config.top_words, config.short_word_len),
            user_words: frequency::top_words_by_user(
                records,
                config.top_words_per_user,
                config.short_word_len,
            ),
            user_emojis: frequency::top_emojis_by_user(records, config.top_emojis_per_user),
            totals,
        };

        debug!(
            messages = report.totals.messages,
            authors = report.totals.authors,
            active_days = report.totals.active_days,
            "built chat report"
        );
        report
    }

    /// Returns `true` if the report was built from no records.
    pub fn is_empty(&self) -> bool {
        self.totals.messages == 0
    }

    /// Authors sorted by `metric`, highest first, ties in first-seen order.
    pub fn users_by(&self, metric: Metric) -> Vec<&UserTotals> {
        let mut ranked: Vec<&UserTotals> = self.users.iter().collect();
        ranked.sort_by(|a, b| b.get(metric).cmp(&a.get(metric)));
        ranked
    }

    /// Totals of one author, matched exactly.
    pub fn user(&self, author: &str) -> Option<&UserTotals> {
        self.users.iter().find(|u| u.author == author)
    }

    /// Media breakdown of one author.
    pub fn media_for(&self, author: &str) -> Option<&MediaBreakdown> {
        self.media.iter().find(|m| m.author == author)
    }

    /// Activity timeline of one author.
    pub fn timeline(&self, author: &str) -> Option<&UserTimeline> {
        self.timelines.iter().find(|t| t.author == author)
    }
}
