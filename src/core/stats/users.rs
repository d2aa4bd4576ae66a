//! Per-author rollups: totals, media breakdown and activity timeline.

use std::collections::{HashMap, HashSet};

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::MessageRecord;
use crate::parsing::MediaKind;

/// Totals for one author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserTotals {
    pub author: String,
    pub messages: usize,
    pub words: usize,
    pub letters: usize,
    pub media: usize,
    pub emojis: usize,
    pub links: usize,
}

impl UserTotals {
    fn new(author: &str) -> Self {
        Self {
            author: author.to_string(),
            messages: 0,
            words: 0,
            letters: 0,
            media: 0,
            emojis: 0,
            links: 0,
        }
    }

    fn add(&mut self, record: &MessageRecord) {
        self.messages += 1;
        self.words += record.word_count;
        self.letters += record.letter_count;
        self.media += usize::from(record.is_media);
        self.emojis += record.emoji_count();
        self.links += record.link_count;
    }

    /// Value of `metric` for this author.
    pub fn get(&self, metric: Metric) -> usize {
        match metric {
            Metric::Messages => self.messages,
            Metric::Words => self.words,
            Metric::Letters => self.letters,
            Metric::Media => self.media,
            Metric::Emojis => self.emojis,
            Metric::Links => self.links,
        }
    }
}

/// A per-author quantity that authors can be ranked by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Messages,
    Words,
    Letters,
    Media,
    Emojis,
    Links,
}

impl Metric {
    /// Returns all metrics in report order.
    pub fn all() -> &'static [Metric] {
        &[
            Metric::Messages,
            Metric::Words,
            Metric::Letters,
            Metric::Media,
            Metric::Emojis,
            Metric::Links,
        ]
    }

    /// Section title used by the renderers.
    pub fn label(self) -> &'static str {
        match self {
            Metric::Messages => "Message Count",
            Metric::Words => "Word Count",
            Metric::Letters => "Letter Count",
            Metric::Media => "Media",
            Metric::Emojis => "Emoji",
            Metric::Links => "Link",
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Number of an author's records matching one media category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KindCount {
    pub kind: MediaKind,
    pub count: usize,
}

/// Media counts of one author for every [`MediaKind`], zeros included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaBreakdown {
    pub author: String,
    pub kinds: Vec<KindCount>,
}

impl MediaBreakdown {
    fn new(author: &str) -> Self {
        Self {
            author: author.to_string(),
            kinds: MediaKind::all()
                .iter()
                .map(|&kind| KindCount { kind, count: 0 })
                .collect(),
        }
    }

    /// Count for `kind`.
    pub fn get(&self, kind: MediaKind) -> usize {
        self.kinds
            .iter()
            .find(|k| k.kind == kind)
            .map_or(0, |k| k.count)
    }

    /// Sum over all categories. May exceed the author's media total since
    /// one record can match several categories.
    pub fn total(&self) -> usize {
        self.kinds.iter().map(|k| k.count).sum()
    }
}

/// When an author was active.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserTimeline {
    pub author: String,
    pub first: NaiveDateTime,
    pub last: NaiveDateTime,
    /// Distinct dates with at least one record from the author
    pub active_days: usize,
    /// `active_days` as a percentage of the distinct dates in the corpus
    pub participation: f64,
    /// Author's messages divided by `active_days`
    pub messages_per_active_day: f64,
}

/// Groups records by author, preserving first-seen author order.
pub(super) fn group_by_author(records: &[MessageRecord]) -> Vec<(&str, Vec<&MessageRecord>)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, Vec<&MessageRecord>)> = Vec::new();

    for record in records {
        let slot = *index.entry(record.author.as_str()).or_insert_with(|| {
            groups.push((record.author.as_str(), Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(record);
    }

    groups
}

pub(super) fn user_totals(groups: &[(&str, Vec<&MessageRecord>)]) -> Vec<UserTotals> {
    groups
        .iter()
        .map(|(author, records)| {
            let mut totals = UserTotals::new(author);
            for record in records {
                totals.add(record);
            }
            totals
        })
        .collect()
}

pub(super) fn media_breakdown(groups: &[(&str, Vec<&MessageRecord>)]) -> Vec<MediaBreakdown> {
    groups
        .iter()
        .map(|(author, records)| {
            let mut breakdown = MediaBreakdown::new(author);
            for record in records {
                for entry in &mut breakdown.kinds {
                    if record.has_media_kind(entry.kind) {
                        entry.count += 1;
                    }
                }
            }
            breakdown
        })
        .collect()
}

pub(super) fn timelines(
    groups: &[(&str, Vec<&MessageRecord>)],
    corpus_days: usize,
) -> Vec<UserTimeline> {
    groups
        .iter()
        .filter_map(|(author, records)| {
            let first = records.iter().map(|r| r.timestamp).min()?;
            let last = records.iter().map(|r| r.timestamp).max()?;
            let active_days = records
                .iter()
                .map(|r| r.date())
                .collect::<HashSet<NaiveDate>>()
                .len();

            Some(UserTimeline {
                author: (*author).to_string(),
                first,
                last,
                active_days,
                participation: ratio(active_days, corpus_days) * 100.0,
                messages_per_active_day: ratio(records.len(), active_days),
            })
        })
        .collect()
}

#[allow(clippy::cast_precision_loss)]
fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    numerator as f64 / denominator as f64
}
