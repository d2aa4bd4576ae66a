//! Word and emoji frequency rankings.
//!
//! Words come from non-media records only, with links removed and the text
//! lowercased; a word is a maximal run of Unicode word characters.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use super::users::group_by_author;
use crate::MessageRecord;
use crate::core::counter::StableCounter;
use crate::parsing::text;

fn word_re() -> &'static Regex {
    static WORD_RE: OnceLock<Regex> = OnceLock::new();
    WORD_RE.get_or_init(|| Regex::new(r"\w+").expect("valid word regex"))
}

/// A ranked word or emoji.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermCount {
    pub term: String,
    pub count: usize,
}

/// One author's ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserTerms {
    pub author: String,
    pub terms: Vec<TermCount>,
}

/// Lowercased words of `body` longer than `short_len` characters, links removed.
pub fn words(body: &str, short_len: usize) -> Vec<String> {
    let lowered = text::strip_links(body).to_lowercase();
    word_re()
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|word| word.chars().count() > short_len)
        .map(str::to_string)
        .collect()
}

fn count_words<'a>(
    records: impl IntoIterator<Item = &'a MessageRecord>,
    short_len: usize,
) -> StableCounter<String> {
    let mut counter = StableCounter::new();
    for record in records.into_iter().filter(|r| !r.is_media) {
        counter.extend(words(record.body(), short_len));
    }
    counter
}

fn ranked(counter: &StableCounter<String>, n: usize) -> Vec<TermCount> {
    counter
        .most_common(n)
        .into_iter()
        .map(|(term, count)| TermCount { term, count })
        .collect()
}

/// Most frequent words over the whole corpus.
pub fn top_words(records: &[MessageRecord], n: usize, short_len: usize) -> Vec<TermCount> {
    ranked(&count_words(records, short_len), n)
}

/// Most frequent words per author, in first-seen author order.
///
/// Every author is listed, even one whose ranking is empty.
pub fn top_words_by_user(records: &[MessageRecord], n: usize, short_len: usize) -> Vec<UserTerms> {
    group_by_author(records)
        .into_iter()
        .map(|(author, records)| UserTerms {
            author: author.to_string(),
            terms: ranked(&count_words(records, short_len), n),
        })
        .collect()
}

/// Most frequent emoji per author. Authors without any emoji are omitted.
pub fn top_emojis_by_user(records: &[MessageRecord], n: usize) -> Vec<UserTerms> {
    group_by_author(records)
        .into_iter()
        .filter_map(|(author, records)| {
            let counter: StableCounter<String> = records
                .iter()
                .flat_map(|r| r.emoji_occurrences.iter().cloned())
                .collect();
            if counter.is_empty() {
                return None;
            }
            Some(UserTerms {
                author: author.to_string(),
                terms: ranked(&counter, n),
            })
        })
        .collect()
}
