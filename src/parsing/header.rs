//! Header line recognition.
//!
//! A header starts a new message:
//!
//! ```text
//! [15.01.2024, 10:30:45] Alice: Hello
//! [5.1.2024 09:00:00] Bob: older exports omit the comma
//! ```

use std::sync::OnceLock;

use chrono::NaiveDateTime;
use regex::Regex;

use crate::locale::Locale;

fn header_re() -> &'static Regex {
    static HEADER_RE: OnceLock<Regex> = OnceLock::new();
    HEADER_RE.get_or_init(|| {
        // Author ends at the first ": ", bodies may contain colons
        Regex::new(r"^\[(\d{1,2}\.\d{1,2}\.\d{4}),? (\d{2}:\d{2}:\d{2})\] (.+?): (.*)$")
            .expect("valid header regex")
    })
}

/// The pieces of a header line. Borrowed from the cleaned line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header<'a> {
    pub date: &'a str,
    pub time: &'a str,
    pub author: &'a str,
    pub body: &'a str,
}

impl Header<'_> {
    /// The timestamp token as it appears in the export.
    pub fn timestamp_str(&self) -> String {
        format!("{}, {}", self.date, self.time)
    }
}

/// Splits a cleaned line into header parts, or `None` for continuation lines.
pub fn split_header(line: &str) -> Option<Header<'_>> {
    let caps = header_re().captures(line)?;
    Some(Header {
        date: caps.get(1)?.as_str(),
        time: caps.get(2)?.as_str(),
        author: caps.get(3)?.as_str(),
        body: caps.get(4).map_or("", |m| m.as_str()),
    })
}

/// Parses a header timestamp with the first locale whose format accepts it.
pub fn parse_timestamp(date: &str, time: &str, locales: &[Locale]) -> Option<NaiveDateTime> {
    let datetime_str = format!("{date} {time}");

    locales
        .iter()
        .flat_map(|locale| locale.timestamp_formats())
        .find_map(|format| NaiveDateTime::parse_from_str(&datetime_str, format).ok())
}
