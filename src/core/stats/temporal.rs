//! Activity histograms over weekday, hour, month and calendar date.

use std::collections::{BTreeMap, HashSet};

use chrono::{Datelike, NaiveDate, Timelike};
use serde::Serialize;

use crate::MessageRecord;
use crate::core::counter::StableCounter;

/// Weekday names, Monday first.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeekdayCount {
    pub weekday: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HourCount {
    pub hour: u32,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthCount {
    /// `YYYY-MM`
    pub month: String,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayCount {
    pub date: NaiveDate,
    pub count: usize,
}

/// Messages per weekday, Monday to Sunday, zero-filled.
pub fn weekdays(records: &[MessageRecord]) -> Vec<WeekdayCount> {
    let mut counts = [0usize; 7];
    for record in records {
        counts[record.timestamp.weekday().num_days_from_monday() as usize] += 1;
    }

    WEEKDAY_NAMES
        .iter()
        .zip(counts)
        .map(|(&weekday, count)| WeekdayCount { weekday, count })
        .collect()
}

/// Messages per hour of day; only hours with activity, ascending.
pub fn hours(records: &[MessageRecord]) -> Vec<HourCount> {
    let mut counts = [0usize; 24];
    for record in records {
        counts[record.timestamp.hour() as usize] += 1;
    }

    (0u32..)
        .zip(counts)
        .filter(|&(_, count)| count > 0)
        .map(|(hour, count)| HourCount { hour, count })
        .collect()
}

/// Messages per calendar month, ascending.
pub fn months(records: &[MessageRecord]) -> Vec<MonthCount> {
    let mut counts: BTreeMap<(i32, u32), usize> = BTreeMap::new();
    for record in records {
        *counts
            .entry((record.timestamp.year(), record.timestamp.month()))
            .or_default() += 1;
    }

    counts
        .into_iter()
        .map(|((year, month), count)| MonthCount {
            month: format!("{year:04}-{month:02}"),
            count,
        })
        .collect()
}

/// The `n` busiest dates, highest count first, ties in first-seen order.
pub fn busiest_days(records: &[MessageRecord], n: usize) -> Vec<DayCount> {
    records
        .iter()
        .map(MessageRecord::date)
        .collect::<StableCounter<NaiveDate>>()
        .most_common(n)
        .into_iter()
        .map(|(date, count)| DayCount { date, count })
        .collect()
}

/// Number of distinct calendar dates with at least one record.
pub fn distinct_days(records: &[MessageRecord]) -> usize {
    records
        .iter()
        .map(MessageRecord::date)
        .collect::<HashSet<_>>()
        .len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn at(s: &str) -> MessageRecord {
        let ts = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
        MessageRecord::new(ts, "Alice", "hi")
    }

    #[test]
    fn test_weekdays_zero_filled() {
        // 2023-02-01 is a Wednesday
        let records = vec![at("2023-02-01 10:00:00"), at("2023-02-01 11:00:00")];
        let days = weekdays(&records);
        assert_eq!(days.len(), 7);
        assert_eq!(days[0], WeekdayCount { weekday: "Monday", count: 0 });
        assert_eq!(days[2], WeekdayCount { weekday: "Wednesday", count: 2 });
        assert_eq!(days[6].weekday, "Sunday");
    }

    #[test]
    fn test_hours_only_active_ascending() {
        let records = vec![
            at("2023-02-01 23:10:00"),
            at("2023-02-01 00:05:00"),
            at("2023-02-02 23:59:59"),
        ];
        assert_eq!(
            hours(&records),
            vec![
                HourCount { hour: 0, count: 1 },
                HourCount { hour: 23, count: 2 }
            ]
        );
    }

    #[test]
    fn test_months_ascending() {
        let records = vec![
            at("2024-01-05 10:00:00"),
            at("2023-12-31 10:00:00"),
            at("2024-01-06 10:00:00"),
        ];
        let months = months(&records);
        assert_eq!(months[0].month, "2023-12");
        assert_eq!(months[1].month, "2024-01");
        assert_eq!(months[1].count, 2);
    }

    #[test]
    fn test_busiest_days_ties_first_seen() {
        let records = vec![
            at("2023-02-03 10:00:00"),
            at("2023-02-01 10:00:00"),
            at("2023-02-02 10:00:00"),
            at("2023-02-02 11:00:00"),
            at("2023-02-01 11:00:00"),
        ];
        let days = busiest_days(&records, 10);
        assert_eq!(days.len(), 3);
        assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2023, 2, 1).unwrap());
        assert_eq!(days[1].date, NaiveDate::from_ymd_opt(2023, 2, 2).unwrap());
        assert_eq!(days[2].count, 1);
        assert_eq!(busiest_days(&records, 1).len(), 1);
    }

    #[test]
    fn test_empty() {
        assert_eq!(weekdays(&[]).iter().map(|d| d.count).sum::<usize>(), 0);
        assert!(hours(&[]).is_empty());
        assert!(months(&[]).is_empty());
        assert!(busiest_days(&[], 10).is_empty());
        assert_eq!(distinct_days(&[]), 0);
    }
}
