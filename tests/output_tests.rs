//! Tests for report renderers (text, Markdown, JSON, CSV)

use chatstats::core::output::{to_markdown, to_text, write_markdown, write_text};
use chatstats::core::stats::ChatReport;
use chatstats::prelude::*;
use std::fs;
use tempfile::tempdir;

const EXPORT: &str = "\
[01.02.2023, 10:00:00] Alice: Hello world, wonderful morning 🎉
[01.02.2023, 10:05:00] Bob: \u{200E}image omitted
[01.02.2023, 10:06:00] Bob: Check https://example.com/page
[02.02.2023, 21:15:00] Alice: wonderful again 🎉🎉
[06.02.2023, 08:00:00] Carol | Team: \u{200E}Missed voice call
";

fn sample_report() -> ChatReport {
    let records = LogParser::new().parse_str(EXPORT).unwrap();
    ChatReport::build(&records, &ReportConfig::default())
}

fn empty_report() -> ChatReport {
    ChatReport::build(&[], &ReportConfig::default())
}

// ============================================================================
// Text Writer Tests
// ============================================================================

mod text_writer_tests {
    use super::*;

    #[test]
    fn test_write_text_basic() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("stats.txt");

        write_text(&sample_report(), &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("CHAT SUMMARY"));
        assert!(content.contains("Date Range    : 2023-02-01 10:00:00  →  2023-02-06 08:00:00"));
        assert!(content.contains("Total Messages:        5"));
        assert!(content.contains("Total Media   :        2"));
    }

    #[test]
    fn test_text_user_rankings() {
        let text = to_text(&sample_report());

        // Alice wrote more words than Bob
        let section = text.split("-- Word Count --").nth(1).unwrap();
        let alice = section.find("Alice").unwrap();
        let bob = section.find("Bob").unwrap();
        assert!(alice < bob);
    }

    #[test]
    fn test_text_media_and_temporal_sections() {
        let text = to_text(&sample_report());

        assert!(text.contains("• Image count: 1"));
        assert!(text.contains("• Missed Voice Call count: 1"));
        assert!(text.contains("  Wednesday : 3"));
        assert!(text.contains("  10:00 - 10:59 : 3"));
        assert!(text.contains("  2023-02: 5"));
        assert!(text.contains("Most Active 3 Days"));
        assert!(text.contains("  2023-02-01: 3"));
    }

    #[test]
    fn test_text_calls_grouped_per_author() {
        let text = to_text(&sample_report());
        let carol = text.split("\nCarol | Team:\n").nth(1).unwrap();
        let carol = carol.split("\n\n").next().unwrap();

        assert!(carol.contains("  • Image count: 0"));
        assert!(carol.contains("  Calls:\n    • Voice Call count: 1"));
        assert!(carol.contains("    • Missed Voice Call count: 1"));
    }

    #[test]
    fn test_text_frequency_sections() {
        let text = to_text(&sample_report());

        assert!(text.contains("MOST USED WORDS"));
        assert!(text.contains("• wonderful: 2"));
        assert!(text.contains("• 🎉 : 3"));
    }

    #[test]
    fn test_text_empty_report() {
        let text = to_text(&empty_report());

        assert!(text.contains("Date Range    : n/a  →  n/a"));
        assert!(text.contains("Total Messages:        0"));
        assert!(text.contains("Most Active 0 Days"));
    }

    #[test]
    fn test_write_text_invalid_path() {
        let result = write_text(&sample_report(), "/nonexistent/directory/stats.txt");
        assert!(result.unwrap_err().is_io());
    }
}

// ============================================================================
// Markdown Writer Tests
// ============================================================================

mod markdown_writer_tests {
    use super::*;

    #[test]
    fn test_write_markdown_basic() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("stats.md");

        write_markdown(&sample_report(), &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("# Chat Statistics"));
        assert!(content.contains("## Users"));
        assert!(content.contains("| Messages | 5 |"));
    }

    #[test]
    fn test_markdown_escapes_pipes() {
        let md = to_markdown(&sample_report());
        assert!(md.contains("Carol \\| Team"));
    }

    #[test]
    fn test_markdown_media_rows_skip_zero() {
        let md = to_markdown(&sample_report());
        assert!(md.contains("| Bob | Image | 1 |"));
        assert!(!md.contains("| Bob | Video |"));
    }

    #[test]
    fn test_markdown_empty_report() {
        let md = to_markdown(&empty_report());
        assert!(md.contains("**Date range:** n/a → n/a"));
        assert!(md.contains("| Messages | 0 |"));
    }
}

// ============================================================================
// JSON Writer Tests
// ============================================================================

#[cfg(feature = "json-output")]
mod json_writer_tests {
    use super::*;

    #[test]
    fn test_write_json_basic() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("stats.json");

        write_json(&sample_report(), &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed["totals"]["messages"], 5);
        assert_eq!(parsed["totals"]["authors"], 3);
        assert_eq!(parsed["users"][0]["author"], "Alice");
        assert_eq!(parsed["weekdays"].as_array().unwrap().len(), 7);
    }

    #[test]
    fn test_json_media_kinds_snake_case() {
        let json = to_json(&sample_report()).unwrap();
        assert!(json.contains("\"missed_voice_call\""));
        assert!(json.contains("\"image\""));
    }

    #[test]
    fn test_json_empty_report_has_null_range() {
        let parsed: serde_json::Value =
            serde_json::from_str(&to_json(&empty_report()).unwrap()).unwrap();
        assert!(parsed["totals"]["first"].is_null());
        assert!(parsed["totals"]["last"].is_null());
        assert_eq!(parsed["users"].as_array().unwrap().len(), 0);
    }
}

// ============================================================================
// CSV Writer Tests
// ============================================================================

#[cfg(feature = "csv-output")]
mod csv_writer_tests {
    use super::*;

    #[test]
    fn test_write_csv_basic() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("stats.csv");

        write_csv(&sample_report(), &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Author;Messages;Words"));
        assert!(lines[1].starts_with("Alice;2;"));
    }

    #[test]
    fn test_csv_readable_with_semicolon_delimiter() {
        let csv_text = to_csv(&sample_report()).unwrap();
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b';')
            .from_reader(csv_text.as_bytes());

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[1][0], "Bob");
        assert_eq!(&rows[1][4], "1");
        assert_eq!(&rows[1][6], "1");
        assert_eq!(&rows[0][10], "66.7");
    }

    #[test]
    fn test_csv_empty_report_header_only() {
        let csv_text = to_csv(&empty_report()).unwrap();
        assert_eq!(csv_text.lines().count(), 1);
    }
}

// ============================================================================
// Format Dispatch Tests
// ============================================================================

mod format_dispatch_tests {
    use super::*;

    #[test]
    fn test_write_to_format_matches_to_format_string() {
        let dir = tempdir().unwrap();
        let report = sample_report();

        for &format in ReportFormat::all() {
            let path = dir.path().join(format!("stats.{}", format.extension()));
            match write_to_format(&report, &path, format) {
                Ok(()) => {
                    let written = fs::read_to_string(&path).unwrap();
                    assert_eq!(written, to_format_string(&report, format).unwrap());
                }
                Err(e) => assert!(e.is_invalid_format()),
            }
        }
    }

    #[test]
    fn test_format_from_output_path() {
        assert_eq!(ReportFormat::from_path("out.MD").unwrap(), ReportFormat::Markdown);
        assert_eq!(ReportFormat::from_path("dir/stats.csv").unwrap(), ReportFormat::Csv);
        assert!(ReportFormat::from_path("stats.pdf").unwrap_err().is_invalid_format());
        assert!(ReportFormat::from_path("stats").is_err());
    }
}
