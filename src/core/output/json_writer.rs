//! JSON report writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::core::stats::ChatReport;
use crate::error::Result;

/// Writes the report to `path` as pretty-printed JSON.
///
/// # Format
/// ```json
/// {
///   "totals": {"messages": 3, "first": "2023-02-01T10:00:00", ...},
///   "users": [{"author": "Alice", "messages": 2, ...}],
///   ...
/// }
/// ```
pub fn write_json(report: &ChatReport, path: impl AsRef<Path>) -> Result<()> {
    let json = to_json(report)?;
    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts the report to a pretty-printed JSON string.
pub fn to_json(report: &ChatReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReportConfig;
    use crate::parser::LogParser;
    use tempfile::NamedTempFile;

    fn sample() -> ChatReport {
        let records = LogParser::new()
            .parse_str(
                "[01.02.2023, 10:00:00] Alice: Hello world\n\
                 [01.02.2023, 10:05:00] Bob: Missed voice call",
            )
            .unwrap();
        ChatReport::build(&records, &ReportConfig::default())
    }

    #[test]
    fn test_to_json_fields() {
        let json = to_json(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["totals"]["messages"], 2);
        assert_eq!(value["totals"]["first"], "2023-02-01T10:00:00");
        assert_eq!(value["users"][1]["author"], "Bob");
        assert_eq!(value["weekdays"][2]["weekday"], "Wednesday");
        assert_eq!(value["busiest_days"][0]["date"], "2023-02-01");

        let bob_media = value["media"][1]["kinds"].as_array().unwrap();
        assert!(
            bob_media
                .iter()
                .any(|k| k["kind"] == "missed_voice_call" && k["count"] == 1)
        );
    }

    #[test]
    fn test_empty_report_has_null_range() {
        let json = to_json(&ChatReport::build(&[], &ReportConfig::default())).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["totals"]["first"].is_null());
        assert!(value["totals"]["last"].is_null());
    }

    #[test]
    fn test_write_json() {
        let file = NamedTempFile::new().unwrap();
        write_json(&sample(), file.path()).unwrap();
        let content = std::fs::read_to_string(file.path()).unwrap();
        assert!(content.contains(r#""author": "Alice""#));
    }
}
