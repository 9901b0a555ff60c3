use serde_json::json;

use oncall_analysis::export::{write_log, write_table};
use oncall_analysis::pagerduty::AnalyticsRecord;

fn record(range_start: &str, incidents: i64, engaged_seconds: i64) -> AnalyticsRecord {
    AnalyticsRecord {
        range_start: range_start.to_string(),
        total_incident_count: incidents,
        total_business_hour_interruptions: 2,
        total_off_hour_interruptions: 1,
        total_sleep_hour_interruptions: 0,
        total_engaged_seconds: engaged_seconds,
        total_snoozed_seconds: 1800,
    }
}

// The API's leading series element carries no data and must never become a row.
fn placeholder() -> AnalyticsRecord {
    AnalyticsRecord::default()
}

fn data_rows(path: &std::path::Path) -> Vec<csv::StringRecord> {
    let mut reader = csv::Reader::from_path(path).unwrap();
    reader.records().map(|r| r.unwrap()).collect()
}

#[test]
fn append_preserves_existing_rows() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("analytics.csv");

    let first = vec![
        placeholder(),
        record("2026-06-01T00:00:00", 4, 5400),
        record("2026-06-08T00:00:00", 2, 3600),
        record("2026-06-15T00:00:00", 7, 9000),
    ];
    assert_eq!(write_table(&first, &out).unwrap(), 3);

    let second = vec![
        placeholder(),
        record("2026-06-22T00:00:00", 1, 1800),
        record("2026-06-29T00:00:00", 0, 0),
    ];
    assert_eq!(write_table(&second, &out).unwrap(), 2);

    let rows = data_rows(&out);
    assert_eq!(rows.len(), 5);
    let weeks: Vec<&str> = rows.iter().map(|row| &row[0]).collect();
    assert_eq!(
        weeks,
        ["2026-06-01", "2026-06-08", "2026-06-15", "2026-06-22", "2026-06-29"]
    );

    // Header written exactly once, on file creation.
    let raw = std::fs::read_to_string(&out).unwrap();
    assert_eq!(raw.matches("Week Start Date").count(), 1);
}

#[test]
fn rows_carry_the_seven_fixed_columns() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("analytics.csv");

    let series = vec![placeholder(), record("2026-06-01T00:00:00", 4, 5400)];
    write_table(&series, &out).unwrap();

    let rows = data_rows(&out);
    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row.len(), 7);
    assert_eq!(&row[0], "2026-06-01");
    assert_eq!(&row[1], "4");
    assert_eq!(&row[2], "2");
    assert_eq!(&row[3], "1");
    assert_eq!(&row[4], "0");
    assert_eq!(&row[5], "1.5");
    assert_eq!(&row[6], "0.5");
}

#[test]
fn placeholder_only_series_writes_no_rows() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("analytics.csv");

    assert_eq!(write_table(&[placeholder()], &out).unwrap(), 0);
    assert!(data_rows(&out).is_empty());
}

#[test]
fn table_destination_directories_are_created() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("data").join("analytics.csv");

    let series = vec![placeholder(), record("2026-06-01T00:00:00", 1, 0)];
    assert_eq!(write_table(&series, &out).unwrap(), 1);
    assert!(out.exists());
}

#[test]
fn log_export_overwrites_previous_contents() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("incident_log.json");

    let first = vec![json!({"id": "INC-1"}), json!({"id": "INC-2"})];
    write_log(&first, &out).unwrap();

    let second = vec![json!({"id": "INC-3"})];
    write_log(&second, &out).unwrap();

    let raw = std::fs::read_to_string(&out).unwrap();
    let parsed: Vec<serde_json::Value> = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed, second);
}

#[test]
fn log_export_preserves_record_order() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("incident_log.json");

    let records: Vec<_> = (0..5).map(|i| json!({"id": format!("INC-{i}")})).collect();
    write_log(&records, &out).unwrap();

    let raw = std::fs::read_to_string(&out).unwrap();
    let parsed: Vec<serde_json::Value> = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed, records);
}
