use std::fs::OpenOptions;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;

use crate::pagerduty::AnalyticsRecord;

/// Column names, written once when the destination file is created.
pub const TABLE_HEADER: [&str; 7] = [
    "Week Start Date",
    "Incidents Count",
    "Business-hour Interruptions",
    "Off-hour Interruptions",
    "Sleep-hour Interruptions",
    "Engaged hours",
    "Snoozed hours",
];

/// Append the analytics series to a CSV file as fixed 7-column rows,
/// returning the number of data rows written.
///
/// The series' first element is the API's header placeholder and is never
/// materialized as a row. Existing rows in the destination are preserved;
/// new rows land below them. A fresh file gets the header row exactly once.
pub fn write_table(series: &[AnalyticsRecord], destination: &Path) -> Result<usize> {
    if let Some(parent) = destination.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }

    let fresh = !destination.exists();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(destination)
        .with_context(|| format!("failed to open {}", destination.display()))?;
    let mut writer = csv::Writer::from_writer(file);

    if fresh {
        writer.write_record(TABLE_HEADER)?;
    }

    let mut written = 0;
    for record in series.iter().skip(1) {
        let week_start = NaiveDateTime::parse_from_str(&record.range_start, "%Y-%m-%dT%H:%M:%S")
            .with_context(|| format!("unparseable week start '{}'", record.range_start))?;
        writer.write_record(&[
            week_start.format("%Y-%m-%d").to_string(),
            record.total_incident_count.to_string(),
            record.total_business_hour_interruptions.to_string(),
            record.total_off_hour_interruptions.to_string(),
            record.total_sleep_hour_interruptions.to_string(),
            hours(record.total_engaged_seconds).to_string(),
            hours(record.total_snoozed_seconds).to_string(),
        ])?;
        written += 1;
    }

    writer
        .flush()
        .with_context(|| format!("failed to write {}", destination.display()))?;
    Ok(written)
}

/// Seconds to hours, rounded to two decimals.
pub fn hours(seconds: i64) -> f64 {
    (seconds as f64 / 3600.0 * 100.0).round() / 100.0
}
