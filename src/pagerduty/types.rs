use chrono::{DateTime, Duration, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::errors::PagerDutyError;

#[derive(Debug, Clone, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct TeamsResponse {
    pub teams: Vec<Team>,
}

#[derive(Debug, Serialize)]
pub struct AnalyticsFilters {
    pub created_at_start: String,
    pub created_at_end: String,
    pub urgency: String,
    pub team_ids: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalyticsRequest {
    pub filters: AnalyticsFilters,
    pub aggregate_unit: String,
    pub time_zone: String,
}

#[derive(Debug, Deserialize)]
pub struct AnalyticsResponse {
    pub data: Vec<AnalyticsRecord>,
}

/// One weekly aggregate from the analytics endpoint.
///
/// The API's leading series element is a header/placeholder with most
/// fields absent, hence the defaults. Keep it in the series; the table
/// writer is the one place that skips it.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AnalyticsRecord {
    #[serde(default)]
    pub range_start: String,
    #[serde(default)]
    pub total_incident_count: i64,
    #[serde(default)]
    pub total_business_hour_interruptions: i64,
    #[serde(default)]
    pub total_off_hour_interruptions: i64,
    #[serde(default)]
    pub total_sleep_hour_interruptions: i64,
    #[serde(default)]
    pub total_engaged_seconds: i64,
    #[serde(default)]
    pub total_snoozed_seconds: i64,
}

/// Incident-listing envelope. Records stay opaque; only the pagination
/// metadata is interpreted.
#[derive(Debug, Deserialize)]
pub struct IncidentsResponse {
    pub incidents: Vec<serde_json::Value>,
    #[serde(default)]
    pub more: bool,
    #[serde(default)]
    pub offset: u64,
}

/// Inclusive created-at window for both fetchers.
#[derive(Debug, Clone, Copy)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateRange {
    /// Parse optional `YYYY-mm-dd` bounds; start defaults to 12 weeks ago,
    /// end to now.
    pub fn resolve(start: Option<&str>, end: Option<&str>) -> Result<Self, PagerDutyError> {
        let start = match start {
            Some(raw) if !raw.is_empty() => parse_day(raw)?,
            _ => Utc::now() - Duration::weeks(12),
        };
        let end = match end {
            Some(raw) if !raw.is_empty() => parse_day(raw)?,
            _ => Utc::now(),
        };
        Ok(Self { start, end })
    }

    pub fn start_iso(&self) -> String {
        self.start.to_rfc3339_opts(SecondsFormat::Secs, true)
    }

    pub fn end_iso(&self) -> String {
        self.end.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

fn parse_day(raw: &str) -> Result<DateTime<Utc>, PagerDutyError> {
    let day = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| PagerDutyError::InvalidDate(raw.to_string()))?;
    let midnight = day
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| PagerDutyError::InvalidDate(raw.to_string()))?;
    Ok(midnight.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_bounds_parse_to_utc_midnight() {
        let range = DateRange::resolve(Some("2026-01-05"), Some("2026-03-01")).unwrap();
        assert_eq!(range.start_iso(), "2026-01-05T00:00:00Z");
        assert_eq!(range.end_iso(), "2026-03-01T00:00:00Z");
    }

    #[test]
    fn missing_bounds_default_to_twelve_weeks_back_and_now() {
        let range = DateRange::resolve(None, None).unwrap();
        let now = Utc::now();
        let twelve_weeks_back = now - Duration::weeks(12);
        assert!((range.start - twelve_weeks_back).num_seconds().abs() <= 1);
        assert!((range.end - now).num_seconds().abs() <= 1);
    }

    #[test]
    fn empty_strings_behave_like_missing_bounds() {
        let range = DateRange::resolve(Some(""), Some("")).unwrap();
        assert!((range.end - Utc::now()).num_seconds().abs() <= 1);
        assert!(range.start < range.end);
    }

    #[test]
    fn malformed_dates_are_rejected() {
        let err = DateRange::resolve(Some("05/01/2026"), None).unwrap_err();
        assert!(matches!(err, PagerDutyError::InvalidDate(_)));
    }
}
