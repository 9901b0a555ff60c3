use std::time::Duration;

use reqwest::header;

use super::errors::PagerDutyError;
use super::types::{
    AnalyticsFilters, AnalyticsRecord, AnalyticsRequest, AnalyticsResponse, DateRange,
    IncidentsResponse, TeamsResponse,
};

const DEFAULT_BASE_URL: &str = "https://api.pagerduty.com";
const ACCEPT_V2: &str = "application/vnd.pagerduty+json;version=2";

/// Incident pages fetched per request.
pub const DEFAULT_PAGE_SIZE: u64 = 100;

/// Thin client over the three PagerDuty endpoints this tool consumes:
/// team search, weekly aggregated incident metrics, and the paginated
/// incident listing.
pub struct PagerDutyClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl PagerDutyClient {
    pub fn new(token: String, timeout: Duration) -> Result<Self, PagerDutyError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
            token,
        })
    }

    /// Point the client at a different API root (mock servers in tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Resolve a team display name to its stable identifier.
    ///
    /// The search endpoint does free-text matching, so the result list is
    /// scanned for the first case-insensitive exact name match; API order
    /// decides ties between duplicate names.
    pub async fn resolve_team_id(&self, team_name: &str) -> Result<String, PagerDutyError> {
        let response = self
            .authed(self.http.get(format!("{}/teams", self.base_url)))
            .query(&[("query", team_name)])
            .send()
            .await?;
        let response = Self::checked("/teams", response).await?;
        let parsed: TeamsResponse = response.json().await?;

        let wanted = team_name.to_lowercase();
        parsed
            .teams
            .into_iter()
            .find(|team| team.name.to_lowercase() == wanted)
            .map(|team| team.id)
            .ok_or_else(|| PagerDutyError::TeamNotFound(team_name.to_string()))
    }

    /// Fetch the weekly aggregated metrics series for one team, high
    /// urgency only, UTC week buckets.
    ///
    /// The returned series keeps the API's leading placeholder element.
    pub async fn fetch_analytics(
        &self,
        team_id: &str,
        range: &DateRange,
    ) -> Result<Vec<AnalyticsRecord>, PagerDutyError> {
        let body = AnalyticsRequest {
            filters: AnalyticsFilters {
                created_at_start: range.start_iso(),
                created_at_end: range.end_iso(),
                urgency: "high".to_string(),
                team_ids: vec![team_id.to_string()],
            },
            aggregate_unit: "week".to_string(),
            time_zone: "Etc/UTC".to_string(),
        };

        let endpoint = "/analytics/metrics/incidents/teams";
        let response = self
            .authed(self.http.post(format!("{}{}", self.base_url, endpoint)))
            .json(&body)
            .send()
            .await?;
        let response = Self::checked(endpoint, response).await?;
        let parsed: AnalyticsResponse = response.json().await?;
        Ok(parsed.data)
    }

    /// Fetch the full incident listing for one team across the range,
    /// following the `more` flag page by page.
    ///
    /// Iterative on purpose: large incident histories would otherwise grow
    /// the call stack with the page count. Records accumulate in page
    /// order, API order preserved within a page.
    pub async fn fetch_incidents(
        &self,
        team_id: &str,
        range: &DateRange,
        page_size: u64,
    ) -> Result<Vec<serde_json::Value>, PagerDutyError> {
        let mut records = Vec::new();
        let mut offset: u64 = 0;

        loop {
            // Operator-facing progress, one line per page.
            println!("Fetching incidents offset={offset}");
            tracing::debug!(offset, page_size, "requesting incident page");

            let response = self
                .authed(self.http.get(format!("{}/incidents", self.base_url)))
                .query(&[
                    ("since", range.start_iso()),
                    ("until", range.end_iso()),
                    ("team_ids[]", team_id.to_string()),
                    ("offset", offset.to_string()),
                    ("total", "true".to_string()),
                    ("limit", page_size.to_string()),
                ])
                .send()
                .await?;
            let response = Self::checked("/incidents", response).await?;
            let page: IncidentsResponse = response.json().await?;

            records.extend(page.incidents);
            if !page.more {
                break;
            }
            offset = page.offset + page_size;
        }

        Ok(records)
    }

    fn authed(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header(header::ACCEPT, ACCEPT_V2)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::AUTHORIZATION, format!("Token token={}", self.token))
            .header("X-EARLY-ACCESS", "analytics-v2")
    }

    async fn checked(
        endpoint: &'static str,
        response: reqwest::Response,
    ) -> Result<reqwest::Response, PagerDutyError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PagerDutyError::Api {
                endpoint,
                status,
                body,
            });
        }
        Ok(response)
    }
}
