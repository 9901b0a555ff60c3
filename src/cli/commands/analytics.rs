use std::path::PathBuf;

use anyhow::{bail, Result};

use crate::config::ConfigStore;
use crate::export::{hours, write_table};
use crate::pagerduty::{DateRange, PagerDutyClient};

pub struct AnalyticsCommand {
    start_date: Option<String>,
    end_date: Option<String>,
    out: PathBuf,
}

impl AnalyticsCommand {
    pub fn new(start_date: Option<String>, end_date: Option<String>, out: PathBuf) -> Self {
        Self {
            start_date,
            end_date,
            out,
        }
    }

    pub async fn execute(&self) -> Result<()> {
        let store = ConfigStore::new();
        let token = store.get_or_prompt("pagerduty.token", true)?;
        let team_name = store.get_or_prompt("pagerduty.team", false)?;
        if token.is_empty() || team_name.is_empty() {
            bail!("pagerduty.token and pagerduty.team must be configured");
        }

        let range = DateRange::resolve(self.start_date.as_deref(), self.end_date.as_deref())?;
        let client = PagerDutyClient::new(token, store.request_timeout()?)?;

        println!(
            "Fetching weekly analytics for '{team_name}' ({} .. {})",
            range.start_iso(),
            range.end_iso()
        );
        let team_id = client.resolve_team_id(&team_name).await?;
        let series = client.fetch_analytics(&team_id, &range).await?;

        // First element is the API's placeholder, not a data week.
        let weeks = series.len().saturating_sub(1);
        println!();
        println!("WEEKLY SUMMARY ({weeks} weeks):");
        for record in series.iter().skip(1) {
            println!(
                "   {}  incidents={}  engaged_hours={}",
                record.range_start,
                record.total_incident_count,
                hours(record.total_engaged_seconds)
            );
        }

        let rows = write_table(&series, &self.out)?;
        println!();
        println!("Wrote {rows} rows. Saved to {}", self.out.display());
        Ok(())
    }
}
