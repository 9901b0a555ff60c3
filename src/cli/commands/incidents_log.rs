use std::path::PathBuf;

use anyhow::{bail, Result};

use crate::config::ConfigStore;
use crate::export::write_log;
use crate::pagerduty::{DateRange, PagerDutyClient, DEFAULT_PAGE_SIZE};

pub struct IncidentsLogCommand {
    start_date: Option<String>,
    end_date: Option<String>,
    out: PathBuf,
}

impl IncidentsLogCommand {
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
            "Fetching incident log for '{team_name}' ({} .. {})",
            range.start_iso(),
            range.end_iso()
        );
        let team_id = client.resolve_team_id(&team_name).await?;
        let incidents = client
            .fetch_incidents(&team_id, &range, DEFAULT_PAGE_SIZE)
            .await?;

        write_log(&incidents, &self.out)?;
        println!();
        println!(
            "Wrote {} incidents. Saved to {}",
            incidents.len(),
            self.out.display()
        );
        Ok(())
    }
}
