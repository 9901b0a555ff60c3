use anyhow::Result;

use crate::config::ConfigStore;

pub struct ConfigureCommand;

impl ConfigureCommand {
    pub fn execute(&self) -> Result<()> {
        println!("ONCALL-ANALYSIS CONFIGURATION");
        println!("=============================");
        println!();

        let store = ConfigStore::new();
        let token = store.get_or_prompt("pagerduty.token", true)?;
        let team = store.get_or_prompt("pagerduty.team", false)?;

        println!();
        if token.is_empty() {
            println!("No API token set. Reports will prompt for one on first use.");
        } else {
            println!("API token configured.");
        }
        if team.is_empty() {
            println!("No team set. Reports will prompt for one on first use.");
        } else {
            println!("Team: {team}");
        }
        Ok(())
    }
}
