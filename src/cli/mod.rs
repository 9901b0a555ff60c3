use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod commands;

#[derive(Parser)]
#[command(name = "oncall-analysis")]
#[command(version)]
#[command(about = "Export PagerDuty incident analytics for offline analysis")]
#[command(long_about = "Pulls one team's incident data from the PagerDuty API and exports it \
                       to local files: weekly analytics as CSV, the raw incident log as JSON. \
                       Run 'oncall-analysis configure' once to set the API token and team name.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch weekly incident analytics and append them to a CSV export
    Analytics {
        /// Range start, format YYYY-mm-dd
        #[arg(long, help = "Range start, format YYYY-mm-dd (default: 12 weeks ago)")]
        start_date: Option<String>,
        /// Range end, format YYYY-mm-dd
        #[arg(long, help = "Range end, format YYYY-mm-dd (default: now)")]
        end_date: Option<String>,
        /// Destination file
        #[arg(long, default_value = "data/analytics.csv", help = "Path where to output the data")]
        out: PathBuf,
    },
    /// Fetch the full incident log and write it to a JSON export
    IncidentsLog {
        /// Range start, format YYYY-mm-dd
        #[arg(long, help = "Range start, format YYYY-mm-dd (default: 12 weeks ago)")]
        start_date: Option<String>,
        /// Range end, format YYYY-mm-dd
        #[arg(long, help = "Range end, format YYYY-mm-dd (default: now)")]
        end_date: Option<String>,
        /// Destination file
        #[arg(
            long,
            default_value = "data/incident_log.json",
            help = "Path where to output the data"
        )]
        out: PathBuf,
    },
    /// Interactively set the PagerDuty API token and team name
    Configure,
}
