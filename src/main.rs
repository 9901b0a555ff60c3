use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use oncall_analysis::cli::commands::{AnalyticsCommand, ConfigureCommand, IncidentsLogCommand};
use oncall_analysis::cli::{Cli, Commands};
use oncall_analysis::config::ConfigStore;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();
    ConfigStore::load_env_file()?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Analytics {
            start_date,
            end_date,
            out,
        } => tokio::runtime::Runtime::new()?.block_on(async {
            AnalyticsCommand::new(start_date, end_date, out)
                .execute()
                .await
        }),
        Commands::IncidentsLog {
            start_date,
            end_date,
            out,
        } => tokio::runtime::Runtime::new()?.block_on(async {
            IncidentsLogCommand::new(start_date, end_date, out)
                .execute()
                .await
        }),
        Commands::Configure => ConfigureCommand.execute(),
    }
}
