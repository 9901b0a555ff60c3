// oncall-analysis library - PagerDuty incident export pipeline
// Exposed so integration tests can exercise components directly.

pub mod cli;
pub mod config;
pub mod export;
pub mod pagerduty;

// Re-export key types for easy access
pub use config::{ConfigStore, InteractivePrompter, Prompter};
pub use export::{write_log, write_table};
pub use pagerduty::{AnalyticsRecord, DateRange, PagerDutyClient, PagerDutyError};
