pub mod analytics;
pub mod configure;
pub mod incidents_log;

pub use analytics::AnalyticsCommand;
pub use configure::ConfigureCommand;
pub use incidents_log::IncidentsLogCommand;
