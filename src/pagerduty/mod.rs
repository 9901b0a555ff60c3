pub mod client;
pub mod errors;
pub mod types;

pub use client::{PagerDutyClient, DEFAULT_PAGE_SIZE};
pub use errors::PagerDutyError;
pub use types::{AnalyticsRecord, DateRange};
