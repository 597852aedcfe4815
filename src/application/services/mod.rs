//! Services for the application layer.

pub mod covid_stats_service;
pub mod record_service;

pub use covid_stats_service::CovidStatsService;
pub use record_service::RecordService;
