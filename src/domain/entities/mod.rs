//! Data shapes of the application.
//!
//! - [`SavedRecord`] / [`NewRecord`] - rows of the `covid` table
//! - [`upstream`] - JSON bodies of the statistics API
//! - [`view`] - flat records rendered by the statistics pages, with their mappers

pub mod record;
pub mod upstream;
pub mod view;

pub use record::{NewRecord, SavedRecord};
pub use upstream::{CountryDay, CountrySummary, GlobalSummary, WorldTotals};
pub use view::{
    CountrySummaryRecord, PerDayCountryRecord, to_country_summary_record,
    to_per_day_country_record,
};
