//! HTML rendering handlers.

mod all_countries;
mod country;
mod home;
mod records;

pub use all_countries::all_countries_handler;
pub use country::country_result_handler;
pub use home::home_handler;
pub use records::{
    RECORDS_PATH, add_record_handler, delete_record_handler, my_records_handler,
    record_details_handler,
};
