//! Form and query payloads accepted by the web pages.

pub mod country_query;
pub mod record_form;

pub use country_query::CountryQuery;
pub use record_form::RecordForm;
