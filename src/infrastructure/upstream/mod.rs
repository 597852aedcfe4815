//! Clients for the third-party statistics API.

pub mod covid19_api;

pub use covid19_api::Covid19ApiClient;
