pub mod api;
pub mod domain;
pub mod error;

pub use api::{ClientConfig, Eco2mixClient, RecordsPage};
pub use domain::{DailyMix, GridRecord, RawRecord};
pub use error::FetchError;
