pub mod records;

pub use records::{ClientConfig, Eco2mixClient, RecordsPage, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
