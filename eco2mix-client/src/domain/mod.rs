pub mod daily_mix;
pub mod grid_record;

pub use daily_mix::DailyMix;
pub use grid_record::{GridRecord, RawRecord};
