pub mod analysis;
pub mod config;
pub mod metrics_server;
pub mod observability;
pub mod server;
pub mod source;

pub use analysis::{AnalysisResult, Analyzer, Category};
pub use server::AppState;
pub use source::GridSource;
