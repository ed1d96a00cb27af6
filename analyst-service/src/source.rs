use eco2mix_client::{Eco2mixClient, FetchError, GridRecord, RawRecord};
use time::Date;

/// Where grid records come from. The HTTP handlers only see this trait.
#[async_trait::async_trait]
pub trait GridSource: Send + Sync {
    async fn latest(&self) -> Result<GridRecord, FetchError>;

    async fn recent(&self, limit: u32) -> Result<Vec<RawRecord>, FetchError>;

    async fn day(&self, date: Date) -> Result<Vec<RawRecord>, FetchError>;

    /// `Ok(true)` when the provider answered 200.
    async fn probe(&self) -> Result<bool, FetchError>;
}

#[async_trait::async_trait]
impl GridSource for Eco2mixClient {
    async fn latest(&self) -> Result<GridRecord, FetchError> {
        self.fetch_latest().await
    }

    async fn recent(&self, limit: u32) -> Result<Vec<RawRecord>, FetchError> {
        self.fetch_recent(limit).await
    }

    async fn day(&self, date: Date) -> Result<Vec<RawRecord>, FetchError> {
        self.fetch_day(date).await
    }

    async fn probe(&self) -> Result<bool, FetchError> {
        Eco2mixClient::probe(self).await
    }
}
