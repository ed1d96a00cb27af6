use std::time::{Duration, Instant};

use reqwest::StatusCode;
use serde::Deserialize;
use time::{macros::format_description, Date};

use crate::domain::{grid_record::zero_nulls, GridRecord, RawRecord};
use crate::error::FetchError;

/// Real-time national records, refreshed every 15 minutes by ODRÉ.
pub const DEFAULT_BASE_URL: &str =
    "https://odre.opendatasoft.com/api/explore/v2.1/catalog/datasets/eco2mix-national-tr/records";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// One day of quarter-hour records.
const RECORDS_PER_DAY: u32 = 96;

const ORDER_LATEST_FIRST: &str = "date desc";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Body of a `/records` response. Only `results` is read.
#[derive(Debug, Default, Deserialize)]
pub struct RecordsPage {
    #[serde(default)]
    pub results: Option<Vec<RawRecord>>,
}

impl RecordsPage {
    pub fn from_json(body: &str) -> Result<Self, FetchError> {
        serde_json::from_str(body)
            .map_err(|e| FetchError::Transient(format!("malformed upstream payload: {e}")))
    }

    /// The first record, normalized. Missing or empty `results` is `NoData`.
    pub fn latest(self) -> Result<GridRecord, FetchError> {
        self.results
            .and_then(|results| results.into_iter().next())
            .map(|raw| GridRecord::from_raw(&raw))
            .ok_or(FetchError::NoData)
    }

    pub fn records(self) -> Vec<RawRecord> {
        self.results.unwrap_or_default()
    }
}

/// Client for the eco2mix records endpoint.
///
/// Every call issues exactly one GET bounded by the configured timeout.
/// Nothing is retried; callers decide what to do with a failure.
#[derive(Debug, Clone)]
pub struct Eco2mixClient {
    http: reqwest::Client,
    base_url: String,
}

impl Eco2mixClient {
    pub fn new(config: &ClientConfig) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Most recent record, with nulls normalized.
    pub async fn fetch_latest(&self) -> Result<GridRecord, FetchError> {
        let page = self
            .get_page(&[("limit", "1".to_string()), ("order_by", ORDER_LATEST_FIRST.to_string())])
            .await?;
        page.latest()
    }

    /// The `limit` most recent records with every `null` replaced by `0`.
    pub async fn fetch_recent(&self, limit: u32) -> Result<Vec<RawRecord>, FetchError> {
        let page = self
            .get_page(&[("limit", limit.to_string()), ("order_by", ORDER_LATEST_FIRST.to_string())])
            .await?;
        Ok(page.records().into_iter().map(zero_nulls).collect())
    }

    /// All records of one calendar day, as returned by the provider.
    pub async fn fetch_day(&self, date: Date) -> Result<Vec<RawRecord>, FetchError> {
        let day = date
            .format(format_description!("[year]-[month]-[day]"))
            .map_err(|e| FetchError::Validation(format!("invalid date: {e}")))?;
        let filter = format!("date >= '{day}T00:00:00' and date <= '{day}T23:59:59'");

        let page = self
            .get_page(&[("where", filter), ("limit", RECORDS_PER_DAY.to_string())])
            .await?;
        Ok(page.records())
    }

    /// Liveness probe: `true` when the provider answers 200.
    pub async fn probe(&self) -> Result<bool, FetchError> {
        let response = self.send(&[("limit", "1".to_string())]).await?;
        Ok(response.status() == StatusCode::OK)
    }

    async fn get_page(&self, params: &[(&str, String)]) -> Result<RecordsPage, FetchError> {
        let response = self.send(params).await?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!(status = status.as_u16(), "eco2mix returned non-200 status");
            metrics::counter!("upstream_errors_total", "kind" => "upstream").increment(1);
            return Err(FetchError::Upstream(status.as_u16()));
        }

        let body = response.text().await?;
        RecordsPage::from_json(&body)
    }

    async fn send(&self, params: &[(&str, String)]) -> Result<reqwest::Response, FetchError> {
        metrics::counter!("upstream_requests_total").increment(1);
        let started = Instant::now();

        let result = self.http.get(&self.base_url).query(params).send().await;
        metrics::histogram!("upstream_request_duration_seconds")
            .record(started.elapsed().as_secs_f64());

        result.map_err(|e| {
            tracing::warn!(error = %e, url = %self.base_url, "eco2mix request failed");
            metrics::counter!("upstream_errors_total", "kind" => "transient").increment(1);
            FetchError::from(e)
        })
    }
}
