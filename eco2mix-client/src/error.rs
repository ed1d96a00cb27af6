/// Failures raised while talking to the eco2mix open-data API.
///
/// The `Display` text of each variant is what ends up in the `message` field
/// of error payloads, so it is kept short and user-facing.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// Non-200 HTTP response from the provider.
    #[error("API returned status {0}")]
    Upstream(u16),
    /// The `results` array was missing or empty.
    #[error("No data available from API")]
    NoData,
    /// Timeout, connection failure or an undecodable body.
    #[error("{0}")]
    Transient(String),
    /// Caller-supplied input that cannot be turned into a request.
    #[error("{0}")]
    Validation(String),
}

impl FetchError {
    /// Stable label used for metrics and structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Upstream(_) => "upstream",
            FetchError::NoData => "no_data",
            FetchError::Transient(_) => "transient",
            FetchError::Validation(_) => "validation",
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        FetchError::Transient(e.to_string())
    }
}
