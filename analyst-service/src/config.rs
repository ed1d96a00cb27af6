use serde::Deserialize;
use std::{fs, path::Path, time::Duration};

use eco2mix_client::api::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

pub const CONFIG_ENV: &str = "ANALYST_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "analyst-config.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8001".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
        }
    }
}

impl UpstreamConfig {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Records returned by `/data` when no `limit` is given.
    pub default_limit: u32,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self { default_limit: 3 }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MetricsConfig {
    pub bind_addr: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    pub data: DataConfig,
    pub metrics: Option<MetricsConfig>,
}

impl AppConfig {
    /// Reads `$ANALYST_CONFIG`, or `analyst-config.toml` when unset.
    ///
    /// A missing default file means built-in defaults; a missing file that
    /// was named explicitly is an error.
    pub fn load() -> anyhow::Result<Self> {
        use std::env;

        match env::var(CONFIG_ENV) {
            Ok(path) => Self::from_path(&path),
            Err(_) if !Path::new(DEFAULT_CONFIG_PATH).exists() => {
                tracing::info!(path = DEFAULT_CONFIG_PATH, "config file not found, using defaults");
                Ok(Self::default())
            }
            Err(_) => Self::from_path(DEFAULT_CONFIG_PATH),
        }
    }

    pub fn from_path(path: &str) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config {path}: {e}"))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> anyhow::Result<Self> {
        let cfg: AppConfig = toml::from_str(contents)?;
        Ok(cfg)
    }
}
