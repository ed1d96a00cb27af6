use std::sync::Arc;

use anyhow::Result;
use eco2mix_client::Eco2mixClient;
use grid_analyst_service::{config::AppConfig, metrics_server, observability, server, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    observability::init_tracing();

    // Load configuration
    let cfg = AppConfig::load()?;

    // Start metrics server if configured
    if let Some(metrics_cfg) = &cfg.metrics {
        metrics_server::init(&metrics_cfg.bind_addr).await?;
    }

    let client = Eco2mixClient::new(&cfg.upstream.client_config())?;
    tracing::info!(
        upstream = %client.base_url(),
        timeout_secs = cfg.upstream.timeout_secs,
        "starting France energy analyst API"
    );

    let state = AppState::new(Arc::new(client), cfg.data.default_limit);
    server::serve(&cfg.server.bind_addr, state).await
}
