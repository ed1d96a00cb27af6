use std::net::SocketAddr;

use axum::{extract::State, routing::get, Router};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

/// Installs the global Prometheus recorder and serves `/metrics`.
///
/// The listener is bound before returning, so a bad or busy address fails
/// startup instead of being logged from a background task.
pub async fn init(bind_addr: &str) -> anyhow::Result<()> {
    let addr: SocketAddr = bind_addr
        .parse()
        .map_err(|e| anyhow::anyhow!("invalid metrics.bind_addr: {e}"))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    let handle = PrometheusBuilder::new().install_recorder()?;
    let app = exporter_router(handle);

    tracing::info!(%addr, "metrics exporter listening");
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app.into_make_service()).await {
            tracing::error!(error = %e, "metrics exporter stopped");
        }
    });

    Ok(())
}

pub fn exporter_router(handle: PrometheusHandle) -> Router {
    Router::new()
        .route("/metrics", get(render_metrics))
        .with_state(handle)
}

async fn render_metrics(State(handle): State<PrometheusHandle>) -> String {
    handle.render()
}
