//! HTTP surface consumed by the dashboard.
//!
//! Every endpoint answers 200; failures travel inside the JSON payload so the
//! dashboard can show them without special-casing transport errors.

pub mod handlers;

use std::{net::SocketAddr, sync::Arc};

use axum::{
    routing::{get, post},
    Router,
};

use crate::{analysis::Analyzer, source::GridSource};

/// Immutable per-process state shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn GridSource>,
    pub analyzer: Arc<Analyzer>,
    pub default_limit: u32,
}

impl AppState {
    pub fn new(source: Arc<dyn GridSource>, default_limit: u32) -> Self {
        Self {
            source,
            analyzer: Arc::new(Analyzer::new()),
            default_limit,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/analyze", post(handlers::analyze))
        .route("/health", get(handlers::health))
        .route("/data", get(handlers::data))
        .route("/mix", get(handlers::mix))
        .with_state(state)
}

pub async fn serve(bind_addr: &str, state: AppState) -> anyhow::Result<()> {
    let addr: SocketAddr = bind_addr
        .parse()
        .map_err(|e| anyhow::anyhow!("invalid server.bind_addr: {e}"))?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "energy analyst API listening");

    axum::serve(listener, router(state).into_make_service()).await?;
    Ok(())
}
