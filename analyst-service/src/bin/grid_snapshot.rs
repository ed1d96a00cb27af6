use anyhow::Result;
use clap::Parser;
use eco2mix_client::Eco2mixClient;
use grid_analyst_service::{analysis::AnalysisResult, config::AppConfig, observability, Analyzer};

/// Fetch the latest French grid record once and print the analysis as JSON.
#[derive(Debug, Parser)]
#[command(name = "grid_snapshot")]
struct Args {
    /// Free-text question, routed by keyword.
    #[arg(default_value = "What is the current energy mix in France?")]
    query: String,

    /// Override the configured upstream records URL.
    #[arg(long)]
    base_url: Option<String>,

    /// Override the configured request timeout.
    #[arg(long)]
    timeout_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    observability::init_tracing();

    let args = Args::parse();
    let mut cfg = AppConfig::load()?;
    if let Some(url) = args.base_url {
        cfg.upstream.base_url = url;
    }
    if let Some(secs) = args.timeout_secs {
        cfg.upstream.timeout_secs = secs;
    }

    let client = Eco2mixClient::new(&cfg.upstream.client_config())?;
    let analyzer = Analyzer::new();

    let result = match client.fetch_latest().await {
        Ok(record) => {
            let (category, result) = analyzer.analyze_routed(&args.query, &record);
            tracing::info!(
                category = category.as_str(),
                timestamp = %record.timestamp,
                "grid snapshot analyzed"
            );
            result
        }
        Err(e) => {
            tracing::warn!(kind = e.kind(), error = %e, "grid snapshot unavailable");
            AnalysisResult::failure(args.query, e.to_string())
        }
    };

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
