use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    Json,
};
use eco2mix_client::{DailyMix, FetchError};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use time::{format_description::well_known::Rfc3339, macros::format_description, Date, OffsetDateTime};

use super::AppState;
use crate::analysis::{mix::render_daily_mix, AnalysisResult};

pub const SERVICE_ID: &str = "energy-ai-analyst";

/// Echoed as `query` when the request body could not be read.
const UNKNOWN_QUERY: &str = "Unknown";

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub query: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct DataParams {
    pub limit: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
pub struct MixParams {
    /// `YYYY-MM-DD`; today (UTC) when absent.
    pub date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub service: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eco2mix_api: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub async fn root() -> Json<Value> {
    Json(json!({
        "status": "running",
        "service": "France Energy AI",
        "endpoints": {
            "GET /": "This page",
            "POST /analyze": "Analyze energy query",
            "GET /health": "Health check",
            "GET /data": "Get raw energy data",
            "GET /mix": "Daily average energy mix"
        }
    }))
}

pub async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Json<AnalysisResult> {
    metrics::counter!("analyze_requests_total").increment(1);

    let query = match payload {
        Ok(Json(request)) => request.query,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "unreadable analyze request");
            metrics::counter!("analyze_errors_total", "kind" => "validation").increment(1);
            return Json(AnalysisResult::failure(UNKNOWN_QUERY, rejection.body_text()));
        }
    };
    tracing::info!(query = %query, "received query");

    let record = match state.source.latest().await {
        Ok(record) => record,
        Err(e) => {
            record_failure("/analyze", &e);
            return Json(AnalysisResult::failure(query, e.to_string()));
        }
    };

    let (category, result) = state.analyzer.analyze_routed(&query, &record);
    metrics::counter!("analyze_route_total", "category" => category.as_str()).increment(1);
    tracing::info!(
        category = category.as_str(),
        timestamp = %record.timestamp,
        "query analyzed"
    );

    Json(result)
}

pub async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    let report = match state.source.probe().await {
        Ok(connected) => HealthReport {
            status: if connected { "healthy" } else { "degraded" },
            service: SERVICE_ID,
            eco2mix_api: Some(if connected { "connected" } else { "disconnected" }),
            timestamp: Some(now_rfc3339()),
            error: None,
        },
        Err(e) => {
            record_failure("/health", &e);
            HealthReport {
                status: "error",
                service: SERVICE_ID,
                eco2mix_api: None,
                timestamp: None,
                error: Some(e.to_string()),
            }
        }
    };

    Json(report)
}

pub async fn data(
    State(state): State<AppState>,
    params: Result<Query<DataParams>, QueryRejection>,
) -> Json<Value> {
    let limit = match params {
        Ok(Query(params)) => params.limit.unwrap_or(state.default_limit),
        Err(rejection) => {
            tracing::warn!(error = %rejection, "invalid /data parameters");
            return Json(json!({ "status": "error", "message": rejection.body_text() }));
        }
    };

    match state.source.recent(limit).await {
        Ok(records) => Json(json!({
            "status": "success",
            "count": records.len(),
            "data": records,
        })),
        Err(FetchError::Upstream(code)) => {
            record_failure("/data", &FetchError::Upstream(code));
            Json(json!({ "status": "error", "message": format!("API error: {code}") }))
        }
        Err(e) => {
            record_failure("/data", &e);
            Json(json!({ "status": "error", "message": e.to_string() }))
        }
    }
}

pub async fn mix(
    State(state): State<AppState>,
    params: Result<Query<MixParams>, QueryRejection>,
) -> Json<Value> {
    let date = match params.map_err(|r| r.body_text()).and_then(|Query(p)| parse_day(p.date)) {
        Ok(date) => date,
        Err(message) => {
            let e = FetchError::Validation(message);
            record_failure("/mix", &e);
            return Json(json!({ "status": "error", "message": e.to_string() }));
        }
    };
    let label = day_label(date);

    match state.source.day(date).await {
        Ok(records) => {
            let mix = DailyMix::from_records(&records);
            Json(json!({
                "status": "success",
                "date": label,
                "analysis": render_daily_mix(&label, &mix),
                "mix": mix,
            }))
        }
        Err(e) => {
            record_failure("/mix", &e);
            Json(json!({ "status": "error", "message": e.to_string(), "date": label }))
        }
    }
}

fn parse_day(raw: Option<String>) -> Result<Date, String> {
    match raw {
        None => Ok(OffsetDateTime::now_utc().date()),
        Some(raw) => Date::parse(raw.trim(), format_description!("[year]-[month]-[day]"))
            .map_err(|e| format!("invalid date {raw:?}, expected YYYY-MM-DD: {e}")),
    }
}

fn day_label(date: Date) -> String {
    date.format(format_description!("[year]-[month]-[day]"))
        .unwrap_or_else(|_| date.to_string())
}

fn now_rfc3339() -> String {
    let now = OffsetDateTime::now_utc();
    now.format(&Rfc3339).unwrap_or_else(|_| now.to_string())
}

fn record_failure(endpoint: &'static str, e: &FetchError) {
    tracing::warn!(endpoint, kind = e.kind(), error = %e, "request failed");
    metrics::counter!("analyze_errors_total", "kind" => e.kind()).increment(1);
}
