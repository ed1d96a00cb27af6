//! Keyword routing and metric derivation over a normalized grid record.
//!
//! Submodules:
//! - `routing`: ordered keyword routes and the fallback summary route.
//! - `render`: one text renderer per route.
//! - `mix`: daily energy-mix rendering for `/mix`.

pub mod mix;
pub mod render;
pub mod routing;

use eco2mix_client::GridRecord;
use serde::Serialize;

pub use routing::{Category, Route, ROUTES};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

/// Outcome of one `/analyze` call.
///
/// On success `analysis` and `data` are set; on error only `message` is.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub status: Status,
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<GridRecord>,
}

impl AnalysisResult {
    pub fn success(query: impl Into<String>, analysis: String, record: GridRecord) -> Self {
        Self {
            status: Status::Success,
            query: query.into(),
            analysis: Some(analysis),
            message: None,
            data: Some(record),
        }
    }

    pub fn failure(query: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            query: query.into(),
            analysis: None,
            message: Some(message.into()),
            data: None,
        }
    }
}

/// Routes a query over a fixed, ordered route table.
#[derive(Debug, Clone)]
pub struct Analyzer {
    routes: &'static [Route],
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer {
    pub fn new() -> Self {
        Self { routes: ROUTES }
    }

    pub fn route(&self, query: &str) -> Category {
        routing::select(self.routes, query).category
    }

    pub fn analyze(&self, query: &str, record: &GridRecord) -> AnalysisResult {
        self.analyze_routed(query, record).1
    }

    /// Like [`Analyzer::analyze`], also returning the category that fired.
    pub fn analyze_routed(&self, query: &str, record: &GridRecord) -> (Category, AnalysisResult) {
        let route = routing::select(self.routes, query);
        let analysis = (route.render)(record);
        (
            route.category,
            AnalysisResult::success(query, analysis, record.clone()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record() -> GridRecord {
        GridRecord {
            timestamp: "2024-05-01T10:15:00+00:00".to_string(),
            production_mw: 500.0,
            consumption_mw: 520.0,
            nuclear_mw: 400.0,
            wind_mw: 100.0,
            solar_mw: 50.0,
            hydro_mw: 50.0,
            gas_mw: 0.0,
            carbon_intensity: 50.0,
        }
    }

    #[test]
    fn success_wraps_record_verbatim() {
        let r = record();
        let result = Analyzer::new().analyze("What is the energy mix?", &r);

        assert_eq!(result.status, Status::Success);
        assert_eq!(result.query, "What is the energy mix?");
        assert_eq!(result.data.as_ref(), Some(&r));
        assert!(result.message.is_none());
        let analysis = result.analysis.unwrap();
        assert!(analysis.contains("- Nuclear: 66.7% (400 MW)"));
        assert!(analysis.ends_with("Total: 600 MW"));
    }

    #[test]
    fn analyze_is_deterministic() {
        let analyzer = Analyzer::new();
        let r = record();
        for q in ["nuclear", "compare wind and solar", "carbon", "anything"] {
            assert_eq!(analyzer.analyze(q, &r), analyzer.analyze(q, &r));
        }
    }

    #[test]
    fn wind_beats_solar() {
        let (category, result) = Analyzer::new().analyze_routed("compare wind and solar", &record());
        assert_eq!(category, Category::Wind);
        assert!(result.analysis.unwrap().starts_with("Wind power provides 20.0%"));
    }

    #[test]
    fn route_agrees_with_analysis_category() {
        let analyzer = Analyzer::new();
        let r = record();
        for (query, expected) in [
            ("nuclear or wind?", Category::Nuclear),
            ("compare wind and solar", Category::Wind),
            ("green mix", Category::Renewables),
            ("CO2 and consumption", Category::Carbon),
            ("anything else", Category::Summary),
        ] {
            assert_eq!(analyzer.route(query), expected, "query: {query}");
            assert_eq!(analyzer.analyze_routed(query, &r).0, expected);
        }
    }

    #[test]
    fn carbon_boundary_at_fifty_is_low() {
        let result = Analyzer::new().analyze("carbon", &record());
        assert!(result.analysis.unwrap().contains("Low carbon"));
    }

    #[test]
    fn consumption_deficit_is_importing() {
        let result = Analyzer::new().analyze("consumption vs production", &record());
        assert!(result.analysis.unwrap().contains("Importing 20 MW"));
    }

    #[test]
    fn success_serializes_expected_shape() {
        let result = Analyzer::new().analyze("hello", &record());
        let v = serde_json::to_value(&result).unwrap();

        assert_eq!(v["status"], json!("success"));
        assert_eq!(v["query"], json!("hello"));
        assert!(v["analysis"].is_string());
        assert_eq!(v["data"]["nuclear_MW"], json!(400.0));
        assert!(v.get("message").is_none());
    }

    #[test]
    fn failure_serializes_without_data() {
        let result = AnalysisResult::failure("wind", "No data available from API");
        let v = serde_json::to_value(&result).unwrap();

        assert_eq!(
            v,
            json!({
                "status": "error",
                "query": "wind",
                "message": "No data available from API"
            })
        );
    }
}
