use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One upstream record exactly as the provider returned it.
pub type RawRecord = Map<String, Value>;

/// Timestamp used when the upstream record carries no `date`.
pub const MISSING_TIMESTAMP: &str = "N/A";

/// Upstream (French) field names of the eco2mix-national-tr dataset.
pub mod fields {
    pub const DATE: &str = "date";
    pub const PRODUCTION: &str = "production";
    pub const CONSUMPTION: &str = "consommation";
    pub const NUCLEAR: &str = "nucleaire";
    pub const WIND: &str = "eolien";
    pub const SOLAR: &str = "solaire";
    pub const HYDRO: &str = "hydraulique";
    pub const GAS: &str = "gaz";
    pub const CARBON_INTENSITY: &str = "taux_co2";
}

/// A normalized snapshot of national grid metrics.
///
/// Every numeric field is a finite `f64`; anything the provider left out,
/// sent as `null`, or sent in a shape that is not a number becomes `0.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridRecord {
    pub timestamp: String,
    #[serde(rename = "production_MW")]
    pub production_mw: f64,
    #[serde(rename = "consumption_MW")]
    pub consumption_mw: f64,
    #[serde(rename = "nuclear_MW")]
    pub nuclear_mw: f64,
    #[serde(rename = "wind_MW")]
    pub wind_mw: f64,
    #[serde(rename = "solar_MW")]
    pub solar_mw: f64,
    #[serde(rename = "hydro_MW")]
    pub hydro_mw: f64,
    #[serde(rename = "gas_MW")]
    pub gas_mw: f64,
    pub carbon_intensity: f64,
}

impl GridRecord {
    pub fn from_raw(raw: &RawRecord) -> Self {
        let timestamp = match raw.get(fields::DATE) {
            Some(Value::String(s)) => s.clone(),
            _ => MISSING_TIMESTAMP.to_string(),
        };

        GridRecord {
            timestamp,
            production_mw: numeric_field(raw, fields::PRODUCTION),
            consumption_mw: numeric_field(raw, fields::CONSUMPTION),
            nuclear_mw: numeric_field(raw, fields::NUCLEAR),
            wind_mw: numeric_field(raw, fields::WIND),
            solar_mw: numeric_field(raw, fields::SOLAR),
            hydro_mw: numeric_field(raw, fields::HYDRO),
            gas_mw: numeric_field(raw, fields::GAS),
            carbon_intensity: numeric_field(raw, fields::CARBON_INTENSITY),
        }
    }
}

/// Reads `key` as a finite number, falling back to `0.0`.
pub fn numeric_field(raw: &RawRecord, key: &str) -> f64 {
    raw.get(key).and_then(finite_number).unwrap_or(0.0)
}

/// Numbers and numeric strings; everything else (including NaN and
/// infinities) is rejected.
pub fn finite_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    n.is_finite().then_some(n)
}

/// Replaces every `null` with `0`, leaving all other keys untouched.
pub fn zero_nulls(raw: RawRecord) -> RawRecord {
    raw.into_iter()
        .map(|(key, value)| {
            let value = if value.is_null() { Value::from(0) } else { value };
            (key, value)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> RawRecord {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn complete_record_passes_through() {
        let r = GridRecord::from_raw(&raw(json!({
            "date": "2024-05-01T12:00:00+00:00",
            "production": 52000.0,
            "consommation": 48000,
            "nucleaire": 36000,
            "eolien": 4100.5,
            "solaire": 6200,
            "hydraulique": 5100,
            "gaz": 600,
            "taux_co2": 21
        })));

        assert_eq!(r.timestamp, "2024-05-01T12:00:00+00:00");
        assert_eq!(r.production_mw, 52000.0);
        assert_eq!(r.consumption_mw, 48000.0);
        assert_eq!(r.nuclear_mw, 36000.0);
        assert_eq!(r.wind_mw, 4100.5);
        assert_eq!(r.solar_mw, 6200.0);
        assert_eq!(r.hydro_mw, 5100.0);
        assert_eq!(r.gas_mw, 600.0);
        assert_eq!(r.carbon_intensity, 21.0);
    }

    #[test]
    fn null_and_absent_fields_become_zero_independently() {
        let r = GridRecord::from_raw(&raw(json!({
            "production": 1000,
            "consommation": null,
            "eolien": 250,
            "solaire": null
        })));

        assert_eq!(r.timestamp, MISSING_TIMESTAMP);
        assert_eq!(r.production_mw, 1000.0);
        assert_eq!(r.consumption_mw, 0.0);
        assert_eq!(r.nuclear_mw, 0.0);
        assert_eq!(r.wind_mw, 250.0);
        assert_eq!(r.solar_mw, 0.0);
        assert_eq!(r.hydro_mw, 0.0);
        assert_eq!(r.gas_mw, 0.0);
        assert_eq!(r.carbon_intensity, 0.0);
    }

    #[test]
    fn empty_record_is_all_defaults() {
        let r = GridRecord::from_raw(&RawRecord::new());
        assert_eq!(r.timestamp, "N/A");
        for v in [
            r.production_mw,
            r.consumption_mw,
            r.nuclear_mw,
            r.wind_mw,
            r.solar_mw,
            r.hydro_mw,
            r.gas_mw,
            r.carbon_intensity,
        ] {
            assert_eq!(v, 0.0);
        }
    }

    #[test]
    fn numeric_strings_are_parsed_and_garbage_is_zeroed() {
        let r = GridRecord::from_raw(&raw(json!({
            "production": " 812.5 ",
            "nucleaire": "n/a",
            "eolien": true,
            "solaire": [1, 2],
            "gaz": "NaN",
            "hydraulique": "inf",
            "date": 20240501
        })));

        assert_eq!(r.production_mw, 812.5);
        assert_eq!(r.nuclear_mw, 0.0);
        assert_eq!(r.wind_mw, 0.0);
        assert_eq!(r.solar_mw, 0.0);
        assert_eq!(r.gas_mw, 0.0);
        assert_eq!(r.hydro_mw, 0.0);
        assert_eq!(r.timestamp, "N/A");
    }

    #[test]
    fn negative_values_are_not_validated() {
        let r = GridRecord::from_raw(&raw(json!({ "solaire": -12 })));
        assert_eq!(r.solar_mw, -12.0);
    }

    #[test]
    fn serializes_with_mw_suffixed_keys() {
        let r = GridRecord::from_raw(&raw(json!({ "production": 10 })));
        let v = serde_json::to_value(&r).unwrap();
        let obj = v.as_object().unwrap();
        for key in [
            "timestamp",
            "production_MW",
            "consumption_MW",
            "nuclear_MW",
            "wind_MW",
            "solar_MW",
            "hydro_MW",
            "gas_MW",
            "carbon_intensity",
        ] {
            assert!(obj.contains_key(key), "missing {key}");
        }
        assert_eq!(obj.len(), 9);
    }

    #[test]
    fn zero_nulls_keeps_other_keys() {
        let out = zero_nulls(raw(json!({
            "date": "2024-05-01",
            "nucleaire": null,
            "perimetre": "France",
            "eolien": 12.5
        })));

        assert_eq!(out["nucleaire"], json!(0));
        assert_eq!(out["perimetre"], json!("France"));
        assert_eq!(out["eolien"], json!(12.5));
        assert_eq!(out["date"], json!("2024-05-01"));
        assert_eq!(out.len(), 4);
    }
}
