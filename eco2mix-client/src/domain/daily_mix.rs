use serde::Serialize;

use super::grid_record::{fields, finite_number, RawRecord};

/// Average output per generation source over one calendar day, in MW.
///
/// A source is `None` when no record of the day carried a numeric value for
/// it; such sources are left out of the mix rather than counted as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DailyMix {
    #[serde(rename = "nuclear_MW", skip_serializing_if = "Option::is_none")]
    pub nuclear_mw: Option<f64>,
    #[serde(rename = "wind_MW", skip_serializing_if = "Option::is_none")]
    pub wind_mw: Option<f64>,
    #[serde(rename = "solar_MW", skip_serializing_if = "Option::is_none")]
    pub solar_mw: Option<f64>,
    #[serde(rename = "hydro_MW", skip_serializing_if = "Option::is_none")]
    pub hydro_mw: Option<f64>,
    #[serde(rename = "gas_MW", skip_serializing_if = "Option::is_none")]
    pub gas_mw: Option<f64>,
}

impl DailyMix {
    pub fn from_records(records: &[RawRecord]) -> Self {
        DailyMix {
            nuclear_mw: average(records, fields::NUCLEAR),
            wind_mw: average(records, fields::WIND),
            solar_mw: average(records, fields::SOLAR),
            hydro_mw: average(records, fields::HYDRO),
            gas_mw: average(records, fields::GAS),
        }
    }

    /// Present sources in display order.
    pub fn sources(&self) -> Vec<(&'static str, f64)> {
        [
            ("Nuclear", self.nuclear_mw),
            ("Wind", self.wind_mw),
            ("Solar", self.solar_mw),
            ("Hydro", self.hydro_mw),
            ("Gas", self.gas_mw),
        ]
        .into_iter()
        .filter_map(|(name, mw)| mw.map(|mw| (name, mw)))
        .collect()
    }

    pub fn total(&self) -> f64 {
        self.sources().iter().map(|(_, mw)| mw).sum()
    }
}

fn average(records: &[RawRecord], key: &str) -> Option<f64> {
    let samples: Vec<f64> = records
        .iter()
        .filter_map(|r| r.get(key).and_then(finite_number))
        .collect();

    if samples.is_empty() {
        return None;
    }
    Some(samples.iter().sum::<f64>() / samples.len() as f64)
}
