//! Text renderers, one per routing category.
//!
//! All renderers are pure functions of a normalized [`GridRecord`].

use eco2mix_client::GridRecord;

/// Denominator substituted for a non-positive production figure in share
/// calculations. With zero production a share can exceed 100%.
const PRODUCTION_FLOOR_MW: f64 = 1.0;

const VERY_LOW_CARBON_BELOW: f64 = 50.0;
const LOW_CARBON_BELOW: f64 = 100.0;

pub fn share_percent(source_mw: f64, production_mw: f64) -> f64 {
    let total = if production_mw > 0.0 {
        production_mw
    } else {
        PRODUCTION_FLOOR_MW
    };
    (source_mw / total) * 100.0
}

fn source_share(name: &str, source_mw: f64, production_mw: f64) -> String {
    format!(
        "{name} power provides {:.1}% of France's electricity ({source_mw} MW out of {production_mw} MW total).",
        share_percent(source_mw, production_mw)
    )
}

pub fn nuclear_share(r: &GridRecord) -> String {
    source_share("Nuclear", r.nuclear_mw, r.production_mw)
}

pub fn wind_share(r: &GridRecord) -> String {
    source_share("Wind", r.wind_mw, r.production_mw)
}

pub fn solar_share(r: &GridRecord) -> String {
    source_share("Solar", r.solar_mw, r.production_mw)
}

pub fn renewables_share(r: &GridRecord) -> String {
    let renewables = r.wind_mw + r.solar_mw + r.hydro_mw;
    format!(
        "Renewables provide {:.1}% of electricity: Wind: {} MW, Solar: {} MW, Hydro: {} MW.",
        share_percent(renewables, r.production_mw),
        r.wind_mw,
        r.solar_mw,
        r.hydro_mw
    )
}

/// Breakdown against the sum of the five tracked sources, not against the
/// reported production figure.
pub fn energy_mix(r: &GridRecord) -> String {
    let sources = [
        ("Nuclear", r.nuclear_mw),
        ("Wind", r.wind_mw),
        ("Solar", r.solar_mw),
        ("Hydro", r.hydro_mw),
        ("Gas", r.gas_mw),
    ];
    let total: f64 = sources.iter().map(|(_, mw)| mw).sum();

    if total <= 0.0 {
        return "No production data available.".to_string();
    }

    let mut lines = vec!["Energy mix:".to_string()];
    for (name, mw) in sources {
        lines.push(format!("- {name}: {:.1}% ({mw} MW)", mw / total * 100.0));
    }
    lines.push(format!("Total: {total} MW"));
    lines.join("\n")
}

pub fn carbon_tier(intensity: f64) -> &'static str {
    if intensity < VERY_LOW_CARBON_BELOW {
        "Very low carbon"
    } else if intensity < LOW_CARBON_BELOW {
        "Low carbon"
    } else {
        "Moderate carbon"
    }
}

pub fn carbon_intensity(r: &GridRecord) -> String {
    format!(
        "Carbon intensity: {} gCO₂/kWh ({})",
        r.carbon_intensity,
        carbon_tier(r.carbon_intensity)
    )
}

pub fn consumption_balance(r: &GridRecord) -> String {
    let balance = r.production_mw - r.consumption_mw;
    let flow = if balance > 0.0 {
        format!("Exporting {balance} MW")
    } else {
        // A zero balance counts as importing; avoid rendering "-0".
        let deficit = if balance == 0.0 { 0.0 } else { -balance };
        format!("Importing {deficit} MW")
    };
    format!(
        "Consumption: {} MW, Production: {} MW ({flow})",
        r.consumption_mw, r.production_mw
    )
}

pub fn summary(r: &GridRecord) -> String {
    format!(
        "France's electricity: Production {} MW, Consumption {} MW. Nuclear: {} MW, Wind: {} MW, Solar: {} MW.",
        r.production_mw, r.consumption_mw, r.nuclear_mw, r.wind_mw, r.solar_mw
    )
}
