use eco2mix_client::DailyMix;

pub const NO_DAILY_DATA: &str = "No data available for the specified date";

/// Percentage of each present source against the sum of present averages.
pub fn render_daily_mix(date: &str, mix: &DailyMix) -> String {
    let sources = mix.sources();
    let total = mix.total();
    if sources.is_empty() || total <= 0.0 {
        return NO_DAILY_DATA.to_string();
    }

    let mut out = format!("Energy Mix for {date}:\n");
    for (name, mw) in sources {
        out.push_str(&format!("- {name}: {:.1}%\n", mw / total * 100.0));
    }
    out
}
