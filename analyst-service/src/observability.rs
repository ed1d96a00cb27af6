use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVES: &[&str] = &["grid_analyst_service=info", "eco2mix_client=info"];

pub fn init_tracing() {
    let mut filter = EnvFilter::from_default_env();
    for directive in DEFAULT_DIRECTIVES {
        if let Ok(d) = directive.parse() {
            filter = filter.add_directive(d);
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
