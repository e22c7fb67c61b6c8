use tracing_subscriber::EnvFilter;

/// Installs the global fmt subscriber. `BUSINESS_CASE_LOG` wins over `RUST_LOG`.
pub fn init_tracing() {
    let filter = std::env::var("BUSINESS_CASE_LOG")
        .ok()
        .and_then(|value| EnvFilter::try_new(value).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("info,business_case_service=debug"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .compact()
        .try_init();
}
