//! Tracing subscriber setup

use tracing_subscriber::EnvFilter;

/// Filter from RUST_LOG, falling back to `default_filter`
pub fn env_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))
}

/// Install the global subscriber. Logs go to stderr so exercise output
/// on stdout stays clean.
pub fn init(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_filter))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
