// Greenhouse telemetry - simulated sensor readings and threshold actions
pub mod application;
pub mod client;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

use tracing_subscriber::EnvFilter;

/// Install the fmt subscriber. `RUST_LOG` takes precedence over `default_filter`.
pub fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
