use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the global subscriber. Logs go to stderr so stdout carries only
/// rendered output.
pub fn init() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("nationmind=info,nationmind_api=info")),
        )
        .with(fmt::layer().json().with_writer(std::io::stderr))
        .init();
}
