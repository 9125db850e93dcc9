//! Logging setup.

use tracing_subscriber::EnvFilter;

/// Initialize tracing. Logs go to stderr so stdout stays reserved for the
/// rendered screen.
pub fn init() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,prizedraw_core=debug".parse().unwrap()),
        )
        .init();
}
