//! Diagnostic logging setup.

use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber.
///
/// Filters come from `RUST_LOG` and default to `warn`. Logs go to stderr so
/// stdout carries nothing but the report.
pub fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("logging initialised");
}
