use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Installs a global subscriber printing formatted logs to stdout.
///
/// Uses the `RUST_LOG` environment variable for the filter, defaulting to
/// "info" if not set. Later calls are no-ops, so front ends and tests can
/// call this unconditionally; the library itself never installs a subscriber
/// on its own.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .try_init();
}
