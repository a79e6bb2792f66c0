//! Tracing setup.
//!
//! Everything goes to stderr: stdout carries the JSON-RPC stream.
//!
//! The filter is picked from, in order: the `--log-level` flag, the
//! `[log] level` config entry, `RUST_LOG`, and finally `warn`.

use tracing_subscriber::EnvFilter;

/// Filter used when nothing else is configured.
pub const DEFAULT_FILTER: &str = "warn";

/// Build the `EnvFilter` for an optional explicit directive.
pub fn build_filter(level: Option<&str>) -> EnvFilter {
    match level {
        Some(directive) => EnvFilter::builder().parse_lossy(directive),
        None => {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
        }
    }
}

/// Install the global subscriber.  A second call is a no-op.
pub fn init_logging(level: Option<&str>, no_color: bool) {
    let result = tracing_subscriber::fmt()
        .with_env_filter(build_filter(level))
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .try_init();

    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
