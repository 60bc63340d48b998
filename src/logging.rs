//! Logging setup on top of tracing-subscriber.

use tracing_subscriber::{fmt, EnvFilter};

/// Used when `RUST_LOG` is unset or unparsable. eframe and the renderer
/// backends stay at warn.
pub const DEFAULT_DIRECTIVES: &str = "warn,vaxdash=info";

/// Install the global subscriber for the dashboard binary.
///
/// `RUST_LOG=vaxdash=debug` shows the per-step row counts of the loader.
pub fn init() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    fmt()
        .with_env_filter(build_filter(directives.as_deref()))
        .with_line_number(true)
        .init();
}

/// Subscriber for tests, captured by the harness. Safe to call more than once.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("vaxdash=debug"))
        .with_test_writer()
        .try_init();
}

fn build_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVES))
}
