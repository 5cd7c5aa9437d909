//! Console logging for test runs.

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "pagewright=info";

/// Install the global subscriber for test suites, honoring `RUST_LOG`.
///
/// Output goes through the test harness capture. Safe to call from every
/// test; only the first call installs anything.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_test_writer()
        .try_init();
}

/// Install the global subscriber on stderr with explicit filter directives.
///
/// `RUST_LOG`, when set, wins over `directives`. `ansi` turns color escapes
/// on or off.
pub fn init_with_filter(directives: &str, ansi: bool) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(directives))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_ansi(ansi)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init();
        init_with_filter("pagewright=debug", false);
        init_with_filter("not a [valid filter", true);
        tracing::info!("still logging");
    }
}
