// Diagnostic logging via `tracing`. Reports go to stdout with println-style
// writes; log events go to stderr and are off below `warn` unless
// `RUST_LOG` says otherwise.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber. Safe to call more than once: later calls
/// (and a subscriber installed by someone else) are left alone.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
    if result.is_err() {
        // Someone else already installed a global subscriber; keep using it.
        tracing::debug!("tracing subscriber already initialized, keeping the existing one");
    }
}
