//! `tracing` subscriber setup for the binary.

use tracing_subscriber::EnvFilter;

const QUIET: &str = "warn";
const VERBOSE: &str = "warn,minipoker_engine=debug,minipoker_ai=debug";

/// Filter used when `RUST_LOG` is not set.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose { VERBOSE } else { QUIET }
}

/// Installs a `fmt` subscriber writing to stderr. A second call keeps the
/// first subscriber.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
