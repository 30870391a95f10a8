//! Tracing/logging initialization.
//!
//! Logs go to stderr so they never interleave with table output on stdout.

use tracing_subscriber::EnvFilter;

/// Initialize tracing for the process.
///
/// `RUST_LOG` wins when set; otherwise `warn`, or `debug` for the stockroom
/// crate when `verbose`. Safe to call multiple times (later calls are no-ops).
pub fn init(verbose: bool) {
    let default = if verbose { "stockroom=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
