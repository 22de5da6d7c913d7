//! Log setup for the binary
//!
//! Library code emits `tracing` events; this installs a subscriber that
//! writes them to stderr so stdout stays clean for command output.

use std::io;

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber.
///
/// `--verbose` forces `debug`; otherwise `RUST_LOG` is honored and the
/// default level is `warn`.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}
