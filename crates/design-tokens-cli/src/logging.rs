//! Diagnostic logging to stderr.
//!
//! Progress lines for the user are printed by [`crate::report`]; this is
//! only for `tracing` events from the library.

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber.
///
/// With no `-v`, `RUST_LOG` decides and defaults to `warn`. Each `-v`
/// raises the level and takes precedence over `RUST_LOG`.
pub fn init(verbosity: u8) {
    let filter = match verbosity {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    };

    // A subscriber may already be installed when embedded in tests.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
