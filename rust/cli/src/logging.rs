//! Diagnostic logging setup.
//!
//! Game output goes to stdout; `tracing` events go to stderr so they never
//! interleave with prompts. Verbosity follows `RUST_LOG` (default `warn`).

use tracing_subscriber::EnvFilter;

/// Initialize logging for the application. Safe to call more than once.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
