//! Diagnostic logging to standard error.
//!
//! Standard output carries the gzip stream, so every log line goes to
//! stderr. The level defaults to `warn` and follows `RUST_LOG` when set.

use tracing_subscriber::{EnvFilter, fmt};

/// Install the global subscriber. Calling this more than once is harmless.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(false)
        .with_env_filter(env_filter)
        .try_init();
}
