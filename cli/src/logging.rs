//! Diagnostic logging.
//!
//! User-facing output goes through `OutputContext`; `tracing` carries
//! diagnostics (commands run, swallowed failures) to stderr.

use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "MECH_QUICKSTART_LOG";

/// Install the global subscriber. `verbose` raises the crate's default
/// level to `debug`; an explicit `MECH_QUICKSTART_LOG` always wins.
pub fn init(verbose: bool) {
    let default = if verbose {
        "mech_quickstart_cli=debug,warn"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .compact()
        .try_init();
}
