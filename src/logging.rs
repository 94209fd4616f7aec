//! Logging init: structured diagnostics on stderr, kept apart from report output on stdout.

use tracing_subscriber::EnvFilter;

/// Initialize logging. `RUST_LOG` wins; otherwise only warnings, or debug for
/// this crate when `verbose` is set.
pub fn init_logging(verbose: bool) {
    let default = if verbose { "warn,shazam=debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init();
}
