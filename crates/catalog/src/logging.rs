//! Diagnostic logging to stderr.

use tracing_subscriber::EnvFilter;

/// Returns the filter directives for the given verbosity flags.
///
/// Only this binary and the catalog crates get debug output; dependencies
/// stay at `warn`.
fn default_directives(verbose: bool, quiet: bool) -> &'static str {
    if quiet {
        "error"
    } else if verbose {
        "warn,catalog=debug,catalog_api_rs=debug,catalog_store_rs=debug"
    } else {
        "warn"
    }
}

/// Installs the global subscriber. `RUST_LOG` overrides the flags.
pub fn init_tracing(verbose: bool, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose, quiet)));

    // A subscriber may already be installed when run under a test harness.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
