use std::io;

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Verbosity comes from `RUST_LOG` and
/// defaults to warnings; events go to stderr so stdout stays parseable.
pub(crate) fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
