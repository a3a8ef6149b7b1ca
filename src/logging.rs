//! Logging setup for the command line tools.

use tracing_subscriber::EnvFilter;

/// Install a global subscriber that writes to stderr.
///
/// `RUST_LOG` overrides `default_filter` when it is set. Only the first call installs anything,
/// later calls return `false`.
pub fn init_logging(default_filter: &str) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
