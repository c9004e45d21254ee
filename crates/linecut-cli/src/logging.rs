//! Log setup for the binary
//!
//! Logs go to stderr so stdout carries only the report.

use crate::args::Verbosity;
use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive
pub const LOG_ENV: &str = "LINECUT_LOG";

/// Filter from `LINECUT_LOG` if set and valid, else from the verbosity flags
#[must_use]
pub fn filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(verbosity.directive()))
}

/// Install the global subscriber
///
/// A second call is a no-op.
pub fn init(verbosity: Verbosity) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
