//! Diagnostic logging setup.
//!
//! Logs go to stderr so stdout stays a clean palette. Verbosity comes from
//! `THEMEPORT_LOG` (an `EnvFilter` directive such as `debug` or
//! `themeport::palette=trace`) and defaults to warnings only.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
pub const ENV_LOG: &str = "THEMEPORT_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Install the global stderr subscriber.
///
/// Returns false when a subscriber was already installed.
pub fn init_logging() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(std::env::var(ENV_LOG).ok().as_deref()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init()
        .is_ok()
}

/// Build a filter from a directive, falling back to the default on blank or
/// unparseable input.
fn env_filter(directive: Option<&str>) -> EnvFilter {
    directive
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}
