//! Logging configuration for slash-parse.
//!
//! Logs go to stderr so that stdout carries only parse output.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "info";

/// Builds the env filter, falling back to `default` (or `info`).
pub fn env_filter(default: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default.unwrap_or(DEFAULT_FILTER)))
}

/// Initializes logging to stderr.
///
/// `verbose` lowers the default level to `debug` so each pipeline stage is
/// traced; an explicit `RUST_LOG` still wins.
pub fn init_stderr_logging(verbose: bool) {
    let default = verbose.then_some("debug");
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default))
        .with_writer(std::io::stderr)
        .init();
}
