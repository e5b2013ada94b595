//! Diagnostic logging to stderr.
//!
//! `RUST_LOG` wins when set. Otherwise the level follows the `-v` count, and
//! `--debug` raises it to at least `debug`.

use tracing_subscriber::EnvFilter;

/// Filter directive for the given `-v` count and `--debug` flag
pub fn filter_directive(verbose: u8, debug: bool) -> String {
    let level = match (verbose, debug) {
        (0, false) => "warn",
        (1, false) => "info",
        (0..=2, _) => "debug",
        _ => "trace",
    };

    format!("warn,libecr={level},ecrcli={level}")
}

/// Install the global subscriber. Later calls are ignored.
pub fn init(verbose: u8, debug: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbose, debug)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
