//! Diagnostic logging setup.
//!
//! Logs go to stderr so stdout only carries the written path. Verbosity comes
//! from `-v` flags alone; no environment variable is consulted.

use tracing::Level;

/// Map a `-v` count to the maximum log level.
pub fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    }
}

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init(verbosity: u8) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level_for(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
