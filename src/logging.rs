//! Diagnostics setup. Log lines go to stderr so they never mix with the
//! interactive transcript on stdout.

use tracing::Level;

/// Install the global `tracing` subscriber.
///
/// Only warnings are shown by default; `verbose` turns on debug events
/// such as every recorded transaction and rejected input.
pub fn init(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
