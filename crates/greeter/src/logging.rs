//! Logging setup
//!
//! Diagnostics go to stderr so stdout carries only the report. The level
//! comes from `-v` alone; no environment variable is consulted.

use tracing::Level;

pub fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

pub fn init(verbosity: u8) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level_for(verbosity))
        .with_target(false)
        .init();
}
