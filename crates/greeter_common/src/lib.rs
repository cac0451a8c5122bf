//! Greeter Common - Shared types for the Turborepo greeter
//!
//! The number sequence and its accumulator, the clock seam, the report
//! rendering and the optional TOML configuration live here so the binary
//! stays a thin shell around them.

pub mod clock;
pub mod config;
pub mod error;
pub mod report;
pub mod sequence;

pub use clock::{format_timestamp, Clock, FixedClock, SystemClock, DEFAULT_TIME_FORMAT};
pub use config::GreeterConfig;
pub use error::GreeterError;
pub use report::Report;
pub use sequence::NumberSequence;
