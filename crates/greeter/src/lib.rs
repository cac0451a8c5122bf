//! Turbo Greeter library - exposes modules for testing

pub mod cli;
pub mod logging;
pub mod runner;

pub use runner::run;
