//! CLI - Command-line argument parsing
//!
//! Defines the CLI structure using clap.
//! Keeps argument parsing separate from execution logic.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Turbo Greeter CLI
#[derive(Parser, Debug, Default)]
#[command(name = "turbo-greeter")]
#[command(about = "Prints a greeting, the local time and the sum of a number list", long_about = None)]
#[command(version = env!("GREETER_VERSION"))]
pub struct Cli {
    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// TOML file overriding the numbers and time format
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
