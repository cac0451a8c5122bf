//! Turbo Greeter - prints the Turborepo integration report
//!
//! Writes the greeting, the local time and the sum of the number list to
//! stdout, then exits.

use clap::Parser;
use greeter::cli::Cli;
use greeter::logging;
use greeter_common::SystemClock;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = greeter::run(&cli, &SystemClock, &mut out) {
        eprintln!("Error: {:#}", e);
        std::process::exit(greeter::runner::exit_code(&e));
    }
}
