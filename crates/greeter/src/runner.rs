//! Greeter/Reporter entry point
//!
//! One synchronous pass: resolve config, read the clock once, accumulate,
//! print.

use crate::cli::Cli;
use anyhow::{Context, Result};
use greeter_common::error::EXIT_GENERAL_ERROR;
use greeter_common::{Clock, GreeterConfig, GreeterError, Report};
use std::io::Write;
use tracing::info;

pub fn run<W: Write>(cli: &Cli, clock: &dyn Clock, out: &mut W) -> Result<()> {
    let config = match &cli.config {
        Some(path) => GreeterConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => GreeterConfig::default(),
    };

    let report = Report::capture(clock, &config)?;
    info!("Report captured at {}", report.timestamp);

    if cli.json {
        report.write_json(out).context("Failed to write JSON report")
    } else {
        report.write_text(out).context("Failed to write report")
    }
}

/// Process exit code for an error returned by [`run`]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<GreeterError>()
        .map(GreeterError::exit_code)
        .unwrap_or(EXIT_GENERAL_ERROR)
}
