//! The greeter report: greeting, timestamp, sum and completion lines.

use crate::clock::{format_timestamp_with, Clock};
use crate::config::GreeterConfig;
use crate::error::Result;
use crate::sequence::NumberSequence;
use serde::Serialize;
use std::io::Write;
use tracing::{debug, trace};

pub const GREETING: &str = "🐹 Hello from Go in Turborepo!";
pub const INTEGRATION_OK: &str = "Go and Turborepo integration is working!";
pub const COMPLETED: &str = "✅ Go app completed successfully!";

/// Everything the reporter prints, captured once
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub timestamp: String,
    pub numbers: NumberSequence,
    pub sum: i64,
}

/// Structured form printed by `--json`
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    message: &'static str,
    status: &'static str,
    timestamp: &'a str,
    numbers: &'a NumberSequence,
    sum: i64,
    product: i64,
    squares: Vec<i64>,
    completed: &'static str,
}

impl Report {
    /// Read the clock once and accumulate the configured numbers
    pub fn capture(clock: &dyn Clock, config: &GreeterConfig) -> Result<Self> {
        let now = clock.now();
        let timestamp = format_timestamp_with(&now, &config.time_format);
        trace!("Clock read: {}", now.to_rfc3339());

        let sum = config.numbers.sum()?;
        debug!("Sum of {} numbers = {}", config.numbers.len(), sum);

        Ok(Self {
            timestamp,
            numbers: config.numbers.clone(),
            sum,
        })
    }

    /// The report lines, in print order
    pub fn lines(&self) -> [String; 5] {
        [
            GREETING.to_string(),
            INTEGRATION_OK.to_string(),
            format!("Current time: {}", self.timestamp),
            format!("Sum of {} = {}", self.numbers, self.sum),
            COMPLETED.to_string(),
        ]
    }

    pub fn write_text<W: Write>(&self, out: &mut W) -> Result<()> {
        for line in self.lines() {
            writeln!(out, "{}", line)?;
        }
        out.flush()?;
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        let doc = JsonReport {
            message: GREETING,
            status: "working",
            timestamp: &self.timestamp,
            numbers: &self.numbers,
            sum: self.sum,
            product: self.numbers.product()?,
            squares: self.numbers.squares()?,
            completed: COMPLETED,
        };
        Ok(serde_json::to_string_pretty(&doc)?)
    }

    pub fn write_json<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{}", self.to_json()?)?;
        out.flush()?;
        Ok(())
    }
}
