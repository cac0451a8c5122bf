//! Greeter configuration
//!
//! Nothing is read unless a path is passed explicitly; the defaults reproduce
//! the fixed report exactly.
//!
//! ```toml
//! numbers = [1, 2, 3, 4, 5]
//! time_format = "%Y-%m-%d %H:%M:%S"
//! ```

use crate::clock::{is_valid_time_format, DEFAULT_TIME_FORMAT};
use crate::error::{GreeterError, Result};
use crate::sequence::NumberSequence;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GreeterConfig {
    /// Numbers to accumulate
    #[serde(default)]
    pub numbers: NumberSequence,

    /// strftime pattern for the `Current time:` line
    #[serde(default = "default_time_format")]
    pub time_format: String,
}

fn default_time_format() -> String {
    DEFAULT_TIME_FORMAT.to_string()
}

impl Default for GreeterConfig {
    fn default() -> Self {
        Self {
            numbers: NumberSequence::default(),
            time_format: default_time_format(),
        }
    }
}

impl GreeterConfig {
    /// Load from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            GreeterError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        let config = Self::from_toml_str(&content)?;
        debug!(
            "Loaded config from {} ({} numbers)",
            path.display(),
            config.numbers.len()
        );
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| GreeterError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !is_valid_time_format(&self.time_format) {
            return Err(GreeterError::Config(format!(
                "invalid time_format: {:?}",
                self.time_format
            )));
        }
        Ok(())
    }
}
