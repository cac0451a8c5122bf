//! Error types for the greeter.

use thiserror::Error;

/// Exit code for general errors
pub const EXIT_GENERAL_ERROR: i32 = 1;

/// Exit code when the configuration file is unreadable or invalid
pub const EXIT_INVALID_CONFIG: i32 = 65;

#[derive(Error, Debug)]
pub enum GreeterError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Sum overflows i64 after {visited} of {len} numbers")]
    Overflow { visited: usize, len: usize },

    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("JSON error")]
    Json(#[from] serde_json::Error),
}

impl GreeterError {
    pub fn exit_code(&self) -> i32 {
        match self {
            GreeterError::Config(_) => EXIT_INVALID_CONFIG,
            GreeterError::Overflow { .. } | GreeterError::Io(_) | GreeterError::Json(_) => {
                EXIT_GENERAL_ERROR
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, GreeterError>;
