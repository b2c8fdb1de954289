//! Error handling for table loading
//!
//! Lookup operations in the core never fail - an absent entry is `None`, not
//! an error. The only fallible path is loading a configuration, which this
//! module models with a single error type.

use std::fmt;

/// Configuration load error
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// Input could not be decoded as a table configuration
    ParseError { message: String },
    /// IO error while reading a settings file
    IoError { message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError { message } => {
                write!(f, "parse error: {}", message)
            }
            ConfigError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::IoError {
            message: err.to_string(),
        }
    }
}

// Convenience constructors
impl ConfigError {
    pub fn parse(message: impl ToString) -> Self {
        ConfigError::ParseError {
            message: message.to_string(),
        }
    }

    pub fn io(message: impl ToString) -> Self {
        ConfigError::IoError {
            message: message.to_string(),
        }
    }
}
