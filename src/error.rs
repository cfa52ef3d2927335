//! Error types for the parlor games.
//!
//! Bad console input is never an error: the game loops reprompt instead.
//! What remains are configuration mistakes and console I/O failures.

use thiserror::Error;

/// Main error type for the crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("empty range: minimum {min} is greater than maximum {max}")]
    EmptyRange { min: i64, max: i64 },

    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: &'static str,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Wrap a console I/O failure with the operation that caused it.
    pub fn io(operation: &'static str, source: std::io::Error) -> Self {
        Self::Io { operation, source }
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_range_message() {
        let err = Error::EmptyRange { min: 10, max: 1 };
        assert_eq!(
            err.to_string(),
            "empty range: minimum 10 is greater than maximum 1"
        );
    }

    #[test]
    fn test_io_keeps_source() {
        use std::error::Error as _;

        let err = Error::io(
            "read input",
            std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed"),
        );
        assert_eq!(err.to_string(), "failed to read input: pipe closed");
        assert!(err.source().is_some());
    }
}
