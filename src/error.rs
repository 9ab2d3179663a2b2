//! Error types for signal operations.

use thiserror::Error;

/// Errors produced by the signal core.
///
/// Every fallible operation reports its failure at the point of detection and
/// leaves its inputs (including an [`Accumulator`](crate::Accumulator)) as
/// they were before the call.
#[derive(Debug, Error)]
pub enum Error {
    /// A signal file did not follow the expected layout.
    #[error("malformed signal file at line {line}: {message}")]
    Format {
        /// 1-based line number where parsing failed
        line: usize,
        /// What was wrong with the line
        message: String,
    },

    /// A parameter or input sequence was out of range.
    #[error("invalid value: {0}")]
    InvalidValue(String),

    /// The operation needs a non-empty signal.
    #[error("nothing to {0}: the signal is empty")]
    EmptyState(&'static str),

    /// The signal file could not be read or written.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn format(line: usize, message: impl Into<String>) -> Self {
        Error::Format {
            line,
            message: message.into(),
        }
    }

    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Error::InvalidValue(message.into())
    }
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
