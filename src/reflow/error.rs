//! Error types surfaced by the reflow engine.

use std::io;

use thiserror::Error;

/// Errors raised while reading input or writing either output stream.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReflowError {
    /// Reading a line from the input failed for a reason other than a clean
    /// end of stream.
    #[error("failed to read input: {message}")]
    Read {
        /// Error detail from the underlying reader.
        message: String,
    },

    /// Writing or flushing one of the output streams failed.
    #[error("failed to write output: {message}")]
    Write {
        /// Error detail from the underlying writer.
        message: String,
    },
}

impl ReflowError {
    pub(crate) fn read(error: &io::Error) -> Self {
        Self::Read {
            message: error.to_string(),
        }
    }

    pub(crate) fn write(error: &io::Error) -> Self {
        Self::Write {
            message: error.to_string(),
        }
    }
}
