//! Errors surfaced by the `commentfmt` command.

use thiserror::Error;

use crate::reflow::ReflowError;
use crate::spell::SpellCheckError;

/// Errors that end a `commentfmt` run.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommentFmtError {
    /// Configuration could not be loaded or is inconsistent.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// Writing command output failed outside the reflow engine.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// Reading the input or writing reflowed text failed.
    #[error(transparent)]
    Reflow(#[from] ReflowError),

    /// The configured spell checker could not be prepared.
    #[error("spell check error: {0}")]
    SpellCheck(#[from] SpellCheckError),
}
