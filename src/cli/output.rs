//! Output formatting utilities for CLI operations.

use std::io::{self, Write};

use commentfmt::CommentFmtError;

/// Line printed before the list of misspelled words.
pub const MISSPELLED_START: &str = "-- start of misspelled words ---";

/// Line printed after the list of misspelled words.
pub const MISSPELLED_END: &str = "-- end of misspelled words ---";

/// Writes the misspelled-word report to the given writer.
///
/// Nothing is written when `words` is empty.
pub fn write_misspelled_words_to<W: Write>(
    writer: &mut W,
    words: &[String],
) -> Result<(), CommentFmtError> {
    if words.is_empty() {
        return Ok(());
    }

    writeln!(writer, "{MISSPELLED_START}").map_err(|e| io_error(&e))?;
    for word in words {
        writeln!(writer, "{word}").map_err(|e| io_error(&e))?;
    }
    writeln!(writer, "{MISSPELLED_END}").map_err(|e| io_error(&e))
}

/// Converts an I/O error into a [`CommentFmtError::Io`].
#[must_use]
pub fn io_error(error: &io::Error) -> CommentFmtError {
    CommentFmtError::Io {
        message: error.to_string(),
    }
}
