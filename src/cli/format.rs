//! Reflow of standard input, with an optional spell check.

use std::io::{Read, Write};

use commentfmt::{
    CommentFmtError, ReflowOptions, ReflowSummary, WordListChecker, reflow, reflow_split,
};
use tracing::{debug, warn};

use super::output::{io_error, write_misspelled_words_to};

/// Reflows `input` to `output`.
///
/// Without a checker the input is streamed straight through. With one, the
/// comment block and the remaining text are collected separately so the
/// misspelled-word report can be written between them. A checker that fails
/// is logged and otherwise ignored.
pub fn run<R: Read, W: Write>(
    input: R,
    output: &mut W,
    options: &ReflowOptions,
    checker: Option<&dyn WordListChecker>,
) -> Result<ReflowSummary, CommentFmtError> {
    let summary = match checker {
        None => reflow(input, &mut *output, options)?,
        Some(checker) => reflow_and_check(input, output, options, checker)?,
    };

    debug!(
        comment_lines = summary.comment_lines,
        paragraphs = summary.paragraphs,
        verbatim_lines = summary.verbatim_lines,
        passthrough_bytes = summary.passthrough_bytes,
        "reflowed comment block"
    );
    Ok(summary)
}

fn reflow_and_check<R: Read, W: Write>(
    input: R,
    output: &mut W,
    options: &ReflowOptions,
    checker: &dyn WordListChecker,
) -> Result<ReflowSummary, CommentFmtError> {
    let mut comments = Vec::new();
    let mut code = Vec::new();
    let summary = reflow_split(input, &mut comments, &mut code, options)?;

    output.write_all(&comments).map_err(|e| io_error(&e))?;
    match checker.misspelled_words(&comments) {
        Ok(words) => {
            debug!(count = words.len(), "spell check finished");
            write_misspelled_words_to(output, &words)?;
        }
        Err(error) => warn!(%error, "spell check failed"),
    }
    output.write_all(&code).map_err(|e| io_error(&e))?;
    output.flush().map_err(|e| io_error(&e))?;
    Ok(summary)
}
