//! Leading block comment reflow.
//!
//! The engine reads its input a line at a time. The first line fixes the
//! comment prefix and the effective width (see [`CommentPrefix`]). Every
//! following line that starts with the prefix belongs to the comment block:
//!
//! - a line holding only the prefix ends the current paragraph and is kept;
//! - a line whose text starts with a tab, or with more than one space, is
//!   treated as preformatted and kept verbatim;
//! - any other line is merged into the current paragraph, which is rewrapped
//!   when it ends.
//!
//! The first line outside the block (including a line whose text starts
//! with the export marker) and everything after it is copied unchanged.
//!
//! Output is buffered. Both streams are flushed before a run returns,
//! whether or not it succeeded.

use std::io::{self, BufReader, Read, Write};

mod engine;
mod error;
mod paragraph;
mod prefix;
mod sink;

pub use error::ReflowError;
pub use paragraph::{Paragraph, wrap_paragraph};
pub use prefix::CommentPrefix;

use sink::Sinks;

/// Width used when none is configured.
pub const DEFAULT_TARGET_WIDTH: usize = 80;

/// Marker used when none is configured.
pub const DEFAULT_EXPORT_MARKER: &str = "export ";

/// Settings for a single reflow run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReflowOptions {
    /// Column at which comment lines wrap.
    pub target_width: usize,
    /// Comment delimiter. `None` or an empty string detects `//`, `#` or
    /// `--` from the first line.
    pub delimiter: Option<String>,
    /// Text which, directly after the prefix, excludes a line from the
    /// comment block. An empty marker excludes nothing.
    pub export_marker: String,
}

impl Default for ReflowOptions {
    fn default() -> Self {
        Self {
            target_width: DEFAULT_TARGET_WIDTH,
            delimiter: None,
            export_marker: DEFAULT_EXPORT_MARKER.to_owned(),
        }
    }
}

/// Counts describing what a run wrote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReflowSummary {
    /// Lines written to the comment stream.
    pub comment_lines: usize,
    /// Paragraphs merged and rewrapped.
    pub paragraphs: usize,
    /// Comment lines copied without rewrapping.
    pub verbatim_lines: usize,
    /// Bytes copied to the passthrough stream.
    pub passthrough_bytes: usize,
}

impl ReflowSummary {
    const fn empty() -> Self {
        Self {
            comment_lines: 0,
            paragraphs: 0,
            verbatim_lines: 0,
            passthrough_bytes: 0,
        }
    }
}

/// Reflows the leading comment block of `input`, writing everything to
/// `output` in input order.
///
/// # Errors
///
/// Returns [`ReflowError::Read`] when reading fails and
/// [`ReflowError::Write`] when writing or flushing `output` fails. Output
/// accepted before the failure is still flushed.
pub fn reflow<R: Read, W: Write>(
    input: R,
    output: W,
    options: &ReflowOptions,
) -> Result<ReflowSummary, ReflowError> {
    let mut sinks = Sinks::<W, io::Sink>::shared(output);
    let outcome = engine::run(&mut BufReader::new(input), &mut sinks, options);
    finish(outcome, &mut sinks)
}

/// Reflows the leading comment block of `input`, writing the comment block
/// to `comments` and everything after it to `code`.
///
/// # Errors
///
/// Returns [`ReflowError::Read`] when reading fails and
/// [`ReflowError::Write`] when writing or flushing either output fails. Both
/// outputs are flushed before returning.
pub fn reflow_split<R: Read, W: Write, C: Write>(
    input: R,
    comments: W,
    code: C,
    options: &ReflowOptions,
) -> Result<ReflowSummary, ReflowError> {
    let mut sinks = Sinks::split(comments, code);
    let outcome = engine::run(&mut BufReader::new(input), &mut sinks, options);
    finish(outcome, &mut sinks)
}

/// Flushes the sinks, preferring the run's own error over a flush error.
fn finish<W: Write, C: Write>(
    outcome: Result<ReflowSummary, ReflowError>,
    sinks: &mut Sinks<W, C>,
) -> Result<ReflowSummary, ReflowError> {
    let flushed = sinks.flush();
    let summary = outcome?;
    flushed?;
    Ok(summary)
}
