//! The line-by-line reflow state machine.

use std::io::{self, BufRead, Write};

use tracing::debug;

use super::error::ReflowError;
use super::paragraph::{Paragraph, trim_end, wrap_paragraph};
use super::prefix::CommentPrefix;
use super::sink::Sinks;
use super::{ReflowOptions, ReflowSummary};

const SPACE: &[u8] = b" ";
const NEWLINE: &[u8] = b"\n";

/// One input line, including its terminator when present.
struct Record {
    text: Vec<u8>,
    at_eof: bool,
}

/// How the leading comment block ended.
enum BlockEnd {
    /// A line outside the block was read; more input may follow.
    Passthrough,
    /// The input ran out while still inside the block.
    EndOfInput,
}

/// Reflows the leading comment block of `input` and copies the rest.
pub(crate) fn run<R, W, C>(
    input: &mut R,
    sinks: &mut Sinks<W, C>,
    options: &ReflowOptions,
) -> Result<ReflowSummary, ReflowError>
where
    R: BufRead,
    W: Write,
    C: Write,
{
    let first = read_record(input)?;
    let prefix = CommentPrefix::detect(
        &first.text,
        options.target_width,
        options.delimiter.as_deref(),
    );
    debug!(
        prefix = %String::from_utf8_lossy(prefix.as_bytes()).escape_debug(),
        width = prefix.width(),
        "detected comment prefix"
    );

    let mut engine = Engine::new(prefix, options.export_marker.as_bytes());
    if let BlockEnd::Passthrough = engine.reflow_block(first, input, sinks)? {
        engine.summary.passthrough_bytes += copy_remaining(input, sinks)?;
    }
    Ok(engine.summary)
}

fn read_record<R: BufRead>(input: &mut R) -> Result<Record, ReflowError> {
    let mut text = Vec::new();
    input
        .read_until(b'\n', &mut text)
        .map_err(|error| ReflowError::read(&error))?;
    let at_eof = !text.ends_with(NEWLINE);
    Ok(Record { text, at_eof })
}

fn copy_remaining<R, W, C>(input: &mut R, sinks: &mut Sinks<W, C>) -> Result<usize, ReflowError>
where
    R: BufRead,
    W: Write,
    C: Write,
{
    let mut copied = 0;
    loop {
        let chunk = match input.fill_buf() {
            Ok(chunk) => chunk,
            Err(error) if error.kind() == io::ErrorKind::Interrupted => continue,
            Err(error) => return Err(ReflowError::read(&error)),
        };
        if chunk.is_empty() {
            return Ok(copied);
        }
        sinks.code(chunk)?;
        let length = chunk.len();
        input.consume(length);
        copied += length;
    }
}

/// Per-run state: the fixed prefix plus the paragraph being accumulated.
struct Engine<'a> {
    prefix: CommentPrefix,
    export_marker: &'a [u8],
    paragraph: Paragraph,
    summary: ReflowSummary,
}

impl<'a> Engine<'a> {
    const fn new(prefix: CommentPrefix, export_marker: &'a [u8]) -> Self {
        Self {
            prefix,
            export_marker,
            paragraph: Paragraph::new(),
            summary: ReflowSummary::empty(),
        }
    }

    /// Returns true when `line` belongs to the comment block.
    ///
    /// An empty export marker never matches.
    fn is_comment_line(&self, line: &[u8]) -> bool {
        line.strip_prefix(self.prefix.as_bytes()).is_some_and(|rest| {
            self.export_marker.is_empty() || !rest.starts_with(self.export_marker)
        })
    }

    fn reflow_block<R, W, C>(
        &mut self,
        first: Record,
        input: &mut R,
        sinks: &mut Sinks<W, C>,
    ) -> Result<BlockEnd, ReflowError>
    where
        R: BufRead,
        W: Write,
        C: Write,
    {
        let mut pending = Some(first);
        loop {
            let record = match pending.take() {
                Some(record) => record,
                None => match read_record(input) {
                    Ok(record) => record,
                    Err(error) => {
                        self.flush_paragraph(sinks)?;
                        return Err(error);
                    }
                },
            };

            if !self.is_comment_line(&record.text) {
                self.flush_paragraph(sinks)?;
                if !record.text.is_empty() {
                    sinks.code(&record.text)?;
                    self.summary.passthrough_bytes += record.text.len();
                }
                return Ok(BlockEnd::Passthrough);
            }

            self.process_line(&record.text, sinks)?;
            if record.at_eof {
                self.flush_paragraph(sinks)?;
                return Ok(BlockEnd::EndOfInput);
            }
        }
    }

    fn process_line<W: Write, C: Write>(
        &mut self,
        line: &[u8],
        sinks: &mut Sinks<W, C>,
    ) -> Result<(), ReflowError> {
        let trimmed = trim_end(line);
        match trimmed.strip_prefix(self.prefix.as_bytes()) {
            None | Some([]) => {
                self.flush_paragraph(sinks)?;
                self.emit_verbatim(sinks, &[trimmed])
            }
            Some(body) => {
                let text = body.strip_prefix(SPACE).unwrap_or(body);
                match text.first() {
                    Some(b'\t') => {
                        self.flush_paragraph(sinks)?;
                        self.emit_prefixed(sinks, &[text])
                    }
                    Some(b' ') => {
                        self.flush_paragraph(sinks)?;
                        self.emit_prefixed(sinks, &[SPACE, text])
                    }
                    _ => {
                        self.paragraph.push_line(text);
                        Ok(())
                    }
                }
            }
        }
    }

    /// Wraps and writes the accumulated paragraph, leaving it empty.
    fn flush_paragraph<W: Write, C: Write>(
        &mut self,
        sinks: &mut Sinks<W, C>,
    ) -> Result<(), ReflowError> {
        if self.paragraph.is_empty() {
            return Ok(());
        }

        let text = self.paragraph.take();
        for line in wrap_paragraph(&text, self.prefix.width()) {
            write_line(sinks, &[self.prefix.as_bytes(), SPACE, line])?;
            self.summary.comment_lines += 1;
        }
        self.summary.paragraphs += 1;
        Ok(())
    }

    fn emit_prefixed<W: Write, C: Write>(
        &mut self,
        sinks: &mut Sinks<W, C>,
        parts: &[&[u8]],
    ) -> Result<(), ReflowError> {
        sinks.comment(self.prefix.as_bytes())?;
        self.emit_verbatim(sinks, parts)
    }

    fn emit_verbatim<W: Write, C: Write>(
        &mut self,
        sinks: &mut Sinks<W, C>,
        parts: &[&[u8]],
    ) -> Result<(), ReflowError> {
        write_line(sinks, parts)?;
        self.summary.comment_lines += 1;
        self.summary.verbatim_lines += 1;
        Ok(())
    }
}

fn write_line<W: Write, C: Write>(
    sinks: &mut Sinks<W, C>,
    parts: &[&[u8]],
) -> Result<(), ReflowError> {
    for part in parts {
        sinks.comment(part)?;
    }
    sinks.comment(NEWLINE)
}
