//! Buffered output streams for comment text and passthrough code.

use std::io::{self, BufWriter, Write};

use super::error::ReflowError;

/// Where reflowed comments and passthrough text are written.
///
/// A shared sink interleaves both kinds of output in input order. A split
/// sink sends the comment block to one writer and everything after it to
/// another.
pub(crate) enum Sinks<W: Write, C: Write> {
    Shared(BufWriter<W>),
    Split {
        comments: BufWriter<W>,
        code: BufWriter<C>,
    },
}

impl<W: Write> Sinks<W, io::Sink> {
    pub(crate) fn shared(output: W) -> Self {
        Self::Shared(BufWriter::new(output))
    }
}

impl<W: Write, C: Write> Sinks<W, C> {
    pub(crate) fn split(comments: W, code: C) -> Self {
        Self::Split {
            comments: BufWriter::new(comments),
            code: BufWriter::new(code),
        }
    }

    /// Writes all of `bytes` to the comment stream.
    pub(crate) fn comment(&mut self, bytes: &[u8]) -> Result<(), ReflowError> {
        let writer: &mut dyn Write = match self {
            Self::Shared(output) => output,
            Self::Split { comments, .. } => comments,
        };
        writer.write_all(bytes).map_err(|error| ReflowError::write(&error))
    }

    /// Writes all of `bytes` to the passthrough stream.
    pub(crate) fn code(&mut self, bytes: &[u8]) -> Result<(), ReflowError> {
        let writer: &mut dyn Write = match self {
            Self::Shared(output) => output,
            Self::Split { code, .. } => code,
        };
        writer.write_all(bytes).map_err(|error| ReflowError::write(&error))
    }

    /// Flushes every stream, attempting each one even if an earlier flush
    /// failed. The comment stream's error wins when both fail.
    pub(crate) fn flush(&mut self) -> Result<(), ReflowError> {
        match self {
            Self::Shared(output) => output.flush().map_err(|error| ReflowError::write(&error)),
            Self::Split { comments, code } => {
                let comments_flushed = comments.flush();
                let code_flushed = code.flush();
                comments_flushed
                    .and(code_flushed)
                    .map_err(|error| ReflowError::write(&error))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, Write};

    use super::Sinks;
    use crate::reflow::ReflowError;

    /// Writer that rejects every write.
    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn shared_sink_interleaves_in_write_order() {
        let mut buffer = Vec::<u8>::new();
        {
            let mut sinks = Sinks::shared(&mut buffer);
            sinks.comment(b"// one\n").expect("comment write");
            sinks.code(b"code\n").expect("code write");
            sinks.comment(b"// two\n").expect("comment write");
            sinks.flush().expect("flush");
        }

        assert_eq!(buffer, b"// one\ncode\n// two\n".to_vec());
    }

    #[test]
    fn split_sink_separates_streams() {
        let mut comments = Vec::<u8>::new();
        let mut code = Vec::<u8>::new();
        {
            let mut sinks = Sinks::split(&mut comments, &mut code);
            sinks.comment(b"// one\n").expect("comment write");
            sinks.code(b"code\n").expect("code write");
            sinks.flush().expect("flush");
        }

        assert_eq!(comments, b"// one\n".to_vec());
        assert_eq!(code, b"code\n".to_vec());
    }

    #[test]
    fn split_flush_reports_failure_from_either_stream() {
        let mut comments = Vec::<u8>::new();
        let mut sinks = Sinks::split(&mut comments, BrokenPipe);
        sinks.code(b"buffered").expect("write is buffered");

        let result = sinks.flush();

        assert!(
            matches!(result, Err(ReflowError::Write { .. })),
            "flush should surface the code stream failure, got {result:?}"
        );
    }
}
