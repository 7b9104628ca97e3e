//! External word-list checker integration.
//!
//! The reflowed comment text can be handed to a checker such as
//! `aspell list`, which reads text on stdin and prints each word it does
//! not recognise. The reflow engine knows nothing about spelling; this
//! module only runs the command and tidies up its report.

use std::io::Write;
use std::process::{Command, Stdio};
use std::thread;

use thiserror::Error;

/// Command line used when none is configured.
pub const DEFAULT_SPELL_COMMAND: &str = "aspell list";

/// Errors raised while running a word-list checker.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SpellCheckError {
    /// The configured command line had no program in it.
    #[error("spell check command is empty")]
    EmptyCommand,

    /// The checker process could not be started.
    #[error("failed to launch {program}: {message}")]
    Launch {
        /// Program that failed to start.
        program: String,
        /// Error detail from the operating system.
        message: String,
    },

    /// Communicating with the checker process failed.
    #[error("{program} I/O failed: {message}")]
    Io {
        /// Program being run.
        program: String,
        /// Error detail from the failed pipe operation.
        message: String,
    },

    /// The checker exited unsuccessfully.
    #[error("{program} exited with {status}")]
    Failed {
        /// Program that failed.
        program: String,
        /// Exit status as reported by the operating system.
        status: String,
    },
}

/// A checker that lists the unrecognised words in a block of text.
pub trait WordListChecker {
    /// Returns the sorted, de-duplicated words the checker reports for
    /// `text`.
    ///
    /// # Errors
    ///
    /// Returns [`SpellCheckError`] when the checker cannot be run or fails.
    fn misspelled_words(&self, text: &[u8]) -> Result<Vec<String>, SpellCheckError>;
}

/// Runs an external command as the word-list checker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandChecker {
    program: String,
    args: Vec<String>,
}

impl CommandChecker {
    /// Creates a checker that runs `program` with `args`.
    #[must_use]
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Parses a whitespace-separated command line such as `aspell list`.
    ///
    /// # Errors
    ///
    /// Returns [`SpellCheckError::EmptyCommand`] when `command_line` holds
    /// no program name.
    pub fn from_command_line(command_line: &str) -> Result<Self, SpellCheckError> {
        let mut words = command_line.split_whitespace();
        let program = words.next().ok_or(SpellCheckError::EmptyCommand)?;
        Ok(Self::new(program, words.map(str::to_owned).collect()))
    }

    /// Returns the program this checker runs.
    #[must_use]
    pub const fn program(&self) -> &str {
        self.program.as_str()
    }

    fn io_error(&self, error: &std::io::Error) -> SpellCheckError {
        SpellCheckError::Io {
            program: self.program.clone(),
            message: error.to_string(),
        }
    }
}

impl Default for CommandChecker {
    fn default() -> Self {
        Self::new("aspell", vec!["list".to_owned()])
    }
}

impl WordListChecker for CommandChecker {
    fn misspelled_words(&self, text: &[u8]) -> Result<Vec<String>, SpellCheckError> {
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let mut child = command.spawn().map_err(|error| SpellCheckError::Launch {
            program: self.program.clone(),
            message: error.to_string(),
        })?;

        // The checker may fill its stdout pipe before it has read all of stdin.
        let stdin = child.stdin.take();
        let payload = text.to_vec();
        let feeder =
            thread::spawn(move || stdin.map_or(Ok(()), |mut pipe| pipe.write_all(&payload)));

        let output = child
            .wait_with_output()
            .map_err(|error| self.io_error(&error))?;
        match feeder.join() {
            Ok(Ok(())) => {}
            Ok(Err(error)) if error.kind() == std::io::ErrorKind::BrokenPipe => {}
            Ok(Err(error)) => return Err(self.io_error(&error)),
            Err(_panic) => {
                return Err(SpellCheckError::Io {
                    program: self.program.clone(),
                    message: "stdin writer panicked".to_owned(),
                });
            }
        }

        if !output.status.success() {
            return Err(SpellCheckError::Failed {
                program: self.program.clone(),
                status: output.status.to_string(),
            });
        }

        let mut report = String::from_utf8_lossy(&output.stdout).into_owned();
        report.push('\n');
        report.push_str(&String::from_utf8_lossy(&output.stderr));
        Ok(unique_words(&report))
    }
}

/// Splits a checker report into sorted, de-duplicated words.
#[must_use]
pub fn unique_words(report: &str) -> Vec<String> {
    let mut words: Vec<String> = report.split_whitespace().map(str::to_owned).collect();
    words.sort_unstable();
    words.dedup();
    words
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{CommandChecker, SpellCheckError, WordListChecker, unique_words};

    #[rstest]
    #[case::empty("", &[])]
    #[case::sorted("zebra\napple\n", &["apple", "zebra"])]
    #[case::duplicates("teh\nteh\nrecieve\nteh\n", &["recieve", "teh"])]
    #[case::mixed_whitespace("  one\ttwo \r\n one ", &["one", "two"])]
    fn unique_words_sorts_and_dedups(#[case] report: &str, #[case] expected: &[&str]) {
        assert_eq!(unique_words(report), expected);
    }

    #[test]
    fn parses_command_line() {
        let checker =
            CommandChecker::from_command_line("  aspell  list --lang=en ").expect("valid command");

        assert_eq!(
            checker,
            CommandChecker::new("aspell", vec!["list".to_owned(), "--lang=en".to_owned()])
        );
    }

    #[test]
    fn blank_command_line_is_rejected() {
        assert_eq!(
            CommandChecker::from_command_line("   "),
            Err(SpellCheckError::EmptyCommand)
        );
    }

    #[test]
    fn default_checker_runs_aspell_list() {
        let checker = CommandChecker::default();

        assert_eq!(
            Some(checker),
            CommandChecker::from_command_line(super::DEFAULT_SPELL_COMMAND).ok()
        );
    }

    #[test]
    fn missing_program_reports_launch_failure() {
        let checker = CommandChecker::new("commentfmt-no-such-checker", Vec::new());

        let result = checker.misspelled_words(b"text");

        assert!(
            matches!(result, Err(SpellCheckError::Launch { .. })),
            "expected launch failure, got {result:?}"
        );
    }

    #[cfg(unix)]
    #[test]
    fn echoing_checker_reports_every_word() {
        let checker = CommandChecker::new("cat", Vec::new());

        let words = checker
            .misspelled_words(b"// zebra apple\n// apple\n")
            .expect("cat should succeed");

        assert_eq!(words, ["//", "apple", "zebra"]);
    }

    #[cfg(unix)]
    #[test]
    fn failing_checker_is_reported() {
        let checker = CommandChecker::new("false", Vec::new());

        let result = checker.misspelled_words(b"text");

        assert!(
            matches!(result, Err(SpellCheckError::Failed { .. })),
            "expected exit failure, got {result:?}"
        );
    }
}
