//! `commentfmt` entrypoint: reflows the leading comment block of standard
//! input onto standard output.

use std::io::{self, Write};
use std::process::ExitCode;

use commentfmt::logging::init_tracing;
use commentfmt::{CommentFmtConfig, CommentFmtError, WordListChecker};
use ortho_config::OrthoConfig;

mod cli;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), CommentFmtError> {
    let config = load_config()?;
    config.validate()?;
    init_tracing(config.verbose)?;

    let options = config.reflow_options();
    let checker = config.spell_checker()?;
    let mut stdout = io::stdout().lock();
    cli::format::run(
        io::stdin().lock(),
        &mut stdout,
        &options,
        checker.as_ref().map(|command| command as &dyn WordListChecker),
    )?;
    Ok(())
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`CommentFmtError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<CommentFmtConfig, CommentFmtError> {
    CommentFmtConfig::load().map_err(|error| CommentFmtError::Configuration {
        message: error.to_string(),
    })
}
