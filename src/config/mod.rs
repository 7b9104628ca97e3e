//! Command configuration loaded from CLI, environment, and files.
//!
//! Values are merged with ortho-config's layered approach, lowest precedence
//! first:
//!
//! 1. **Defaults** – 80 columns, autodetected delimiter, `export ` marker,
//!    spell checking off
//! 2. **Configuration file** – `.commentfmt.toml` in the current directory,
//!    home directory, or XDG config directory
//! 3. **Environment variables** – `COMMENTFMT_TARGET`, `COMMENTFMT_DELIM`,
//!    `COMMENTFMT_EXPORT_MARKER`, `COMMENTFMT_SPELL_COMMAND`
//! 4. **Command-line arguments** – `--target`/`-n`, `--delim`/`-d`,
//!    `--export-marker`, `--spell`/`-s`, `--spell-command`, `--verbose`/`-v`
//!
//! # Configuration File
//!
//! ```toml
//! target = 72
//! delim = "#"
//! export_marker = "export "
//! spell = true
//! spell_command = "aspell --lang=en list"
//! ```

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::error::CommentFmtError;
use crate::reflow::{DEFAULT_EXPORT_MARKER, DEFAULT_TARGET_WIDTH, ReflowOptions};
use crate::spell::{CommandChecker, DEFAULT_SPELL_COMMAND};

/// Settings for one `commentfmt` invocation.
///
/// # Example
///
/// ```no_run
/// use commentfmt::CommentFmtConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = CommentFmtConfig::load().expect("failed to load configuration");
/// config.validate().expect("invalid configuration");
/// let options = config.reflow_options();
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "COMMENTFMT",
    discovery(
        dotfile_name = ".commentfmt.toml",
        config_file_name = "commentfmt.toml",
        app_name = "commentfmt"
    )
)]
pub struct CommentFmtConfig {
    /// Column at which comment text wraps.
    ///
    /// Can be provided via:
    /// - CLI: `--target <COLUMNS>` or `-n <COLUMNS>`
    /// - Environment: `COMMENTFMT_TARGET`
    /// - Config file: `target = 80`
    #[ortho_config(cli_short = 'n')]
    pub target: usize,

    /// Comment delimiter such as `//`, `#` or `--`.
    ///
    /// When unset or empty the delimiter is detected from the first line.
    ///
    /// Can be provided via:
    /// - CLI: `--delim <TEXT>` or `-d <TEXT>`
    /// - Environment: `COMMENTFMT_DELIM`
    /// - Config file: `delim = "#"`
    #[ortho_config(cli_short = 'd')]
    pub delim: Option<String>,

    /// Text which, directly after the delimiter, ends the comment block.
    ///
    /// Can be provided via:
    /// - CLI: `--export-marker <TEXT>`
    /// - Environment: `COMMENTFMT_EXPORT_MARKER`
    /// - Config file: `export_marker = "export "`
    #[ortho_config()]
    pub export_marker: String,

    /// Runs the reflowed comment through a word-list checker.
    ///
    /// Can be provided via:
    /// - CLI: `--spell` / `-s`
    /// - Config file: `spell = true`
    ///
    /// Note: `ortho_config` does not load boolean values from the
    /// environment, so `COMMENTFMT_SPELL` is not supported.
    #[ortho_config(cli_short = 's')]
    pub spell: bool,

    /// Command line of the word-list checker used with `spell`.
    ///
    /// Can be provided via:
    /// - CLI: `--spell-command <COMMAND>`
    /// - Environment: `COMMENTFMT_SPELL_COMMAND`
    /// - Config file: `spell_command = "aspell list"`
    #[ortho_config()]
    pub spell_command: String,

    /// Enables debug logging on stderr.
    ///
    /// Can be provided via:
    /// - CLI: `--verbose` / `-v`
    /// - Config file: `verbose = true`
    #[ortho_config(cli_short = 'v')]
    pub verbose: bool,
}

impl Default for CommentFmtConfig {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET_WIDTH,
            delim: None,
            export_marker: DEFAULT_EXPORT_MARKER.to_owned(),
            spell: false,
            spell_command: DEFAULT_SPELL_COMMAND.to_owned(),
            verbose: false,
        }
    }
}

impl CommentFmtConfig {
    /// Checks that the merged values describe a runnable invocation.
    ///
    /// # Errors
    ///
    /// Returns [`CommentFmtError::Configuration`] when `target` is zero or
    /// when `spell` is set with a blank `spell_command`.
    pub fn validate(&self) -> Result<(), CommentFmtError> {
        if self.target == 0 {
            return Err(CommentFmtError::Configuration {
                message: "target width must be at least 1 (use --target or -n)".to_owned(),
            });
        }

        if self.spell && self.spell_command.trim().is_empty() {
            return Err(CommentFmtError::Configuration {
                message: "spell checking requires a command (use --spell-command)".to_owned(),
            });
        }

        Ok(())
    }

    /// Returns the reflow settings described by this configuration.
    #[must_use]
    pub fn reflow_options(&self) -> ReflowOptions {
        ReflowOptions {
            target_width: self.target,
            delimiter: self.delim.clone().filter(|delim| !delim.is_empty()),
            export_marker: self.export_marker.clone(),
        }
    }

    /// Returns the word-list checker to run, if spell checking is enabled.
    ///
    /// # Errors
    ///
    /// Returns [`CommentFmtError::SpellCheck`] when `spell_command` names no
    /// program.
    pub fn spell_checker(&self) -> Result<Option<CommandChecker>, CommentFmtError> {
        if !self.spell {
            return Ok(None);
        }
        Ok(Some(CommandChecker::from_command_line(&self.spell_command)?))
    }
}
