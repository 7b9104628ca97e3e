//! Diagnostic logging on stderr.
//!
//! Standard output carries the reformatted text, so every log event goes to
//! stderr. `RUST_LOG` overrides the default filter when it is set.

use std::io;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::CommentFmtError;

const QUIET_DIRECTIVE: &str = "commentfmt=warn";
const VERBOSE_DIRECTIVE: &str = "commentfmt=debug";

/// Returns the filter directive used when `RUST_LOG` is unset.
#[must_use]
pub const fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        VERBOSE_DIRECTIVE
    } else {
        QUIET_DIRECTIVE
    }
}

/// Builds the event filter from `RUST_LOG`, falling back to
/// [`default_directive`].
#[must_use]
pub fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

/// Installs the global tracing subscriber.
///
/// # Errors
///
/// Returns [`CommentFmtError::Configuration`] when a global subscriber has
/// already been installed.
pub fn init_tracing(verbose: bool) -> Result<(), CommentFmtError> {
    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .try_init()
        .map_err(|error| CommentFmtError::Configuration {
            message: format!("failed to initialise logging: {error}"),
        })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{default_directive, env_filter};

    #[rstest]
    #[case::quiet(false, "commentfmt=warn")]
    #[case::verbose(true, "commentfmt=debug")]
    fn default_directive_follows_verbosity(#[case] verbose: bool, #[case] expected: &str) {
        assert_eq!(default_directive(verbose), expected);
    }

    #[rstest]
    fn filter_falls_back_when_rust_log_is_unset() {
        let _guard = env_lock::lock_env([("RUST_LOG", None::<&str>)]);

        assert_eq!(env_filter(true).to_string(), "commentfmt=debug");
    }

    #[rstest]
    fn rust_log_overrides_default_filter() {
        let _guard = env_lock::lock_env([("RUST_LOG", Some("commentfmt=trace"))]);

        assert_eq!(env_filter(false).to_string(), "commentfmt=trace");
    }
}
