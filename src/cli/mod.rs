//! Command-line operation handlers.
//!
//! - [`format`]: Reflow standard input and optionally spell check the result
//!
//! Output formatting utilities are in [`output`].

pub mod format;
pub mod output;
