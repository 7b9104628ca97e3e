//! Reflows the leading comment block of a source file.
//!
//! The library reads a file as a stream of lines, merges consecutive
//! comment lines into paragraphs, and rewraps them to a target width. Lines
//! after the leading comment block pass through untouched. An optional
//! word-list checker can be run over the reflowed comment.

pub mod config;
pub mod error;
pub mod logging;
pub mod reflow;
pub mod spell;

pub use config::CommentFmtConfig;
pub use error::CommentFmtError;
pub use reflow::{
    CommentPrefix, Paragraph, ReflowError, ReflowOptions, ReflowSummary, reflow, reflow_split,
    wrap_paragraph,
};
pub use spell::{CommandChecker, SpellCheckError, WordListChecker};
