//! Paragraph accumulation and wrapping.
//!
//! Consecutive prose comment lines are merged into a single [`Paragraph`]
//! that holds no line breaks. Wrapping happens only when the paragraph is
//! flushed, through [`wrap_paragraph`]:
//!
//! - The break goes on the last whitespace before the width boundary.
//! - A leading word too long to fit is kept whole; the break goes on the
//!   first whitespace after the boundary instead.
//! - Whitespace around a break is dropped.

/// Returns true for the whitespace bytes that separate words.
pub(crate) const fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r' | b'\n')
}

/// Strips trailing whitespace as defined by [`is_space`].
pub(crate) fn trim_end(text: &[u8]) -> &[u8] {
    let keep = text
        .iter()
        .rposition(|&byte| !is_space(byte))
        .map_or(0, |last| last + 1);
    text.get(..keep).unwrap_or_default()
}

fn trim_start(text: &[u8]) -> &[u8] {
    let skip = text
        .iter()
        .position(|&byte| !is_space(byte))
        .unwrap_or(text.len());
    text.get(skip..).unwrap_or_default()
}

/// Merged prose awaiting a flush.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paragraph {
    text: Vec<u8>,
}

impl Paragraph {
    /// Creates an empty paragraph.
    #[must_use]
    pub const fn new() -> Self {
        Self { text: Vec::new() }
    }

    /// Appends one line of prose.
    ///
    /// Lines are joined with a single space, or with two spaces when the
    /// text so far ends a sentence with a period.
    pub fn push_line(&mut self, line: &[u8]) {
        if self.text.last() == Some(&b'.') {
            self.text.push(b' ');
        }
        if !self.text.is_empty() {
            self.text.push(b' ');
        }
        self.text.extend_from_slice(line);
    }

    /// Returns true when nothing has been merged since the last flush.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns the merged text.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8] {
        self.text.as_slice()
    }

    /// Empties the paragraph, returning what it held.
    pub fn take(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.text)
    }
}

/// Splits `text` into lines shorter than `width` bytes where possible.
///
/// Wrapping continues while the remaining text plus the separating space
/// would not fit, so text exactly `width` bytes long is still broken. A line
/// only exceeds `width` when it starts with a word longer than `width`, or
/// when the remainder has no whitespace left to break on.
#[must_use]
pub fn wrap_paragraph(text: &[u8], width: usize) -> Vec<&[u8]> {
    let mut lines = Vec::new();
    let mut rest = text;

    while rest.len() >= width {
        let Some(split) = find_break(rest, width) else {
            break;
        };
        let Some((head, tail)) = rest.split_at_checked(split) else {
            break;
        };
        let line = trim_end(head);
        if !line.is_empty() {
            lines.push(line);
        }
        rest = trim_start(tail);
    }

    if !rest.is_empty() {
        lines.push(rest);
    }
    lines
}

/// Finds the whitespace byte to break on.
///
/// Scans back from `width - 1` towards the start. Position 0 never counts,
/// so when nothing is found the scan moves forward from `width` to the end.
fn find_break(text: &[u8], width: usize) -> Option<usize> {
    let space_at = |index: &usize| text.get(*index).copied().is_some_and(is_space);

    (1..width.min(text.len()))
        .rev()
        .find(space_at)
        .or_else(|| (width..text.len()).find(space_at))
}
