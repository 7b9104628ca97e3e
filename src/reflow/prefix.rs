//! Comment prefix detection.
//!
//! The first input line decides, once per run, which delimiter marks a
//! comment line, how much indentation is part of that marker, and how many
//! columns remain for comment text.

/// Columns charged for each leading tab when computing the wrap width.
const TAB_COLUMNS: usize = 8;

/// Delimiters recognised when none is configured, checked in order.
///
/// Each entry pairs the text a line must start with and the delimiter it
/// selects. `--` only counts when a space follows it.
const AUTODETECT: [(&[u8], &str); 3] = [(b"-- ", "--"), (b"//", "//"), (b"#", "#")];

const FALLBACK_DELIMITER: &str = "//";

/// The prefix identifying comment lines and the width left for their text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentPrefix {
    prefix: Vec<u8>,
    width: usize,
}

impl CommentPrefix {
    /// Derives the working prefix and effective width from the first line.
    ///
    /// A run of leading spaces costs one column each and a run of leading
    /// tabs costs eight columns each; only the kind of whitespace the line
    /// starts with is counted. When `delimiter` is `None` or empty it is
    /// detected from the text after the indentation.
    ///
    /// If the line really starts with the delimiter, its indentation becomes
    /// part of the prefix and the delimiter's length is also deducted from
    /// the width. Otherwise the prefix is the bare delimiter.
    #[must_use]
    pub fn detect(first_line: &[u8], target_width: usize, delimiter: Option<&str>) -> Self {
        let (indent, content) = split_indent(first_line);
        let mut width = target_width.saturating_sub(indent_cost(indent));
        let chosen = delimiter
            .filter(|configured| !configured.is_empty())
            .unwrap_or_else(|| autodetect(content))
            .as_bytes();

        let prefix = if content.starts_with(chosen) {
            width = width.saturating_sub(chosen.len());
            [indent, chosen].concat()
        } else {
            chosen.to_vec()
        };

        Self { prefix, width }
    }

    /// Returns the prefix bytes, including any captured indentation.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8] {
        self.prefix.as_slice()
    }

    /// Returns the number of columns available for comment text.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }
}

/// Splits a line into its leading run of spaces or tabs and the remainder.
fn split_indent(line: &[u8]) -> (&[u8], &[u8]) {
    let fill = match line.first() {
        Some(&b' ') => b' ',
        Some(&b'\t') => b'\t',
        _ => return (&[], line),
    };
    let count = line.iter().take_while(|&&byte| byte == fill).count();
    line.split_at_checked(count).unwrap_or((&[], line))
}

fn indent_cost(indent: &[u8]) -> usize {
    indent
        .iter()
        .map(|&byte| if byte == b'\t' { TAB_COLUMNS } else { 1 })
        .sum()
}

fn autodetect(content: &[u8]) -> &'static str {
    AUTODETECT
        .iter()
        .find(|(probe, _)| content.starts_with(probe))
        .map_or(FALLBACK_DELIMITER, |&(_, delimiter)| delimiter)
}
