//! Greedy paragraph-aware text wrapping.
//!
//! Text is split into paragraphs on blank lines and each paragraph is
//! reflowed independently: single line breaks become spaces, whitespace runs
//! collapse to single separators, and words are placed greedily until the
//! next word would overflow the target width. Words carrying ANSI SGR
//! sequences wrap by their visible length, so colored text breaks exactly
//! like plain text.

use crate::ansi::visible_width;
use crate::terminal::{TerminalWidthSource, WidthSource};

/// Wrap `text` to `width` columns.
///
/// A non-positive `width` is resolved against the ambient terminal width:
/// `0` uses it outright, a negative value is added to it (`-2` on a
/// 80-column terminal wraps to 78). `first_indent` prefixes the first line
/// of each paragraph, `rest_indent` every continuation line; both count
/// toward the line width. Paragraphs are joined by a blank line and the
/// result carries no leading or trailing blank lines. Empty input returns
/// empty output.
///
/// # Example
///
/// ```
/// use gridtext::wrap;
///
/// assert_eq!(wrap("Just a test sentence.", 10, "", ""), "Just a\ntest\nsentence.");
/// ```
pub fn wrap(text: &str, width: isize, first_indent: &str, rest_indent: &str) -> String {
    wrap_with_source(text, width, first_indent, rest_indent, &TerminalWidthSource)
}

/// [`wrap`] with an explicit ambient width source.
///
/// Only consulted when `width` is non-positive.
pub fn wrap_with_source(
    text: &str,
    width: isize,
    first_indent: &str,
    rest_indent: &str,
    source: &dyn WidthSource,
) -> String {
    if text.is_empty() {
        return String::new();
    }
    let width = resolve_width(width, source);
    let text = text.replace("\r\n", "\n");
    let mut out = String::with_capacity(text.len() + first_indent.len() + rest_indent.len());
    for paragraph in text.split("\n\n") {
        let paragraph = paragraph.replace('\n', " ");
        let mut line_len = 0;
        let mut start = true;
        for word in paragraph.split_whitespace() {
            let word_len = visible_width(word);
            if start {
                out.push_str(first_indent);
                out.push_str(word);
                line_len = visible_width(first_indent) + word_len;
                start = false;
            } else if line_len + 1 + word_len > width {
                out.push('\n');
                out.push_str(rest_indent);
                out.push_str(word);
                line_len = visible_width(rest_indent) + word_len;
            } else {
                out.push(' ');
                out.push_str(word);
                line_len += 1 + word_len;
            }
        }
        out.push_str("\n\n");
    }
    out.trim_matches('\n').to_string()
}

/// Resolve a caller width against the ambient source; non-positive widths
/// are relative to it. Clamped to at least one column.
fn resolve_width(width: isize, source: &dyn WidthSource) -> usize {
    if width > 0 {
        width as usize
    } else {
        (source.width() as isize + width).max(1) as usize
    }
}
