//! ANSI-escape-aware width measurement.
//!
//! Cell widths and wrap decisions count codepoints, and SGR color/attribute
//! sequences (`ESC` ... `m`) contribute nothing to the visible width of a
//! string. This module measures lengths with those spans excluded so that
//! colored cells pad and wrap exactly like their plain equivalents.

/// Count the visible codepoints of `s`, excluding ANSI SGR escape spans.
///
/// A span starts at `ESC` (0x1B) and runs through the next `m`, inclusive.
/// An `ESC` without a terminating `m` is not a sequence; it and everything
/// after it count as visible.
///
/// # Example
///
/// ```
/// use gridtext::ansi::visible_width;
///
/// assert_eq!(visible_width("test"), 4);
/// assert_eq!(visible_width("\x1b[1mtest\x1b[0m"), 4);
/// ```
pub fn visible_width(s: &str) -> usize {
    let mut rest = s;
    let mut count = 0;
    loop {
        match rest.find('\x1b') {
            None => return count + rest.chars().count(),
            Some(i) => {
                count += rest[..i].chars().count();
                match rest[i..].find('m') {
                    // ESC and 'm' are both single-byte, so the slice stays on
                    // a char boundary.
                    Some(j) => rest = &rest[i + j + 1..],
                    None => return count + rest[i..].chars().count(),
                }
            }
        }
    }
}
