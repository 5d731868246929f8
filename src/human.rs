//! Human-oriented formatting glue: ordinals, digit grouping, byte sizes,
//! sentence casing, and display-width truncation.
//!
//! These helpers round out table output for CLI and logging callers; none of
//! them participate in the rendering core.

use std::cmp::Ordering;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Ordinal suffix for a number: "st", "nd", "rd", or "th" (1st, 2nd, 3rd...),
/// with the teens exception (11th, 12th, 13th).
pub fn ordinal_suffix(number: i64) -> &'static str {
    if (number / 10) % 10 == 1 || number % 10 > 3 {
        "th"
    } else if number % 10 == 1 {
        "st"
    } else if number % 10 == 2 {
        "nd"
    } else if number % 10 == 3 {
        "rd"
    } else {
        "th"
    }
}

/// Format `number` with `separator` at each thousands position:
/// `thousands_sep(1234567, ",")` gives `1,234,567`.
pub fn thousands_sep(number: i64, separator: &str) -> String {
    group_thousands(number.to_string(), separator)
}

/// Unsigned variant of [`thousands_sep`].
pub fn thousands_sep_u(number: u64, separator: &str) -> String {
    group_thousands(number.to_string(), separator)
}

fn group_thousands(mut digits: String, separator: &str) -> String {
    let mut i = digits.len() as isize - 3;
    while i > 0 {
        // Never split directly after a leading sign.
        if !(i == 1 && digits.starts_with('-')) {
            digits.insert_str(i as usize, separator);
        }
        i -= 3;
    }
    digits
}

const SIZE_STEPS: [(i64, &str); 6] = [
    (1 << 10, "K"),
    (1 << 20, "M"),
    (1 << 30, "G"),
    (1 << 40, "T"),
    (1 << 50, "P"),
    (1 << 60, "E"),
];

/// Compact 1024-based size: `human_size(1234567, "")` gives `1M`.
///
/// Values under 1K are emitted as bare numbers; `suffix` is appended to them
/// when clarity is needed (for example `"b"` for bytes). Division rounds
/// half up.
pub fn human_size(bytes: i64, suffix: &str) -> String {
    if bytes < 1024 {
        return format!("{bytes}{suffix}");
    }
    let mut value = bytes;
    let mut unit = suffix;
    for (divisor, label) in SIZE_STEPS {
        let mut scaled = bytes / divisor;
        if bytes % divisor >= divisor / 2 {
            scaled += 1;
        }
        if scaled < 1024 {
            value = scaled;
            unit = label;
            break;
        }
    }
    format!("{value}{unit}")
}

/// Uppercase the first character and ensure a trailing period. Useful for
/// turning conventional lowercase error messages into display sentences.
pub fn sentence(value: &str) -> String {
    let mut chars = value.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut out: String = first.to_uppercase().collect();
    out.push_str(chars.as_str());
    if !out.ends_with('.') {
        out.push('.');
    }
    out
}

/// Ordering of two strings by their lowercased forms, for case-insensitive
/// sorts via `sort_by`. Not a full Unicode collation, but usually good
/// enough.
pub fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Truncate a string to a maximum display width, appending `…` when
/// anything was cut. Unlike the rendering core this measures display
/// columns, so wide CJK characters count double.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut out = String::with_capacity(max_width);
    let mut width = 0;
    for c in s.chars() {
        let char_width = UnicodeWidthChar::width(c).unwrap_or(0);
        if width + char_width + 1 > max_width {
            out.push('…');
            break;
        }
        out.push(c);
        width += char_width;
    }
    out
}
