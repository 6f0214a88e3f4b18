//! Shared rendering utilities and helpers.
//!
//! Low-level text utilities used by the view components and the painter.
//!
//! # Features
//!
//! - **Match Highlighting**: Locates the search text inside a name
//! - **Display Width**: Pads and truncates by terminal columns, so wide
//!   (Hangul) characters align
//! - **Number Formatting**: Thousands separators for counts
//!
//! # Example
//!
//! ```rust
//! use musicianhub::ui::helpers::{group_thousands, match_range, pad_to_width};
//!
//! assert_eq!(match_range("Lee Sohyun", "SOH"), Some((4, 7)));
//! assert_eq!(group_thousands(25_890), "25,890");
//! assert_eq!(pad_to_width("서울", 6), "서울  ");
//! ```

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Returns the ANSI sequence that moves the cursor to `row`, `col`.
///
/// Coordinates are 1-indexed.
#[must_use]
pub fn position_cursor(row: usize, col: usize) -> String {
    format!("\u{1b}[{row};{col}H")
}

/// Finds the first case-insensitive occurrence of `query` in `text`.
///
/// # Returns
///
/// `(start, end)` character indices (inclusive start, exclusive end), or
/// `None` for an empty query or no match.
#[must_use]
pub fn match_range(text: &str, query: &str) -> Option<(usize, usize)> {
    if query.is_empty() {
        return None;
    }

    let needle = query.to_lowercase();
    let chars: Vec<char> = text.chars().collect();

    (0..chars.len()).find_map(|start| {
        let mut lowered = String::new();
        for (offset, c) in chars[start..].iter().enumerate() {
            lowered.extend(c.to_lowercase());
            if lowered == needle {
                return Some((start, start + offset + 1));
            }
            if !needle.starts_with(&lowered) {
                return None;
            }
        }
        None
    })
}

/// Splits `text` into `(before, matched, after)` around `range`.
#[must_use]
pub fn split_at_range(text: &str, range: (usize, usize)) -> (String, String, String) {
    let chars: Vec<char> = text.chars().collect();
    let start = range.0.min(chars.len());
    let end = range.1.clamp(start, chars.len());

    (
        chars[..start].iter().collect(),
        chars[start..end].iter().collect(),
        chars[end..].iter().collect(),
    )
}

/// Terminal column width of `text`.
#[must_use]
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Cuts `text` to at most `width` columns.
#[must_use]
pub fn truncate_to_width(text: &str, width: usize) -> String {
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        out.push(c);
    }
    out
}

/// Truncates or right-pads `text` with spaces to exactly `width` columns.
#[must_use]
pub fn pad_to_width(text: &str, width: usize) -> String {
    let cut = truncate_to_width(text, width);
    let pad = width.saturating_sub(display_width(&cut));
    format!("{cut}{}", " ".repeat(pad))
}

/// Formats `n` with comma thousands separators.
#[must_use]
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
