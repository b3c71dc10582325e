//! Small rendering helpers shared by the screens.

use ratatui::layout::Rect;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::state::HitRect;

/// Convert a layout rectangle into a hit-test tuple.
#[must_use]
pub const fn hit_rect(r: Rect) -> HitRect {
    (r.x, r.y, r.width, r.height)
}

/// What: Collapse runs of whitespace (including newlines) into single spaces.
///
/// Output:
/// - Trimmed single-line text.
#[must_use]
pub fn one_line(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// What: Truncate text to a display width, appending `…` when cut.
///
/// Inputs:
/// - `s`: Text to fit
/// - `max`: Maximum display width in terminal cells
///
/// Output:
/// - `s` unchanged when it fits; otherwise a prefix plus `…` no wider than `max`.
///
/// Details:
/// - Uses `unicode-width` so wide characters count as two cells.
#[must_use]
pub fn truncate_to_width(s: &str, max: usize) -> String {
    if UnicodeWidthStr::width(s) <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let cw = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + cw + 1 > max {
            break;
        }
        out.push(ch);
        used += cw;
    }
    out.push('…');
    out
}

/// Display width of text in terminal cells.
#[must_use]
pub fn text_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Long text is cut with an ellipsis and never exceeds the width.
    fn truncate_to_width_cuts_with_ellipsis() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("abcdefghij", 5), "abcd…");
        assert_eq!(truncate_to_width("abc", 0), "");
        let wide = truncate_to_width("日本語のニュース", 7);
        assert!(text_width(&wide) <= 7, "{wide}");
        assert!(wide.ends_with('…'));
    }

    #[test]
    /// What: Newlines and repeated spaces collapse to single spaces.
    fn one_line_collapses_whitespace() {
        assert_eq!(one_line("  a\n\n b\t c "), "a b c");
        assert_eq!(one_line(""), "");
    }
}
