//! Terminal column widths of text.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::types::TextAlign;

/// Columns `s` occupies. Wide glyphs count two.
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Columns `c` occupies; zero for combining and control characters.
pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Cut `s` to at most `max_width` columns, ending in `…` when shortened.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_owned();
    }
    let Some(budget) = max_width.checked_sub(1) else {
        return String::new();
    };
    let mut used = 0;
    let mut out: String = s
        .chars()
        .take_while(|&c| {
            used += char_width(c);
            used <= budget
        })
        .collect();
    out.push('…');
    out
}

/// Horizontal offset of a line of `content_width` inside `available`
/// columns. Expects a physical alignment (see [`TextAlign::resolve`]).
pub fn align_offset(content_width: usize, available: usize, align: TextAlign) -> usize {
    if content_width >= available {
        return 0;
    }
    match align {
        TextAlign::Left | TextAlign::Start => 0,
        TextAlign::Center => (available - content_width) / 2,
        TextAlign::Right | TextAlign::End => available - content_width,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_adds_ellipsis() {
        assert_eq!(truncate_to_width("Jane Smith", 6), "Jane …");
        assert_eq!(truncate_to_width("Jane", 6), "Jane");
        assert_eq!(truncate_to_width("Jane", 0), "");
    }

    #[test]
    fn wide_chars_count_double() {
        assert_eq!(display_width("日本"), 4);
        assert_eq!(truncate_to_width("日本語", 4), "日…");
    }

    #[test]
    fn align_offsets() {
        assert_eq!(align_offset(4, 10, TextAlign::Left), 0);
        assert_eq!(align_offset(4, 10, TextAlign::Right), 6);
        assert_eq!(align_offset(4, 10, TextAlign::Center), 3);
        assert_eq!(align_offset(12, 10, TextAlign::Right), 0);
    }
}
