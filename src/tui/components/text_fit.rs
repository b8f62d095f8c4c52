//! Width-aware text fitting for fixed-size grid cells.

use unicode_width::UnicodeWidthChar;

/// Truncates or pads `text` to exactly `width` terminal columns.
///
/// Zero-width characters are kept; wide characters that would overflow the
/// cell are dropped rather than split. Padding uses plain spaces.
#[must_use]
pub fn pad_or_truncate(text: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }

    let mut output = String::new();
    let mut visible_width = 0_usize;

    for ch in text.chars() {
        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if char_width == 0 {
            output.push(ch);
            continue;
        }

        if visible_width.saturating_add(char_width) > width {
            break;
        }

        output.push(ch);
        visible_width = visible_width.saturating_add(char_width);
    }

    if visible_width < width {
        output.push_str(&" ".repeat(width - visible_width));
    }

    output
}
