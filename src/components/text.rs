//! Display-width aware text fitting
//!
//! Column math uses `unicode-width` so Hangul and other wide glyphs take two
//! cells, matching what the terminal draws.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of a string in terminal cells
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Truncate to at most `width` cells without splitting a wide glyph
pub fn truncate(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        out.push(ch);
    }
    out
}

/// Left-align in exactly `width` cells
pub fn fit(text: &str, width: usize) -> String {
    let mut out = truncate(text, width);
    let pad = width.saturating_sub(display_width(&out));
    out.extend(std::iter::repeat_n(' ', pad));
    out
}

/// Right-align in exactly `width` cells
pub fn right(text: &str, width: usize) -> String {
    let body = truncate(text, width);
    let pad = width.saturating_sub(display_width(&body));
    format!("{}{}", " ".repeat(pad), body)
}

/// Center in exactly `width` cells; odd padding goes to the right
pub fn center(text: &str, width: usize) -> String {
    let body = truncate(text, width);
    let pad = width.saturating_sub(display_width(&body));
    let left = pad / 2;
    format!("{}{}{}", " ".repeat(left), body, " ".repeat(pad - left))
}
