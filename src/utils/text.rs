// src/utils/text.rs

//! Text measurement for column alignment.

use unicode_segmentation::UnicodeSegmentation;

/// Visible width of a cell, counted in grapheme clusters.
///
/// City names such as "Kraków" or "Dhamma Mahī" must not be padded by their
/// byte length.
pub fn display_width(text: &str) -> usize {
    text.graphemes(true).count()
}

/// Left-align `text` in a field of `width` graphemes.
pub fn pad_right(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(text));
    let mut out = String::with_capacity(text.len() + fill);
    out.push_str(text);
    out.extend(std::iter::repeat_n(' ', fill));
    out
}
