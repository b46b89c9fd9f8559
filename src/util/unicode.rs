use unicode_segmentation::UnicodeSegmentation;

/// Byte offset of the grapheme boundary before `byte_offset`, or `None` at
/// the start of the string.
pub fn prev_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    s[..byte_offset]
        .grapheme_indices(true)
        .last()
        .map(|(i, _)| i)
}

/// Byte offset of the grapheme boundary after `byte_offset`, or `None` at
/// the end of the string.
pub fn next_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    if byte_offset >= s.len() {
        return None;
    }
    let g = s[byte_offset..].graphemes(true).next()?;
    Some(byte_offset + g.len())
}
