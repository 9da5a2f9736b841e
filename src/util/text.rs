//! Character-offset helpers for row text
//!
//! Every offset in this crate counts `char`s, never bytes.

/// Number of characters in `text`
#[inline]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Convert a char offset to a byte offset, clamping to the end of `text`
pub fn char_to_byte(text: &str, char_offset: usize) -> usize {
    text.char_indices()
        .nth(char_offset)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

/// Split `text` at a char offset into `[0, offset)` and `[offset, len)`
pub fn split_at_char(text: &str, offset: usize) -> (&str, &str) {
    text.split_at(char_to_byte(text, offset))
}

/// Insert `ch` at a char offset
pub fn insert_char_at(text: &mut String, offset: usize, ch: char) {
    let byte = char_to_byte(text, offset);
    text.insert(byte, ch);
}

/// Remove the char range `[start, end)`, clamped to the text
pub fn remove_chars(text: &mut String, start: usize, end: usize) {
    let start_byte = char_to_byte(text, start);
    let end_byte = char_to_byte(text, end.max(start));
    text.replace_range(start_byte..end_byte, "");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_to_byte_multibyte() {
        let text = "añb";
        assert_eq!(char_to_byte(text, 0), 0);
        assert_eq!(char_to_byte(text, 2), 3);
        assert_eq!(char_to_byte(text, 10), text.len());
    }

    #[test]
    fn test_split_at_char() {
        assert_eq!(split_at_char("héllo", 2), ("hé", "llo"));
        assert_eq!(split_at_char("abc", 0), ("", "abc"));
        assert_eq!(split_at_char("abc", 9), ("abc", ""));
    }

    #[test]
    fn test_insert_and_remove() {
        let mut text = String::from("ac");
        insert_char_at(&mut text, 1, 'ß');
        assert_eq!(text, "aßc");
        remove_chars(&mut text, 0, 2);
        assert_eq!(text, "c");
        remove_chars(&mut text, 3, 1);
        assert_eq!(text, "c");
    }
}
