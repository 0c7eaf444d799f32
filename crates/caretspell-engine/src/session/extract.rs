// Word extraction around a caret offset

use std::ops::Range;

use caretspell_core::character::{CharType, get_char_type, is_word_char};

/// Char range of the word touching `offset`.
///
/// Returns `None` if `offset` lies beyond the end of `text`. Otherwise
/// extends left while the preceding char is a word char, and right while
/// the char at the cursor is a word char. The range may be empty.
pub fn word_span_at_offset(text: &str, offset: usize) -> Option<Range<usize>> {
    let chars: Vec<char> = text.chars().collect();
    if offset > chars.len() {
        return None;
    }

    let mut start = offset;
    while start > 0 && is_word_char(chars[start - 1]) {
        start -= 1;
    }
    let mut end = offset;
    while end < chars.len() && is_word_char(chars[end]) {
        end += 1;
    }
    Some(start..end)
}

/// The word at or immediately before the char offset `offset`.
///
/// `None` means the offset is out of range; an empty string means there is
/// no word at the offset.
pub fn locate_word_at_offset(text: &str, offset: usize) -> Option<String> {
    let span = word_span_at_offset(text, offset)?;
    Some(text.chars().skip(span.start).take(span.len()).collect())
}

/// Returns `true` if `word` is worth looking up: it is non-empty and not
/// made only of digits, punctuation and whitespace.
pub fn is_checkable(word: &str) -> bool {
    !word.is_empty()
        && !word.chars().all(|c| {
            matches!(
                get_char_type(c),
                CharType::Digit | CharType::Punctuation | CharType::Whitespace
            )
        })
}
