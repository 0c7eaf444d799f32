// First-letter capitalization

use crate::character::simple_upper;

/// Return `word` with its first character upper-cased.
///
/// Only the first char changes, using the simple one-to-one mapping; the
/// rest of the word is copied as-is. An empty word stays empty.
pub fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(word.len());
            out.push(simple_upper(first));
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

/// Apply [`capitalize_first`] only when `capitalize` is set.
pub fn capitalize_if(word: &str, capitalize: bool) -> String {
    if capitalize {
        capitalize_first(word)
    } else {
        word.to_string()
    }
}
