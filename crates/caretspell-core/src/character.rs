// Character classification and simple case mapping

// ---------------------------------------------------------------------------
// Character classes
// ---------------------------------------------------------------------------

/// Marks that may trail a word inside a whitespace token and are carried
/// over when the word is replaced: `. , ! ? ; :`
const TRAILING_PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':'];

/// Marks that end a sentence. A token ending in one of these makes the
/// following token a sentence start.
const SENTENCE_TERMINALS: &[char] = &['.', '!', '?'];

/// Character type classification used when deciding whether a word is
/// worth checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharType {
    Letter,
    Digit,
    Whitespace,
    Punctuation,
    Unknown,
}

/// Returns the character type for a given character.
///
/// Letters and numbers follow the Unicode general categories (`L*`, `N*`),
/// so `²` and `Ⅻ` are digits and `ß` is a letter.
pub fn get_char_type(c: char) -> CharType {
    if c.is_alphabetic() {
        return CharType::Letter;
    }
    if c.is_numeric() {
        return CharType::Digit;
    }
    if c.is_whitespace() {
        return CharType::Whitespace;
    }
    if c.is_ascii_punctuation() || is_unicode_punctuation(c) {
        return CharType::Punctuation;
    }
    CharType::Unknown
}

/// Common non-ASCII punctuation seen in typed prose.
fn is_unicode_punctuation(c: char) -> bool {
    matches!(
        c,
        '\u{00A1}' // ¡
            | '\u{00AB}' // «
            | '\u{00BB}' // »
            | '\u{00BF}' // ¿
            | '\u{2010}'..='\u{2027}' // hyphens, dashes, quotes, ellipsis
            | '\u{2030}'..='\u{205E}'
    )
}

/// Check whether a character belongs to the word class: a Unicode letter,
/// a Unicode number, or an ASCII hyphen.
pub fn is_word_char(c: char) -> bool {
    c == '-' || c.is_alphabetic() || c.is_numeric()
}

/// Check whether a character carries an accent, either as a precomposed
/// Latin letter (U+00C0..U+017F) or as a combining diacritical mark
/// (U+0300..U+036F).
pub fn is_accented(c: char) -> bool {
    (('\u{00C0}'..='\u{017F}').contains(&c) && c.is_alphabetic()) || is_combining_mark(c)
}

/// Check whether a character is in the combining diacritical marks block.
pub fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}

/// Check whether a character is one of the trailing punctuation marks that
/// survive a word replacement.
pub fn is_trailing_punctuation(c: char) -> bool {
    TRAILING_PUNCTUATION.contains(&c)
}

/// Check whether a character terminates a sentence.
pub fn is_sentence_terminal(c: char) -> bool {
    SENTENCE_TERMINALS.contains(&c)
}

// ---------------------------------------------------------------------------
// Simple case conversion
//
// The standard library's to_lowercase / to_uppercase produce iterators
// because some characters map to several characters. For a one-to-one
// mapping we only take the first one.
// ---------------------------------------------------------------------------

/// Convert a character to its simple uppercase equivalent.
pub fn simple_upper(c: char) -> char {
    let mut iter = c.to_uppercase();
    iter.next().unwrap_or(c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_type_letters() {
        assert_eq!(get_char_type('A'), CharType::Letter);
        assert_eq!(get_char_type('z'), CharType::Letter);
        assert_eq!(get_char_type('\u{00C7}'), CharType::Letter); // Ç
        assert_eq!(get_char_type('\u{00E3}'), CharType::Letter); // ã
    }

    #[test]
    fn char_type_digits() {
        assert_eq!(get_char_type('0'), CharType::Digit);
        assert_eq!(get_char_type('9'), CharType::Digit);
        assert_eq!(get_char_type('\u{00B2}'), CharType::Digit); // ²
    }

    #[test]
    fn char_type_whitespace_and_punctuation() {
        assert_eq!(get_char_type(' '), CharType::Whitespace);
        assert_eq!(get_char_type('\n'), CharType::Whitespace);
        assert_eq!(get_char_type('.'), CharType::Punctuation);
        assert_eq!(get_char_type('\u{2026}'), CharType::Punctuation); // …
        assert_eq!(get_char_type('\u{00BF}'), CharType::Punctuation); // ¿
    }

    #[test]
    fn word_chars() {
        assert!(is_word_char('a'));
        assert!(is_word_char('\u{00E9}')); // é
        assert!(is_word_char('7'));
        assert!(is_word_char('-'));
        assert!(!is_word_char(' '));
        assert!(!is_word_char('.'));
        assert!(!is_word_char('\''));
    }

    #[test]
    fn accented_chars() {
        assert!(is_accented('\u{00E1}')); // á
        assert!(is_accented('\u{00C3}')); // Ã
        assert!(is_accented('\u{0153}')); // œ
        assert!(is_accented('\u{0301}')); // combining acute
        assert!(!is_accented('a'));
        assert!(!is_accented('\u{00D7}')); // ×
    }

    #[test]
    fn trailing_punctuation_set() {
        for c in ['.', ',', '!', '?', ';', ':'] {
            assert!(is_trailing_punctuation(c));
        }
        assert!(!is_trailing_punctuation('-'));
        assert!(!is_trailing_punctuation('"'));
    }

    #[test]
    fn sentence_terminals() {
        assert!(is_sentence_terminal('.'));
        assert!(is_sentence_terminal('!'));
        assert!(is_sentence_terminal('?'));
        assert!(!is_sentence_terminal(','));
        assert!(!is_sentence_terminal(';'));
    }

    #[test]
    fn simple_case_mapping() {
        assert_eq!(simple_upper('\u{00E7}'), '\u{00C7}'); // ç -> Ç
        assert_eq!(simple_upper('1'), '1');
        // 'ß' uppercases to "SS"; only the first char is kept.
        assert_eq!(simple_upper('\u{00DF}'), 'S');
    }
}
