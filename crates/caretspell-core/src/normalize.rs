// Comparison forms of words: case folding, accent stripping, tag and
// punctuation stripping

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::character::{is_accented, is_combining_mark, is_trailing_punctuation};

/// Lower-case a word for case-insensitive comparison.
pub fn fold_case(word: &str) -> String {
    word.to_lowercase()
}

/// Accent- and case-insensitive form of a word.
///
/// Applies canonical decomposition (NFD), drops combining diacritical marks
/// and lower-cases the result: `"Ação"` becomes `"acao"`.
pub fn normalize_word(word: &str) -> String {
    word.nfd()
        .filter(|&c| !is_combining_mark(c))
        .collect::<String>()
        .to_lowercase()
}

/// Returns `true` if any character of `word` carries an accent.
pub fn has_accent(word: &str) -> bool {
    word.chars().any(is_accented)
}

/// HTML-like tag: `<` up to the nearest `>`.
static TAG: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new("<[^>]*>").ok());

/// Remove HTML-like `<...>` tags. An unterminated `<` is kept verbatim.
pub fn strip_tags(text: &str) -> String {
    match TAG.as_ref() {
        Some(tag) => tag.replace_all(text, "").into_owned(),
        None => text.to_string(),
    }
}

/// Split a token into its body and its run of trailing punctuation marks
/// (`[.,!?;:]+`). Either half may be empty.
pub fn split_trailing_punctuation(token: &str) -> (&str, &str) {
    let body = token.trim_end_matches(is_trailing_punctuation);
    (body, &token[body.len()..])
}

/// Token body with trailing punctuation removed, case-folded.
pub fn match_key(token: &str) -> String {
    fold_case(split_trailing_punctuation(token).0)
}
