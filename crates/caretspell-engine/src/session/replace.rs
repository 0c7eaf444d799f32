// Choosing a single replacement and splicing it into text

use caretspell_core::case::capitalize_if;
use caretspell_core::normalize::{match_key, normalize_word, split_trailing_punctuation, strip_tags};
use caretspell_core::token::{is_sentence_start, tokenize, words};

use crate::matcher::MatchResult;

/// Reduce a lookup result to at most one replacement for `original_word`.
///
/// Returns the sole candidate of `result` (see
/// [`MatchResult::sole_candidate`]), or an empty string when there is no
/// candidate or more than one. The candidate's first letter is upper-cased
/// when `original_word` sits at a sentence start in `full_text`; the word
/// is located among the whitespace tokens of `full_text` by comparing
/// accent- and case-insensitive forms with markup tags removed.
pub fn choose_replacement(result: &MatchResult, full_text: &str, original_word: &str) -> String {
    let Some(candidate) = result.sole_candidate() else {
        return String::new();
    };

    let tokens = words(full_text);
    let target = normalize_word(original_word);
    let index = tokens
        .iter()
        .position(|token| normalize_word(&strip_tags(token)) == target);

    let at_sentence_start = index.is_some_and(|i| is_sentence_start(&tokens, i));
    capitalize_if(candidate, at_sentence_start)
}

/// Replace every whitespace-delimited occurrence of `original_word` in
/// `text` with `replacement`.
///
/// `replacement` is the candidate in dictionary casing, not the display
/// form from [`choose_replacement`]. Tokens match when their bodies
/// (trailing `[.,!?;:]+` removed) are equal ignoring case. Each
/// substitution keeps its token's trailing punctuation and is capitalized
/// only if that token starts a sentence. Whitespace between tokens is kept
/// as it was. Replacing a word with itself returns `text` unchanged.
pub fn apply_replacement(text: &str, original_word: &str, replacement: &str) -> String {
    if replacement == original_word {
        return text.to_string();
    }
    let target = match_key(original_word);
    if target.is_empty() {
        return text.to_string();
    }

    let original_words = words(text);
    let mut word_index = 0;
    let mut out = String::with_capacity(text.len() + replacement.len());

    for token in tokenize(text) {
        if !token.is_word() {
            out.push_str(&token.text);
            continue;
        }
        if match_key(&token.text) == target {
            let (_, punctuation) = split_trailing_punctuation(&token.text);
            let capitalize = is_sentence_start(&original_words, word_index);
            out.push_str(&capitalize_if(replacement, capitalize));
            out.push_str(punctuation);
        } else {
            out.push_str(&token.text);
        }
        word_index += 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn suggestion(word: &str) -> MatchResult {
        MatchResult::candidates(vec![word.to_string()])
    }

    // -- choose_replacement --

    #[test]
    fn choose_single_suggestion() {
        let r = suggestion("hello");
        assert_eq!(choose_replacement(&r, "I said helo there", "helo"), "hello");
    }

    #[test]
    fn choose_single_exact() {
        let r = MatchResult::exact(vec!["hello".to_string()]);
        assert_eq!(choose_replacement(&r, "I said hello", "hello"), "hello");
    }

    #[test]
    fn choose_nothing_when_ambiguous() {
        let none = MatchResult::candidates(Vec::new());
        assert_eq!(choose_replacement(&none, "helo", "helo"), "");

        let two = MatchResult::candidates(vec!["hello".to_string(), "help".to_string()]);
        assert_eq!(choose_replacement(&two, "helo", "helo"), "");

        let two_exact = MatchResult::exact(vec!["Polish".to_string(), "polish".to_string()]);
        assert_eq!(choose_replacement(&two_exact, "polish", "polish"), "");
    }

    #[test]
    fn choose_capitalizes_first_token() {
        let r = suggestion("hello");
        assert_eq!(choose_replacement(&r, "helo world.", "helo"), "Hello");
    }

    #[test]
    fn choose_capitalizes_after_terminal() {
        let r = suggestion("hello");
        assert_eq!(choose_replacement(&r, "Go. helo there", "helo"), "Hello");
        assert_eq!(choose_replacement(&r, "Really? helo", "helo"), "Hello");
        assert_eq!(choose_replacement(&r, "Yes, helo", "helo"), "hello");
    }

    #[test]
    fn choose_locates_word_through_tags_and_accents() {
        let r = suggestion("hello");
        assert_eq!(choose_replacement(&r, "<p>Helo</p> there", "helo"), "Hello");
        let r = suggestion("n\u{00E3}o");
        assert_eq!(choose_replacement(&r, "Fim. nao", "n\u{00E3}o"), "N\u{00E3}o");
    }

    #[test]
    fn choose_without_locating_word_keeps_case() {
        // The token carries punctuation, so it is not located.
        let r = suggestion("hello");
        assert_eq!(choose_replacement(&r, "helo.", "helo"), "hello");
    }

    // -- apply_replacement --

    #[test]
    fn apply_capitalizes_first_token() {
        assert_eq!(apply_replacement("helo world.", "helo", "hello"), "Hello world.");
        assert_eq!(apply_replacement("Helo world.", "Helo", "Hello"), "Hello world.");
    }

    #[test]
    fn apply_capitalizes_after_period() {
        assert_eq!(apply_replacement("Go. helo there", "helo", "hello"), "Go. Hello there");
    }

    #[test]
    fn apply_capitalizes_each_occurrence_independently() {
        assert_eq!(
            apply_replacement("Go. helo and helo", "helo", "hello"),
            "Go. Hello and hello"
        );
        assert_eq!(apply_replacement("wrld, Wrld. wrld", "wrld", "world"), "World, world. World");
    }

    #[test]
    fn apply_keeps_dictionary_capitals() {
        assert_eq!(apply_replacement("so i said. i", "i", "I"), "so I said. I");
    }

    #[test]
    fn apply_keeps_trailing_punctuation() {
        assert_eq!(apply_replacement("I said helo.", "helo", "hello"), "I said hello.");
        assert_eq!(apply_replacement("I said helo?!", "helo", "hello"), "I said hello?!");
        assert_eq!(apply_replacement("helo, you", "helo", "hello"), "Hello, you");
    }

    #[test]
    fn apply_replaces_every_occurrence() {
        assert_eq!(
            apply_replacement("a helo and helo. helo", "helo", "hello"),
            "a hello and hello. Hello"
        );
    }

    #[test]
    fn apply_is_case_insensitive_on_match() {
        assert_eq!(apply_replacement("say HELO now", "helo", "hello"), "say hello now");
    }

    #[test]
    fn apply_same_word_is_noop() {
        let text = "hello   world.  hello";
        assert_eq!(apply_replacement(text, "hello", "hello"), text);
    }

    #[test]
    fn apply_keeps_spacing() {
        assert_eq!(
            apply_replacement("I have a helo\tfriend ", "helo", "hello"),
            "I have a hello\tfriend "
        );
    }

    #[test]
    fn apply_leaves_partial_matches() {
        assert_eq!(apply_replacement("helox helo-x", "helo", "hello"), "helox helo-x");
    }

    #[test]
    fn apply_ignores_punctuation_only_target() {
        assert_eq!(apply_replacement("wait ... ok", "...", "x"), "wait ... ok");
    }
}
