// SpellChecker: owns the dictionary and the match strategy

use crate::dictionary::Dictionary;
use crate::matcher::{MatchResult, MatchStrategy, default_strategy};
use crate::session::replace::{apply_replacement, choose_replacement};

/// The dictionary plus the strategy used to search it.
///
/// Built once at startup and shared by every session; nothing here is
/// mutated after construction.
pub struct SpellChecker {
    dictionary: Dictionary,
    strategy: MatchStrategy,
}

impl SpellChecker {
    /// A checker using the default strategy.
    pub fn new(dictionary: Dictionary) -> Self {
        Self::with_strategy(dictionary, default_strategy())
    }

    pub fn with_strategy(dictionary: Dictionary, strategy: MatchStrategy) -> Self {
        Self {
            dictionary,
            strategy,
        }
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn strategy(&self) -> &MatchStrategy {
        &self.strategy
    }

    /// Find the exact matches or nearest suggestions for `word`.
    pub fn find_suggestions(&self, word: &str) -> MatchResult {
        self.strategy.find(word, &self.dictionary)
    }

    /// Look `word` up and reduce the result to at most one replacement,
    /// capitalized for its position in `full_text`. Empty when there is
    /// nothing unambiguous to offer.
    pub fn replacement_for(&self, word: &str, full_text: &str) -> String {
        let result = self.find_suggestions(word);
        choose_replacement(&result, full_text, word)
    }

    /// Correct every occurrence of `word` in `text` when an unambiguous
    /// replacement exists; otherwise return `text` unchanged.
    pub fn correct(&self, text: &str, word: &str) -> String {
        match self.find_suggestions(word).sole_candidate() {
            Some(candidate) => apply_replacement(text, word, candidate),
            None => text.to_string(),
        }
    }
}
