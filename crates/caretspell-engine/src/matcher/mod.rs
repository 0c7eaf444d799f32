// Dictionary matching
//
// Finds the closest dictionary words for a single word:
//   - `distance`: Levenshtein distance between comparison keys
//   - `result`: MatchResult and the tagged Suggestions type
//   - `strategy`: comparison passes and distance tiers

pub mod distance;
pub mod result;
pub mod strategy;

pub use result::{MatchResult, Suggestions};
pub use strategy::{AccentAware, Comparison, MatchStrategy, Normalized, Tier, default_strategy};

use crate::dictionary::Dictionary;

/// Look `word` up in `dictionary` with the default strategy.
///
/// Pure and total: no side effects, no error path.
pub fn find_suggestions(word: &str, dictionary: &Dictionary) -> MatchResult {
    default_strategy().find(word, dictionary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_suggestions_uses_default_tiers() {
        let dictionary = Dictionary::from_words(["hello", "world"]);
        let r = find_suggestions("helo", &dictionary);
        assert_eq!(r, MatchResult::candidates(vec!["hello".to_string()]));
    }
}
