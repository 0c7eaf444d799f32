// Lookup result: exact matches plus a tagged suggestion list

use serde::{Deserialize, Serialize};

/// Suggestions attached to a [`MatchResult`].
///
/// The two cases are distinct answers: an exact match means the word is
/// fine, while an empty candidate list means the word was checked and no
/// correction was found. On the wire the first is `null` and the second
/// is an array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<Vec<String>>", into = "Option<Vec<String>>")]
pub enum Suggestions {
    /// An exact match exists; no suggestion was computed.
    NoSuggestionNeeded,
    /// Candidates from the first non-empty suggestion tier (possibly empty).
    Candidates(Vec<String>),
}

impl Suggestions {
    /// The candidate list, or `None` when no suggestion was needed.
    pub fn as_candidates(&self) -> Option<&[String]> {
        match self {
            Suggestions::NoSuggestionNeeded => None,
            Suggestions::Candidates(list) => Some(list),
        }
    }
}

impl From<Option<Vec<String>>> for Suggestions {
    fn from(value: Option<Vec<String>>) -> Self {
        match value {
            Some(list) => Suggestions::Candidates(list),
            None => Suggestions::NoSuggestionNeeded,
        }
    }
}

impl From<Suggestions> for Option<Vec<String>> {
    fn from(value: Suggestions) -> Self {
        match value {
            Suggestions::NoSuggestionNeeded => None,
            Suggestions::Candidates(list) => Some(list),
        }
    }
}

/// The outcome of one dictionary lookup.
///
/// `suggestions` is [`Suggestions::NoSuggestionNeeded`] exactly when
/// `exact` is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Dictionary words at edit distance 0.
    pub exact: Vec<String>,
    /// Nearby dictionary words, when no exact match exists.
    pub suggestions: Suggestions,
}

impl MatchResult {
    /// A result for a word that matched the dictionary exactly.
    pub fn exact(exact: Vec<String>) -> Self {
        debug_assert!(!exact.is_empty());
        Self {
            exact,
            suggestions: Suggestions::NoSuggestionNeeded,
        }
    }

    /// A result for a word with no exact match.
    pub fn candidates(candidates: Vec<String>) -> Self {
        Self {
            exact: Vec::new(),
            suggestions: Suggestions::Candidates(candidates),
        }
    }

    /// Returns `true` if the word was found in the dictionary.
    pub fn is_exact(&self) -> bool {
        !self.exact.is_empty()
    }

    /// The single unambiguous candidate, if there is one.
    ///
    /// Prefers the exact tier when it holds exactly one word, then the
    /// suggestion list when it holds exactly one word. Zero or several
    /// candidates give `None`: the caller never guesses between plausible
    /// corrections.
    pub fn sole_candidate(&self) -> Option<&str> {
        if self.exact.len() == 1 {
            return Some(self.exact[0].as_str());
        }
        match self.suggestions.as_candidates() {
            Some([only]) => Some(only.as_str()),
            _ => None,
        }
    }
}
