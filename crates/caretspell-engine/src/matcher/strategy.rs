// Match strategy: ordered comparison passes over ordered distance tiers

use caretspell_core::normalize::{fold_case, has_accent, normalize_word};

use super::distance::is_at_distance;
use super::result::MatchResult;
use crate::dictionary::{Dictionary, DictionaryEntry};

// =========================================================================
// Comparisons
// =========================================================================

/// One way of comparing a word against dictionary entries.
///
/// A comparison turns the word and each entry into comparison keys; the
/// strategy measures edit distance between those keys. Within a tier the
/// comparisons are tried in order and the first one producing any hit
/// wins, so a tier never mixes keys from two comparisons.
pub trait Comparison {
    /// Short name used in log output.
    fn name(&self) -> &'static str;

    /// Whether this comparison should run for `word` at all.
    fn applies_to(&self, word: &str) -> bool;

    /// The comparison key of the looked-up word.
    fn word_key(&self, word: &str) -> String;

    /// The comparison key of a dictionary entry.
    fn entry_key<'e>(&self, entry: &'e DictionaryEntry) -> &'e str;
}

/// Case-insensitive comparison that keeps accents. Only runs for words
/// that carry an accent, so `"você"` prefers `"você"` over `"voce"`.
pub struct AccentAware;

impl Comparison for AccentAware {
    fn name(&self) -> &'static str {
        "accent-aware"
    }

    fn applies_to(&self, word: &str) -> bool {
        has_accent(word)
    }

    fn word_key(&self, word: &str) -> String {
        fold_case(word)
    }

    fn entry_key<'e>(&self, entry: &'e DictionaryEntry) -> &'e str {
        &entry.folded
    }
}

/// Case- and accent-insensitive comparison. Always applies.
pub struct Normalized;

impl Comparison for Normalized {
    fn name(&self) -> &'static str {
        "normalized"
    }

    fn applies_to(&self, _word: &str) -> bool {
        true
    }

    fn word_key(&self, word: &str) -> String {
        normalize_word(word)
    }

    fn entry_key<'e>(&self, entry: &'e DictionaryEntry) -> &'e str {
        &entry.normalized
    }
}

// =========================================================================
// Tiers
// =========================================================================

/// A suggestion tier: an exact edit distance and the char-length deltas
/// (`entry - word`) a candidate may have at that distance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tier {
    pub distance: usize,
    pub length_deltas: Vec<isize>,
}

impl Tier {
    pub fn new(distance: usize, length_deltas: &[isize]) -> Self {
        Self {
            distance,
            length_deltas: length_deltas.to_vec(),
        }
    }

    fn accepts_length(&self, word_len: usize, entry_len: usize) -> bool {
        let delta = entry_len as isize - word_len as isize;
        self.length_deltas.contains(&delta)
    }
}

// =========================================================================
// MatchStrategy
// =========================================================================

/// Tiered dictionary search.
///
/// The exact tier (distance 0) runs first; any hit there ends the search
/// with no suggestions. Otherwise the suggestion tiers run in order and
/// the first one left non-empty after its length filter provides the
/// suggestions.
pub struct MatchStrategy {
    /// Comparison passes, tried in order within every tier.
    comparisons: Vec<Box<dyn Comparison>>,
    /// Suggestion tiers, tried in order after the exact tier.
    tiers: Vec<Tier>,
}

impl MatchStrategy {
    pub fn new(comparisons: Vec<Box<dyn Comparison>>, tiers: Vec<Tier>) -> Self {
        Self { comparisons, tiers }
    }

    /// Look `word` up in `dictionary`.
    ///
    /// Total over its inputs: an empty word or dictionary gives empty
    /// tiers, never an error.
    pub fn find(&self, word: &str, dictionary: &Dictionary) -> MatchResult {
        let word_len = word.chars().count();

        let exact = self.scan(word, dictionary, 0);
        if !exact.is_empty() {
            log::debug!("{word:?}: {} exact match(es)", exact.len());
            return MatchResult::exact(words_of(exact));
        }

        for tier in &self.tiers {
            let hits: Vec<&DictionaryEntry> = self
                .scan(word, dictionary, tier.distance)
                .into_iter()
                .filter(|entry| tier.accepts_length(word_len, entry.char_len))
                .collect();
            if !hits.is_empty() {
                log::debug!(
                    "{word:?}: {} suggestion(s) at distance {}",
                    hits.len(),
                    tier.distance
                );
                return MatchResult::candidates(words_of(hits));
            }
        }

        log::debug!("{word:?}: no suggestion");
        MatchResult::candidates(Vec::new())
    }

    /// Collect the entries exactly `distance` edits from `word`, using the
    /// first applicable comparison that yields any entry.
    fn scan<'d>(
        &self,
        word: &str,
        dictionary: &'d Dictionary,
        distance: usize,
    ) -> Vec<&'d DictionaryEntry> {
        for comparison in &self.comparisons {
            if !comparison.applies_to(word) {
                continue;
            }
            let key = comparison.word_key(word);
            let key_len = key.chars().count();
            let hits: Vec<&DictionaryEntry> = dictionary
                .entries()
                .iter()
                .filter(|entry| is_at_distance(&key, key_len, comparison.entry_key(entry), distance))
                .collect();
            log::trace!(
                "{word:?}: {} pass at distance {distance} found {}",
                comparison.name(),
                hits.len()
            );
            if !hits.is_empty() {
                return hits;
            }
        }
        Vec::new()
    }

    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }

    pub fn comparison_count(&self) -> usize {
        self.comparisons.len()
    }
}

fn words_of(entries: Vec<&DictionaryEntry>) -> Vec<String> {
    entries.into_iter().map(|e| e.word.clone()).collect()
}

// =========================================================================
// Factory functions
// =========================================================================

/// The standard strategy: accent-aware pass then normalized pass, with a
/// distance-1 tier allowing length deltas `-1, 0, +1` and a distance-2
/// tier allowing `-2, 0, +2`.
pub fn default_strategy() -> MatchStrategy {
    MatchStrategy::new(
        vec![Box::new(AccentAware), Box::new(Normalized)],
        vec![Tier::new(1, &[-1, 0, 1]), Tier::new(2, &[-2, 0, 2])],
    )
}

// =========================================================================
// Tests
// =========================================================================
