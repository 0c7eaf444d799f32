// Dictionary: an immutable, ordered list of known-correct words

use std::path::{Path, PathBuf};

use caretspell_core::normalize::{fold_case, normalize_word};

/// Error type for dictionary loading failures.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    /// The dictionary file could not be read.
    #[error("failed to read dictionary {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The dictionary is not a JSON array of strings.
    #[error("invalid JSON dictionary: {0}")]
    Json(#[from] serde_json::Error),
}

/// A dictionary word together with its precomputed comparison keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryEntry {
    /// The word as it appears in the source list.
    pub word: String,
    /// Lower-cased form, accents kept.
    pub folded: String,
    /// Lower-cased form with accents stripped.
    pub normalized: String,
    /// Length of `word` in characters.
    pub char_len: usize,
}

impl DictionaryEntry {
    pub fn new(word: impl Into<String>) -> Self {
        let word = word.into();
        Self {
            folded: fold_case(&word),
            normalized: normalize_word(&word),
            char_len: word.chars().count(),
            word,
        }
    }
}

/// An ordered sequence of known-correct words.
///
/// Order and duplicates from the source are kept. The dictionary is never
/// mutated after construction; lookups scan it linearly.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: Vec<DictionaryEntry>,
}

impl Dictionary {
    /// Build a dictionary from an ordered list of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: words.into_iter().map(DictionaryEntry::new).collect(),
        }
    }

    /// Parse a JSON array of strings, e.g. `["hello", "world"]`.
    pub fn from_json_str(json: &str) -> Result<Self, DictionaryError> {
        let words: Vec<String> = serde_json::from_str(json)?;
        Ok(Self::from_words(words))
    }

    /// Parse a plain word list: one word per line. Blank lines and lines
    /// starting with `#` are skipped.
    pub fn from_lines(text: &str) -> Self {
        Self::from_words(
            text.lines()
                .map(str::trim)
                .filter(|l| !l.is_empty() && !l.starts_with('#')),
        )
    }

    /// Load a dictionary file. Files with a `.json` extension are parsed as
    /// a JSON array, anything else as a plain word list.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let dictionary = if is_json {
            Self::from_json_str(&text)?
        } else {
            Self::from_lines(&text)
        };
        log::debug!(
            "loaded {} dictionary words from {}",
            dictionary.len(),
            path.display()
        );
        Ok(dictionary)
    }

    pub fn entries(&self) -> &[DictionaryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the dictionary words in order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.word.as_str())
    }
}

impl<S: Into<String>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}
