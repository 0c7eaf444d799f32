// Whitespace tokenization

use crate::character::is_sentence_terminal;

/// Token types produced by [`tokenize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// A maximal run of non-whitespace characters, punctuation included.
    Word,
    /// A maximal run of whitespace characters.
    Whitespace,
}

/// A slice of the input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The type of this token.
    pub token_type: TokenType,

    /// The text content of this token.
    pub text: String,
}

impl Token {
    /// Create a new token.
    pub fn new(token_type: TokenType, text: impl Into<String>) -> Self {
        Self {
            token_type,
            text: text.into(),
        }
    }

    pub fn is_word(&self) -> bool {
        self.token_type == TokenType::Word
    }
}

/// Split `text` into alternating word and whitespace tokens.
///
/// Concatenating the token texts reproduces `text` exactly, so callers can
/// rewrite individual word tokens and reassemble without disturbing the
/// original spacing.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut current_type = TokenType::Word;

    for c in text.chars() {
        let token_type = if c.is_whitespace() {
            TokenType::Whitespace
        } else {
            TokenType::Word
        };
        if token_type != current_type && !current.is_empty() {
            tokens.push(Token::new(current_type, std::mem::take(&mut current)));
        }
        if current.is_empty() {
            current_type = token_type;
        }
        current.push(c);
    }
    if !current.is_empty() {
        tokens.push(Token::new(current_type, current));
    }
    tokens
}

/// The whitespace-delimited words of `text`, in order, empty ones dropped.
pub fn words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Returns `true` if the word at `index` starts a sentence: it is the first
/// word, or the word before it ends with `.`, `!` or `?`.
pub fn is_sentence_start<S: AsRef<str>>(words: &[S], index: usize) -> bool {
    if index == 0 {
        return true;
    }
    words
        .get(index - 1)
        .and_then(|prev| prev.as_ref().chars().last())
        .is_some_and(is_sentence_terminal)
}
