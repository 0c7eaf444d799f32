//! Shared character, case and token utilities for caretspell.
//!
//! - [`character`] -- Character classes (word chars, accents, punctuation)
//! - [`case`] -- First-letter capitalization
//! - [`normalize`] -- Case folding, accent stripping, tag stripping
//! - [`token`] -- Whitespace tokenization and the sentence-start rule

pub mod case;
pub mod character;
pub mod normalize;
pub mod token;
