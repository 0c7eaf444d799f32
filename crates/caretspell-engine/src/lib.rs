//! Inline spell suggestion for free-text input.
//!
//! # Architecture
//!
//! - [`dictionary`] -- Immutable word list with precomputed comparison keys
//! - [`matcher`] -- Tiered edit-distance search (`find_suggestions`)
//! - [`checker`] -- `SpellChecker`, the dictionary plus its strategy
//! - [`session`] -- `EditingSession`: caret-driven word extraction, advisory
//!   suggestions and automatic replacement on a bound input surface

pub mod checker;
pub mod dictionary;
pub mod matcher;
pub mod session;

pub use checker::SpellChecker;
pub use dictionary::{Dictionary, DictionaryError};
pub use matcher::{MatchResult, Suggestions, find_suggestions};
pub use session::{EditingSession, SessionError, SessionOptions};
